// SPDX-License-Identifier: PMPL-1.0-or-later

//! Escaped markup fragments.

use std::fmt;

/// A fragment of HTML that is already safe to embed.
///
/// Text only becomes `Markup` through [`escape`] or through the renderers,
/// so a fragment is never escaped twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Wrap a string that is already HTML. Only for literal templates.
    pub(crate) fn raw(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn push(&mut self, other: &Markup) {
        self.0.push_str(&other.0);
    }

    pub(crate) fn push_raw(&mut self, html: &str) {
        self.0.push_str(html);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = Markup::new();
        for part in iter {
            out.push(&part);
        }
        out
    }
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// An anchor that opens in a new browsing context.
pub fn external_link(href: &str, class: &str, label: &str, body: &Markup) -> Markup {
    Markup::raw(format!(
        r#"<a href="{}" class="{}" target="_blank" rel="noopener noreferrer" aria-label="{}">{}</a>"#,
        escape(href),
        class,
        escape(label),
        body
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("Diseño | VFX"), "Diseño | VFX");
    }

    #[test]
    fn external_link_escapes_href() {
        let link = external_link("https://a.b/?x=1&y=2", "btn", "Go", &Markup::raw("→"));
        assert!(link.as_str().contains(r#"href="https://a.b/?x=1&amp;y=2""#));
        assert!(link.as_str().contains(r#"target="_blank""#));
    }
}
