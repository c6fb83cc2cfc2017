// SPDX-License-Identifier: PMPL-1.0-or-later

//! Flat UI label catalog for folio.
//!
//! Embeds the short page strings (headings, button text, footer) for both
//! supported languages as compile-time static tables. Lookup is a linear scan
//! over ~20 keys per language, which only happens while a page is rendered.
//!
//! ## Adding a new key
//!
//! 1. Add the Spanish entry to `ES`
//! 2. Add the English entry to `EN` (both tables must carry the same keys)

use serde::{Deserialize, Serialize};

/// Languages the portfolio is published in.
///
/// Each variant maps to an ISO 639-1 two-letter code, which is also the
/// directory name of that language's pages in a built site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Es,
    En,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Returns `None` for unsupported codes. Case-sensitive (codes must be
    /// lowercase per ISO 639-1).
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "es" => Some(Lang::Es),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::Es, Lang::En]
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Lang::Es => "Spanish",
            Lang::En => "English",
        }
    }

    /// Name of the language in the language itself, used by the page switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::Es => "Español",
            Lang::En => "English",
        }
    }

    /// The language a reader switches to from this one.
    pub fn other(&self) -> Lang {
        match self {
            Lang::Es => Lang::En,
            Lang::En => Lang::Es,
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Es
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─── Label Lookup ───────────────────────────────────────────────────

/// Look up a UI label in the specified language.
///
/// Returns `""` when the key is unknown. Callers that must never render an
/// empty string use [`t_or_key`].
///
/// # Examples
///
/// ```
/// use folio::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "projectsTitle"), "Projects");
/// assert_eq!(t(Lang::Es, "projectsTitle"), "Proyectos");
/// ```
pub fn t(lang: Lang, key: &str) -> &'static str {
    lookup(catalog_for(lang), key).unwrap_or("")
}

/// Returns the label or the key itself if missing.
pub fn t_or_key<'a>(lang: Lang, key: &'a str) -> &'a str {
    let result = t(lang, key);
    if result.is_empty() {
        key
    } else {
        result
    }
}

/// Keys defined by the built-in tables, in Spanish table order.
pub fn label_keys() -> impl Iterator<Item = &'static str> {
    ES.iter().map(|&(k, _)| k)
}

/// Built-in label pairs for a language.
pub fn labels(lang: Lang) -> &'static [(&'static str, &'static str)] {
    catalog_for(lang)
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|&&(k, _)| k == key).map(|&(_, v)| v)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::Es => ES,
        Lang::En => EN,
    }
}

// ─── Spanish ────────────────────────────────────────────────────────

const ES: &[(&str, &str)] = &[
    // Header
    ("openToWork", "Disponible"),
    // Main section
    ("title", "Iván Mayoral Capel"),
    ("subtitle", "Desarrollador FullStack - UI/UX & VFX Creator"),
    ("description", "Diseñando interfaces intuitivas y desarrollando soluciones centradas en el usuario, combinando creatividad y experiencia técnica para crear experiencias digitales fluidas."),
    // About
    ("aboutTitle", "Sobre mí"),
    ("aboutDescription", "Soy un desarrollador Full Stack apasionado por crear experiencias digitales excepcionales. Combino habilidades técnicas sólidas con un enfoque creativo para desarrollar soluciones innovadoras que resuelven problemas reales."),
    // Education
    ("educationTitle", "Educación"),
    ("educationSubtitle", "Mi trayectoria académica y profesional"),
    // Work experience
    ("workExperience", "Experiencia Laboral"),
    ("keyAchievements", "Logros"),
    ("workShowcase", "Portfolio de Trabajo"),
    ("technologies", "Tecnologías"),
    // Projects
    ("projectsTitle", "Proyectos"),
    ("webProjects", "Proyectos Web"),
    ("vfxProjects", "Proyectos VFX"),
    ("moreWebProjects", "Más Proyectos Web"),
    ("moreVfxProjects", "Más Proyectos VFX & GFX"),
    // Footer
    ("footerText", "© 2025 Iván Mayoral. Todos los derechos reservados."),
];

// ─── English ────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    // Header
    ("openToWork", "Open To Work"),
    // Main section
    ("title", "Iván Mayoral Capel"),
    ("subtitle", "Full Stack Developer - UI/UX & VFX Creator"),
    ("description", "Designing intuitive interfaces and developing user-centric solutions, blending creativity and technical expertise to craft seamless digital experiences."),
    // About
    ("aboutTitle", "About me"),
    ("aboutDescription", "I'm a passionate Full Stack developer dedicated to creating exceptional digital experiences. I combine solid technical skills with a creative approach to develop innovative solutions that solve real problems."),
    // Education
    ("educationTitle", "Education"),
    ("educationSubtitle", "My academic and professional journey"),
    // Work experience
    ("workExperience", "Work Experience"),
    ("keyAchievements", "Achievements"),
    ("workShowcase", "Work Portfolio"),
    ("technologies", "Technologies"),
    // Projects
    ("projectsTitle", "Projects"),
    ("webProjects", "Web Projects"),
    ("vfxProjects", "VFX Projects"),
    ("moreWebProjects", "More Web Projects"),
    ("moreVfxProjects", "More VFX & GFX Projects"),
    // Footer
    ("footerText", "© 2025 Iván Mayoral. All rights reserved."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_keys_all_resolve() {
        for &(key, _) in ES {
            let result = t(Lang::Es, key);
            assert!(!result.is_empty(), "ES key '{}' should resolve", key);
        }
    }

    #[test]
    fn every_spanish_key_has_an_english_label() {
        for key in label_keys() {
            assert!(!t(Lang::En, key).is_empty(), "EN missing '{}'", key);
        }
    }

    #[test]
    fn unknown_key_returns_empty() {
        assert_eq!(t(Lang::En, "nonexistent.key"), "");
    }

    #[test]
    fn t_or_key_returns_key_for_missing() {
        assert_eq!(t_or_key(Lang::Es, "nonexistent.key"), "nonexistent.key");
        assert_eq!(t_or_key(Lang::Es, "technologies"), "Tecnologías");
    }

    #[test]
    fn lang_roundtrip() {
        for lang in Lang::all() {
            let parsed = Lang::from_code(lang.code()).expect("should parse");
            assert_eq!(*lang, parsed);
        }
        assert_eq!(Lang::from_code("EN"), None);
        assert_eq!(Lang::from_code("fr"), None);
    }

    #[test]
    fn other_flips_between_the_two_languages() {
        assert_eq!(Lang::Es.other(), Lang::En);
        assert_eq!(Lang::En.other(), Lang::Es);
    }

    #[test]
    fn catalogs_have_same_key_count() {
        assert_eq!(ES.len(), EN.len(), "EN catalog key count mismatch");
    }
}
