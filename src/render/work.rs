// SPDX-License-Identifier: PMPL-1.0-or-later

//! Work experience section.

use super::card::card;
use super::html::{escape, Markup};
use super::items::work_item;
use super::PageContext;
use crate::resolve::ResolvedWork;

pub struct WorkExperienceView;

impl WorkExperienceView {
    pub fn render(ctx: &PageContext<'_>) -> Markup {
        let items: Markup = ctx
            .catalog
            .work
            .iter()
            .map(|record| work_item(ctx, &ResolvedWork::new(record, ctx.store, ctx.lang)))
            .collect();

        let mut list = Markup::raw(r#"<div class="space-y-6 sm:space-y-8">"#);
        list.push(&items);
        list.push_raw("</div>");

        let mut out = Markup::raw(format!(
            r#"<section id="work" class="mx-auto max-w-7xl p-4 sm:p-8"><h2 class="mb-8 text-center text-5xl font-bold">{}</h2>"#,
            escape(ctx.label("workExperience")),
        ));
        out.push(&card(&list));
        out.push_raw("</section>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentCatalog;
    use crate::i18n::{Lang, Localization};

    #[test]
    fn renders_localized_heading_and_entries() {
        let store = Localization::builtin();
        let catalog = ContentCatalog::builtin();
        let html = WorkExperienceView::render(&PageContext::new(Lang::Es, &store, &catalog)).into_string();
        assert!(html.contains("Experiencia Laboral"));
        assert!(html.contains("Canal de Peereira7"));
        assert!(html.contains("Logros"));
        assert!(html.contains(r#"href="https://youtube.com/@Peereira7""#));
        assert_eq!(html.matches("<li ").count(), 4);
    }

    #[test]
    fn empty_store_renders_record_fallbacks() {
        let store = Localization::empty();
        let catalog = ContentCatalog::builtin();
        let html = WorkExperienceView::render(&PageContext::new(Lang::Es, &store, &catalog)).into_string();
        assert!(html.contains("VFX &amp; GFX Creator | Channel Manager"));
        assert!(html.contains("Madrid, Spain"));
        // Labels still come from the built-in catalog.
        assert!(html.contains("Tecnologías"));
    }
}
