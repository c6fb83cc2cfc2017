// SPDX-License-Identifier: PMPL-1.0-or-later

//! Education section.

use super::card::card;
use super::html::{escape, Markup};
use super::items::education_item;
use super::PageContext;
use crate::resolve::ResolvedEducation;

pub struct EducationView;

impl EducationView {
    pub fn render(ctx: &PageContext<'_>) -> Markup {
        let mut list = Markup::raw(r#"<div class="grid gap-4 sm:gap-6">"#);
        for record in &ctx.catalog.education {
            list.push(&education_item(&ResolvedEducation::new(record, ctx.store, ctx.lang)));
        }
        list.push_raw("</div>");

        let mut out = Markup::raw(format!(
            r#"<section id="education" class="mx-auto max-w-7xl p-4 sm:p-8"><h2 class="mb-2 text-center text-5xl font-bold">{}</h2><p class="mb-8 text-center text-neutral-600">{}</p>"#,
            escape(ctx.label("educationTitle")),
            escape(ctx.label("educationSubtitle")),
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
    fn lists_every_education_entry() {
        let store = Localization::builtin();
        let catalog = ContentCatalog::builtin();
        let html = EducationView::render(&PageContext::new(Lang::En, &store, &catalog)).into_string();
        assert!(html.contains("Computer Engineering"));
        assert!(html.contains("Web Application Development (DAW)"));
        assert!(html.contains("My academic and professional journey"));
    }
}
