// SPDX-License-Identifier: PMPL-1.0-or-later

//! Full page assembly.

use super::education::EducationView;
use super::html::{escape, Markup};
use super::projects::ProjectsView;
use super::work::WorkExperienceView;
use super::PageContext;
use crate::types::ProjectTab;

/// Render the complete HTML document for one language with `tab` selected.
///
/// Pages of a built site live in `<lang>/`; the language switch points at
/// the same tab in the sibling language directory.
pub fn render_page(ctx: &PageContext<'_>, tab: ProjectTab) -> String {
    let mut body = Markup::new();
    body.push(&header(ctx, tab));
    body.push(&about(ctx));
    body.push(&EducationView::render(ctx));
    body.push(&WorkExperienceView::render(ctx));
    body.push(&ProjectsView::with_tab(tab).render(ctx));
    body.push_raw(&format!(
        r#"<footer class="py-8 text-center text-sm text-neutral-500">{}</footer>"#,
        escape(ctx.label("footerText"))
    ));

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="{lang}">"#,
            "\n<head>\n",
            r#"<meta charset="utf-8">"#,
            "\n",
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "\n",
            r#"<meta name="description" content="{description}">"#,
            "\n<title>{title}</title>\n",
            r#"<link rel="alternate" hreflang="{other}" href="../{other}/{file}">"#,
            "\n</head>\n",
            r#"<body class="bg-neutral-50 text-neutral-800 dark:bg-neutral-950 dark:text-neutral-100">"#,
            "\n{body}\n</body>\n</html>\n"
        ),
        lang = ctx.lang,
        description = escape(ctx.label("description")),
        title = escape(&ctx.document_title()),
        other = ctx.lang.other(),
        file = tab.page_file(),
        body = body,
    )
}

fn header(ctx: &PageContext<'_>, tab: ProjectTab) -> Markup {
    let other = ctx.lang.other();
    Markup::raw(format!(
        r#"<header class="mx-auto flex max-w-7xl flex-col items-center gap-4 p-4 text-center sm:p-8"><nav class="lang-switch self-end"><a href="../{}/{}" hreflang="{}" lang="{}">{}</a></nav><span class="badge rounded-full border px-3 py-1 text-sm">{}</span><h1 class="text-5xl font-bold">{}</h1><p class="subtitle text-xl">{}</p><p class="description max-w-2xl text-neutral-600">{}</p></header>"#,
        other,
        tab.page_file(),
        other,
        other,
        escape(other.native_name()),
        escape(ctx.label("openToWork")),
        escape(ctx.label("title")),
        escape(ctx.label("subtitle")),
        escape(ctx.label("description")),
    ))
}

fn about(ctx: &PageContext<'_>) -> Markup {
    Markup::raw(format!(
        r#"<section id="about" class="mx-auto max-w-7xl p-4 sm:p-8"><h2 class="mb-4 text-center text-4xl font-bold">{}</h2><p class="mx-auto max-w-3xl leading-relaxed">{}</p></section>"#,
        escape(ctx.label("aboutTitle")),
        escape(ctx.label("aboutDescription")),
    ))
}
