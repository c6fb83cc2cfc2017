// SPDX-License-Identifier: PMPL-1.0-or-later

//! Single-item renderers: project cards, work entries, education entries.

use super::html::{escape, external_link, Markup};
use super::icons;
use super::PageContext;
use crate::resolve::{ResolvedEducation, ResolvedProject, ResolvedWork};

const LINK_CLASS: &str = "inline-flex grow items-center justify-center rounded-xl bg-neutral-300/60 p-2 opacity-80 transition-opacity duration-150 hover:opacity-100 border border-neutral-400 dark:bg-neutral-700 dark:border-neutral-600";

fn tag_list(tags: &[String], class: &str) -> Markup {
    tags.iter()
        .map(|tag| Markup::raw(format!(r#"<span class="{class}">{}</span>"#, escape(tag))))
        .collect()
}

/// One project card. Links are emitted only for the ones the record has.
pub fn project_item(project: &ResolvedProject) -> Markup {
    let title = escape(&project.title);
    let mut out = Markup::raw(format!(
        r#"<article class="project flex flex-col gap-3 rounded-xl p-3 sm:p-4" data-key="{}"><div class="flex flex-col"><h3 class="py-2 text-base font-semibold sm:text-lg">{}</h3><p class="mb-2 py-2 text-xs leading-relaxed sm:text-sm">{}</p><div class="tags mb-2 flex flex-wrap gap-1 py-2">"#,
        escape(&project.key),
        title,
        escape(&project.description),
    ));
    out.push(&tag_list(
        &project.technologies,
        "tag rounded-lg border px-2 py-0.5 text-xs",
    ));
    out.push_raw(&format!(
        r#"</div><div class="relative h-32 w-full sm:h-40"><img class="h-full w-full rounded-xl object-cover object-top" src="{}" alt="{} image"></div></div>"#,
        escape(&project.img),
        title,
    ));

    out.push_raw(r#"<div class="links mt-1 flex gap-2">"#);
    if let Some(href) = &project.github_link {
        out.push(&external_link(
            href,
            LINK_CLASS,
            "Link to Github repository",
            &Markup::raw(icons::github("size-4")),
        ));
    }
    if let Some(href) = &project.preview_link {
        out.push(&external_link(
            href,
            LINK_CLASS,
            "Link to live preview",
            &Markup::raw(icons::screen_share("size-4")),
        ));
    }
    out.push_raw("</div></article>");
    out
}

/// One work-history entry. The whole card links to the company page.
pub fn work_item(ctx: &PageContext<'_>, work: &ResolvedWork) -> Markup {
    let mut out = Markup::raw(format!(
        r#"<article class="work group relative" data-key="{}"><div class="rounded-xl border p-4 sm:p-6"><header class="mb-4 sm:mb-6"><div class="mb-2 flex items-center gap-2"><h3 class="text-lg font-semibold leading-tight sm:text-xl">{}</h3>{}</div><div class="flex flex-col gap-2 text-sm sm:flex-row sm:items-center sm:gap-4"><span class="company font-medium">{}</span><span class="time flex items-center gap-1">{}<span class="text-xs sm:text-sm">{}</span></span><span class="location flex items-center gap-1">{}<span class="text-xs sm:text-sm">{}</span></span></div></header>"#,
        escape(&work.key),
        escape(&work.title),
        icons::external_link("h-4 w-4 flex-shrink-0"),
        escape(&work.company_name),
        icons::calendar("h-3 w-3 flex-shrink-0"),
        escape(&work.time),
        icons::map_pin("h-3 w-3 flex-shrink-0"),
        escape(&work.location),
    ));
    out.push_raw(&format!(
        r#"<p class="description mb-4 text-sm leading-relaxed sm:mb-6 sm:text-base">{}</p>"#,
        escape(&work.description)
    ));

    out.push_raw(&format!(
        r#"<div class="mb-4 sm:mb-6"><h4 class="mb-3 text-sm font-semibold">{}</h4><div class="tags flex flex-wrap gap-2">"#,
        escape(ctx.label("technologies"))
    ));
    out.push(&tag_list(
        &work.technologies,
        "tag rounded-full border px-2 py-1 text-xs sm:px-3",
    ));
    out.push_raw("</div></div>");

    out.push_raw(&format!(
        r#"<div class="mb-4 sm:mb-6"><h4 class="mb-3 text-sm font-semibold">{}</h4><ul class="achievements space-y-2">"#,
        escape(ctx.label("keyAchievements"))
    ));
    for achievement in &work.achievements {
        out.push_raw(&format!(
            r#"<li class="flex items-start gap-2 text-sm"><span class="mt-2 h-1.5 w-1.5 flex-shrink-0 rounded-full bg-blue-600"></span><span class="leading-relaxed">{}</span></li>"#,
            escape(achievement)
        ));
    }
    out.push_raw("</ul></div>");

    out.push_raw(&format!(
        r#"<div><h4 class="mb-3 text-sm font-semibold">{}</h4><div class="showcase relative flex aspect-video items-center justify-center overflow-hidden rounded-lg border">{}</div></div>"#,
        escape(ctx.label("workShowcase")),
        icons::play("h-6 w-6 sm:h-8 sm:w-8"),
    ));

    out.push(&external_link(
        &work.company_url,
        "overlay absolute inset-0 h-full w-full opacity-0",
        &format!("Visit {}", work.company_name),
        &Markup::new(),
    ));
    out.push_raw("</div></article>");
    out
}

pub fn education_item(education: &ResolvedEducation) -> Markup {
    let mut out = Markup::raw(format!(
        r#"<article class="education rounded-xl border p-4 sm:p-6" data-key="{}"><h3 class="mb-2 text-lg font-semibold">{}</h3>"#,
        escape(&education.key),
        escape(&education.title),
    ));
    for detail in &education.details {
        out.push_raw(&format!(
            r#"<p class="text-sm leading-relaxed">{}</p>"#,
            escape(detail)
        ));
    }
    out.push_raw("</article>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_project() -> ResolvedProject {
        ResolvedProject {
            key: "bare".into(),
            title: "Bare <project>".into(),
            description: "No links here".into(),
            technologies: vec!["Rust".into(), "HTML".into()],
            img: "bare.png".into(),
            github_link: None,
            preview_link: None,
        }
    }

    #[test]
    fn project_without_links_renders_no_anchors() {
        let html = project_item(&bare_project()).into_string();
        assert!(!html.contains("<a "));
        assert!(html.contains("Bare &lt;project&gt;"));
        assert_eq!(html.matches(r#"class="tag "#).count(), 2);
    }

    #[test]
    fn project_renders_only_present_links() {
        let mut project = bare_project();
        project.preview_link = Some("https://example.com".into());
        let html = project_item(&project).into_string();
        assert_eq!(html.matches("<a ").count(), 1);
        assert!(html.contains("Link to live preview"));
        assert!(!html.contains("Link to Github repository"));

        project.github_link = Some("https://github.com/x/y".into());
        let html = project_item(&project).into_string();
        assert_eq!(html.matches("<a ").count(), 2);
    }

    #[test]
    fn education_renders_each_detail() {
        let html = education_item(&ResolvedEducation {
            key: "daw".into(),
            title: "DAW".into(),
            details: vec!["one".into(), "two".into()],
        })
        .into_string();
        assert_eq!(html.matches("<p ").count(), 2);
    }
}
