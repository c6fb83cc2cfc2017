// SPDX-License-Identifier: PMPL-1.0-or-later

//! Projects section with its web / design tab switch.

use super::card::card;
use super::html::{escape, external_link, Markup};
use super::icons;
use super::items::project_item;
use super::PageContext;
use crate::resolve::ResolvedProject;
use crate::types::ProjectTab;

const TAB_CLASS: &str = "tab flex flex-1 items-center gap-1.5 rounded-lg px-3 py-2 text-xs font-medium transition-all duration-200 sm:flex-none sm:gap-2 sm:px-4 sm:text-sm";
const TAB_ACTIVE: &str = "bg-white text-neutral-900 shadow-sm dark:bg-neutral-700 dark:text-neutral-100";
const TAB_IDLE: &str = "text-neutral-600 hover:text-neutral-900 dark:text-neutral-400 dark:hover:text-neutral-100";
const MORE_CLASS: &str = "more group flex w-full items-center justify-center rounded-xl border px-4 py-3 text-sm font-medium opacity-80 transition-opacity duration-150 hover:opacity-100 sm:px-6 sm:py-4 sm:text-base";

/// The projects list. Its only state is the selected tab, `web` initially.
///
/// Selecting a tab replaces the state directly; the records themselves are
/// never touched, so switching back renders exactly what was shown before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectsView {
    tab: ProjectTab,
}

impl ProjectsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tab(tab: ProjectTab) -> Self {
        Self { tab }
    }

    pub fn active(&self) -> ProjectTab {
        self.tab
    }

    pub fn select(&mut self, tab: ProjectTab) {
        self.tab = tab;
    }

    pub fn render(&self, ctx: &PageContext<'_>) -> Markup {
        let mut body = self.render_tabs(ctx);

        body.push_raw(r#"<div class="grid grid-cols-1 gap-4 sm:gap-6 md:grid-cols-2">"#);
        for record in ctx.catalog.projects(self.tab) {
            let project = ResolvedProject::new(record, ctx.store, ctx.lang);
            body.push(&project_item(&project));
        }
        body.push_raw("</div>");

        let more = Markup::raw(format!(
            "{}{}",
            escape(ctx.label(self.tab.more_label_key())),
            icons::move_right("ml-2 size-4 opacity-70"),
        ));
        let aria = match self.tab {
            ProjectTab::Web => "Explore more web projects",
            ProjectTab::Design => "Explore more design projects",
        };
        body.push_raw(r#"<div class="mt-6 flex w-full justify-center sm:mt-8">"#);
        body.push(&external_link(
            ctx.catalog.profile.more_projects_url(self.tab),
            MORE_CLASS,
            aria,
            &more,
        ));
        body.push_raw("</div>");

        let mut out = Markup::raw(format!(
            r#"<section id="projects" class="mx-auto max-w-7xl p-4 sm:p-8" data-tab="{}"><h2 class="mb-8 text-center text-5xl font-bold">{}</h2>"#,
            self.tab,
            escape(ctx.label("projectsTitle")),
        ));
        out.push(&card(&body));
        out.push_raw("</section>");
        out
    }

    fn render_tabs(&self, ctx: &PageContext<'_>) -> Markup {
        let mut out = Markup::raw(
            r#"<nav class="tabs mx-auto mb-6 flex w-full rounded-xl bg-neutral-200 p-1 dark:bg-neutral-800 sm:w-auto">"#,
        );
        for &tab in ProjectTab::all() {
            let (state, current) = if tab == self.tab {
                (TAB_ACTIVE, r#" aria-current="page""#)
            } else {
                (TAB_IDLE, "")
            };
            let icon = match tab {
                ProjectTab::Web => icons::code("h-3 w-3 sm:h-4 sm:w-4"),
                ProjectTab::Design => icons::palette("h-3 w-3 sm:h-4 sm:w-4"),
            };
            out.push_raw(&format!(
                r##"<a href="{}#projects" class="{TAB_CLASS} {state}" data-tab="{}"{current}>{icon}<span>{}</span></a>"##,
                tab.page_file(),
                tab,
                escape(ctx.label(tab.label_key())),
            ));
        }
        out.push_raw("</nav>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentCatalog;
    use crate::i18n::{Lang, Localization};

    #[test]
    fn starts_on_web_tab() {
        assert_eq!(ProjectsView::new().active(), ProjectTab::Web);
    }

    #[test]
    fn toggling_back_renders_the_initial_set() {
        let store = Localization::builtin();
        let catalog = ContentCatalog::builtin();
        let ctx = PageContext::new(Lang::En, &store, &catalog);

        let mut view = ProjectsView::new();
        let initial = view.render(&ctx);
        view.select(ProjectTab::Design);
        let design = view.render(&ctx);
        view.select(ProjectTab::Web);
        let back = view.render(&ctx);

        assert_ne!(initial, design);
        assert_eq!(initial, back);
        assert_eq!(catalog, ContentCatalog::builtin());
    }

    #[test]
    fn design_tab_lists_design_projects_only() {
        let store = Localization::builtin();
        let catalog = ContentCatalog::builtin();
        let ctx = PageContext::new(Lang::Es, &store, &catalog);
        let html = ProjectsView::with_tab(ProjectTab::Design).render(&ctx).into_string();

        assert!(html.contains(r#"data-key="thebliss""#));
        assert!(html.contains(r#"data-key="peereira7""#));
        assert!(!html.contains(r#"data-key="dawflix""#));
        assert!(html.contains("Más Proyectos VFX &amp; GFX"));
        assert!(html.contains("https://www.behance.net/ivanmayoralvfx"));
    }

    #[test]
    fn active_tab_is_marked_current() {
        let store = Localization::builtin();
        let catalog = ContentCatalog::builtin();
        let ctx = PageContext::new(Lang::En, &store, &catalog);
        let html = ProjectsView::new().render(&ctx).into_string();
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
        assert!(html.contains(r#"data-tab="web" aria-current="page""#));
    }
}
