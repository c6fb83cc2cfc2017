// SPDX-License-Identifier: PMPL-1.0-or-later

//! HTML rendering of the portfolio page.
//!
//! Renderers are pure: they read the content catalog and the localization
//! store through a [`PageContext`] and return markup. The active language
//! lives in the context and the active projects tab in [`ProjectsView`];
//! neither is global.

pub mod card;
pub mod education;
pub mod html;
mod icons;
pub mod items;
pub mod page;
pub mod projects;
pub mod work;

use crate::content::ContentCatalog;
use crate::i18n::{Lang, Localization};

pub use html::{escape, Markup};
pub use page::render_page;
pub use projects::ProjectsView;

/// Read-only inputs shared by every renderer of one page.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub lang: Lang,
    pub store: &'a Localization,
    pub catalog: &'a ContentCatalog,
    /// Overrides the localized document title when set.
    pub base_title: Option<&'a str>,
}

impl<'a> PageContext<'a> {
    pub fn new(lang: Lang, store: &'a Localization, catalog: &'a ContentCatalog) -> Self {
        Self {
            lang,
            store,
            catalog,
            base_title: None,
        }
    }

    pub fn with_base_title(mut self, title: Option<&'a str>) -> Self {
        self.base_title = title;
        self
    }

    /// Text of the document `<title>`.
    pub fn document_title(&self) -> String {
        match self.base_title {
            Some(title) if !title.trim().is_empty() => title.to_string(),
            _ => format!("{} | {}", self.label("title"), self.label("subtitle")),
        }
    }

    /// UI label in the active language; never empty for a non-empty key.
    pub fn label(&self, key: &'a str) -> &'a str {
        self.store.label(self.lang, key)
    }
}
