// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for folio
//!
//! Content records hold the untranslated attributes of a displayed item
//! (image, technology tags, links) together with the content key that finds
//! its localized text and the literal fallback text shown when no
//! translation exists for the active language.

use serde::{Deserialize, Serialize};

/// Which list the projects section shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectTab {
    #[default]
    Web,
    Design,
}

impl ProjectTab {
    pub fn all() -> &'static [ProjectTab] {
        &[ProjectTab::Web, ProjectTab::Design]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectTab::Web => "web",
            ProjectTab::Design => "design",
        }
    }

    /// File name of this tab's page inside a language directory.
    pub fn page_file(&self) -> &'static str {
        match self {
            ProjectTab::Web => "index.html",
            ProjectTab::Design => "design.html",
        }
    }

    /// Label key of the tab button.
    pub fn label_key(&self) -> &'static str {
        match self {
            ProjectTab::Web => "webProjects",
            ProjectTab::Design => "vfxProjects",
        }
    }

    /// Label key of the "more projects" button under the list.
    pub fn more_label_key(&self) -> &'static str {
        match self {
            ProjectTab::Web => "moreWebProjects",
            ProjectTab::Design => "moreVfxProjects",
        }
    }
}

impl std::fmt::Display for ProjectTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub key: String,
    /// Fallback title.
    pub title: String,
    /// Fallback description.
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub img: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_link: Option<String>,
}

/// An entry of the work history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRecord {
    pub id: u32,
    pub key: String,
    pub time: String,
    pub company_url: String,
    /// Fallback texts, used field by field when a translation is missing.
    pub company_name: String,
    pub location: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// An education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRecord {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub details: Vec<String>,
}

/// Destinations of the "more projects" buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub web_projects_url: String,
    pub design_projects_url: String,
}

impl Profile {
    pub fn more_projects_url(&self, tab: ProjectTab) -> &str {
        match tab {
            ProjectTab::Web => &self.web_projects_url,
            ProjectTab::Design => &self.design_projects_url,
        }
    }
}
