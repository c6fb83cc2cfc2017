// SPDX-License-Identifier: PMPL-1.0-or-later

//! Merge of content records with their localized text.
//!
//! Every displayable field is chosen on its own: the translated value when
//! the store has one and it is not blank, else the literal fallback carried
//! by the record. A translation that only supplies a title still combines
//! with the record's own description.

use crate::content::ContentCatalog;
use crate::i18n::{Lang, Localization};
use crate::types::*;
use serde::Serialize;

/// Translated value if present and non-blank, else the fallback.
pub fn or_default(translated: Option<&str>, fallback: &str) -> String {
    match translated {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => fallback.to_string(),
    }
}

/// List variant of [`or_default`].
///
/// Blank items are dropped; a translated list with nothing left counts as
/// absent.
pub fn list_or_default(translated: Option<&[String]>, fallback: &[String]) -> Vec<String> {
    let non_blank = |items: &[String]| -> Vec<String> {
        items
            .iter()
            .filter(|item| !item.trim().is_empty())
            .cloned()
            .collect()
    };
    match translated.map(non_blank) {
        Some(items) if !items.is_empty() => items,
        _ => non_blank(fallback),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedProject {
    pub key: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub img: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_link: Option<String>,
}

impl ResolvedProject {
    pub fn new(record: &ProjectRecord, store: &Localization, lang: Lang) -> Self {
        let text = store.project(lang, &record.key);
        if text.is_none() {
            tracing::debug!("{lang}: no project text for '{}', using fallback", record.key);
        }
        Self {
            key: record.key.clone(),
            title: or_default(text.map(|t| t.title.as_str()), &record.title),
            description: or_default(text.map(|t| t.description.as_str()), &record.description),
            technologies: record.technologies.clone(),
            img: record.img.clone(),
            github_link: record.github_link.clone(),
            preview_link: record.preview_link.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedWork {
    pub key: String,
    pub time: String,
    pub company_url: String,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub achievements: Vec<String>,
}

impl ResolvedWork {
    pub fn new(record: &WorkRecord, store: &Localization, lang: Lang) -> Self {
        let text = store.work(lang, &record.key);
        if text.is_none() {
            tracing::debug!("{lang}: no work text for '{}', using fallback", record.key);
        }
        Self {
            key: record.key.clone(),
            time: record.time.clone(),
            company_url: record.company_url.clone(),
            title: or_default(text.map(|t| t.title.as_str()), &record.title),
            company_name: or_default(text.map(|t| t.company_name.as_str()), &record.company_name),
            location: or_default(text.map(|t| t.location.as_str()), &record.location),
            description: or_default(text.map(|t| t.description.as_str()), &record.description),
            technologies: record.technologies.clone(),
            achievements: list_or_default(
                text.map(|t| t.achievements.as_slice()),
                &record.achievements,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEducation {
    pub key: String,
    pub title: String,
    pub details: Vec<String>,
}

impl ResolvedEducation {
    pub fn new(record: &EducationRecord, store: &Localization, lang: Lang) -> Self {
        let text = store.education(lang, &record.key);
        if text.is_none() {
            tracing::debug!("{lang}: no education text for '{}', using fallback", record.key);
        }
        Self {
            key: record.key.clone(),
            title: or_default(text.map(|t| t.title.as_str()), &record.title),
            details: list_or_default(text.map(|t| t.details.as_slice()), &record.details),
        }
    }
}

/// Everything one page shows, fully resolved for one language and tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPage {
    pub lang: Lang,
    pub tab: ProjectTab,
    pub education: Vec<ResolvedEducation>,
    pub work: Vec<ResolvedWork>,
    pub projects: Vec<ResolvedProject>,
    pub more_projects_url: String,
}

impl ResolvedPage {
    pub fn new(catalog: &ContentCatalog, store: &Localization, lang: Lang, tab: ProjectTab) -> Self {
        Self {
            lang,
            tab,
            education: catalog
                .education
                .iter()
                .map(|record| ResolvedEducation::new(record, store, lang))
                .collect(),
            work: catalog
                .work
                .iter()
                .map(|record| ResolvedWork::new(record, store, lang))
                .collect(),
            projects: catalog
                .projects(tab)
                .iter()
                .map(|record| ResolvedProject::new(record, store, lang))
                .collect(),
            more_projects_url: catalog.profile.more_projects_url(tab).to_string(),
        }
    }
}
