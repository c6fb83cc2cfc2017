// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localization store: per-language bundles of labels and content texts.
//!
//! A bundle mirrors the translation document the site is authored with:
//! flat label strings at the top level plus three nested dictionaries
//! (`educationData`, `workData`, `projects`) keyed by content key. Content
//! keys are stable across languages, so a record defined once in the content
//! catalog finds its text in every bundle that carries it.
//!
//! [`Localization::resolve`] never invents text. Absence is reported as
//! `None` and the caller substitutes the literal fallback it was defined with
//! (see [`crate::resolve`]).

use super::catalog::{t_or_key, Lang};
use super::texts;
use crate::data;
use crate::error::SiteError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Localized text of a project card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectText {
    pub title: String,
    pub description: String,
}

/// Localized text of a work-history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkText {
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub description: String,
    pub achievements: Vec<String>,
}

/// Localized text of an education entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationText {
    pub title: String,
    pub details: Vec<String>,
}

/// Which nested dictionary of a bundle a lookup goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "educationData")]
    Education,
    #[serde(rename = "workData")]
    Work,
    #[serde(rename = "projects")]
    Projects,
}

impl Section {
    /// Name of the dictionary in a translation document.
    pub fn key(&self) -> &'static str {
        match self {
            Section::Education => "educationData",
            Section::Work => "workData",
            Section::Projects => "projects",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "educationData" | "education" => Some(Section::Education),
            "workData" | "work" => Some(Section::Work),
            "projects" | "project" => Some(Section::Projects),
            _ => None,
        }
    }

    pub fn all() -> &'static [Section] {
        &[Section::Education, Section::Work, Section::Projects]
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One language's strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedBundle {
    #[serde(default)]
    pub education_data: HashMap<String, EducationText>,
    #[serde(default)]
    pub work_data: HashMap<String, WorkText>,
    #[serde(default)]
    pub projects: HashMap<String, ProjectText>,
    /// Flat UI labels (`openToWork`, `projectsTitle`, ...).
    #[serde(flatten)]
    pub labels: HashMap<String, String>,
}

impl LocalizedBundle {
    /// Copy every label and record of `other` over this bundle.
    pub fn merge(&mut self, other: LocalizedBundle) {
        self.labels.extend(other.labels);
        self.education_data.extend(other.education_data);
        self.work_data.extend(other.work_data);
        self.projects.extend(other.projects);
    }

    /// Content keys present in one section.
    pub fn keys(&self, section: Section) -> Vec<&str> {
        let mut keys: Vec<&str> = match section {
            Section::Education => self.education_data.keys().map(String::as_str).collect(),
            Section::Work => self.work_data.keys().map(String::as_str).collect(),
            Section::Projects => self.projects.keys().map(String::as_str).collect(),
        };
        keys.sort_unstable();
        keys
    }
}

/// Result of a successful [`Localization::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocalizedRecord<'a> {
    Education(&'a EducationText),
    Work(&'a WorkText),
    Project(&'a ProjectText),
}

/// All bundles the site is rendered from, keyed by language.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Localization {
    bundles: HashMap<Lang, LocalizedBundle>,
}

impl Localization {
    /// The embedded Spanish and English bundles.
    pub fn builtin() -> Self {
        let bundles = Lang::all()
            .iter()
            .map(|&lang| (lang, texts::bundle(lang)))
            .collect();
        Self { bundles }
    }

    /// A store without any bundle. Every lookup is absent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a translation document of the form `{ "es": {...}, "en": {...} }`.
    ///
    /// JSON, YAML and TOML are accepted, chosen by file extension.
    pub fn from_file(path: &Path) -> Result<Self, SiteError> {
        let raw: HashMap<String, LocalizedBundle> = data::load(path)?;
        let mut bundles = HashMap::new();
        for (code, bundle) in raw {
            let lang = Lang::from_code(&code).ok_or(SiteError::UnsupportedLanguage(code))?;
            bundles.insert(lang, bundle);
        }
        Ok(Self { bundles })
    }

    pub fn insert(&mut self, lang: Lang, bundle: LocalizedBundle) {
        self.bundles.insert(lang, bundle);
    }

    /// Lay `other` over this store. Records and labels present in `other`
    /// replace ours; everything else is kept.
    pub fn overlay(&mut self, other: Localization) {
        for (lang, bundle) in other.bundles {
            self.bundles.entry(lang).or_default().merge(bundle);
        }
    }

    pub fn bundle(&self, lang: Lang) -> Option<&LocalizedBundle> {
        self.bundles.get(&lang)
    }

    /// Languages with a bundle, in display order.
    pub fn languages(&self) -> Vec<Lang> {
        let mut langs: Vec<Lang> = self.bundles.keys().copied().collect();
        langs.sort();
        langs
    }

    /// Find the localized record for `key` in one section of `lang`'s bundle.
    ///
    /// Missing language, section or key, and an empty key, all yield `None`.
    pub fn resolve(&self, lang: Lang, section: Section, key: &str) -> Option<LocalizedRecord<'_>> {
        match section {
            Section::Education => self.education(lang, key).map(LocalizedRecord::Education),
            Section::Work => self.work(lang, key).map(LocalizedRecord::Work),
            Section::Projects => self.project(lang, key).map(LocalizedRecord::Project),
        }
    }

    pub fn project(&self, lang: Lang, key: &str) -> Option<&ProjectText> {
        if key.is_empty() {
            return None;
        }
        self.bundles.get(&lang)?.projects.get(key)
    }

    pub fn work(&self, lang: Lang, key: &str) -> Option<&WorkText> {
        if key.is_empty() {
            return None;
        }
        self.bundles.get(&lang)?.work_data.get(key)
    }

    pub fn education(&self, lang: Lang, key: &str) -> Option<&EducationText> {
        if key.is_empty() {
            return None;
        }
        self.bundles.get(&lang)?.education_data.get(key)
    }

    /// A UI label: the bundle's value, else the built-in catalog, else the key.
    pub fn label<'a>(&'a self, lang: Lang, key: &'a str) -> &'a str {
        self.bundles
            .get(&lang)
            .and_then(|bundle| bundle.labels.get(key))
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| t_or_key(lang, key))
    }
}
