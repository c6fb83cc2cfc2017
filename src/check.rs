// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation coverage audit.
//!
//! Localization is best effort: a content key without text in some language
//! still renders (its fallback is used), so that is only a warning. A blank
//! fallback would render an empty field, which is an error.

use crate::content::ContentCatalog;
use crate::i18n::{label_keys, Lang, Localization, Section};
use colored::*;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red().bold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub level: Level,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<Lang>,
    pub section: String,
    pub key: String,
    pub detail: String,
}

impl Finding {
    fn print(&self) {
        let lang = self.lang.map(|l| l.code()).unwrap_or("--");
        println!(
            "  [{}] {} {:14} {:20} {}",
            self.level.tag(),
            lang,
            self.section,
            self.key,
            self.detail
        );
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub findings: Vec<Finding>,
}

impl CoverageReport {
    pub fn has_errors(&self) -> bool {
        self.count(Level::Error) > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.count(Level::Warn) > 0
    }

    pub fn count(&self, level: Level) -> usize {
        self.findings.iter().filter(|f| f.level == level).count()
    }

    pub fn print(&self) {
        println!("{}", "folio translation coverage".bold().cyan());
        println!();
        for finding in &self.findings {
            finding.print();
        }
        println!();
        println!(
            "  {} ok, {} warnings, {} errors",
            self.count(Level::Ok),
            self.count(Level::Warn),
            self.count(Level::Error)
        );
    }

    fn push(&mut self, level: Level, lang: Option<Lang>, section: &str, key: &str, detail: String) {
        self.findings.push(Finding {
            level,
            lang,
            section: section.to_string(),
            key: key.to_string(),
            detail,
        });
    }
}

/// Audit every content key and UI label against every published language.
pub fn audit(store: &Localization, catalog: &ContentCatalog) -> CoverageReport {
    let mut report = CoverageReport::default();

    for (section, key) in catalog.keys() {
        if key.is_empty() {
            report.push(
                Level::Error,
                None,
                section.key(),
                "(empty)",
                "record has an empty content key".to_string(),
            );
            continue;
        }
        for &lang in Lang::all() {
            match store.resolve(lang, section, key) {
                Some(_) => report.push(Level::Ok, Some(lang), section.key(), key, "translated".into()),
                None => report.push(
                    Level::Warn,
                    Some(lang),
                    section.key(),
                    key,
                    "no translation, fallback text is shown".into(),
                ),
            }
        }
    }

    check_fallbacks(&mut report, catalog);

    for key in label_keys() {
        for &lang in Lang::all() {
            let in_bundle = store
                .bundle(lang)
                .and_then(|b| b.labels.get(key))
                .is_some_and(|v| !v.trim().is_empty());
            if !in_bundle {
                report.push(
                    Level::Warn,
                    Some(lang),
                    "labels",
                    key,
                    format!("not in bundle, using \"{}\"", store.label(lang, key)),
                );
            }
        }
    }

    report
}

fn check_fallbacks(report: &mut CoverageReport, catalog: &ContentCatalog) {
    let mut blank = |section: Section, key: &str, field: &str| {
        report.push(
            Level::Error,
            None,
            section.key(),
            key,
            format!("fallback {} is blank", field),
        );
    };

    for tab in crate::types::ProjectTab::all() {
        for p in catalog.projects(*tab) {
            if p.title.trim().is_empty() {
                blank(Section::Projects, &p.key, "title");
            }
            if p.description.trim().is_empty() {
                blank(Section::Projects, &p.key, "description");
            }
        }
    }
    for w in &catalog.work {
        for (field, value) in [
            ("title", &w.title),
            ("companyName", &w.company_name),
            ("location", &w.location),
            ("description", &w.description),
        ] {
            if value.trim().is_empty() {
                blank(Section::Work, &w.key, field);
            }
        }
        if all_blank(&w.achievements) {
            blank(Section::Work, &w.key, "achievements");
        }
    }
    for e in &catalog.education {
        if e.title.trim().is_empty() {
            blank(Section::Education, &e.key, "title");
        }
        if all_blank(&e.details) {
            blank(Section::Education, &e.key, "details");
        }
    }
}

fn all_blank(items: &[String]) -> bool {
    items.iter().all(|item| item.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_fully_covered() {
        let report = audit(&Localization::builtin(), &ContentCatalog::builtin());
        assert!(!report.has_errors(), "{:?}", report.findings);
        assert!(!report.has_warnings(), "{:?}", report.findings);
        // 7 content keys in 2 languages
        assert_eq!(report.count(Level::Ok), 14);
    }

    #[test]
    fn missing_translations_are_warnings_not_errors() {
        let report = audit(&Localization::empty(), &ContentCatalog::builtin());
        assert!(!report.has_errors());
        assert!(report.has_warnings());
        assert!(report
            .findings
            .iter()
            .any(|f| f.key == "dawflix" && f.lang == Some(Lang::En) && f.level == Level::Warn));
    }

    #[test]
    fn blank_fallback_is_an_error() {
        let mut catalog = ContentCatalog::builtin();
        catalog.web_projects[0].title = "  ".into();
        let report = audit(&Localization::builtin(), &catalog);
        assert!(report.has_errors());
        assert!(report
            .findings
            .iter()
            .any(|f| f.level == Level::Error && f.key == "dawflix" && f.detail.contains("title")));
    }

    #[test]
    fn empty_education_details_are_an_error() {
        let mut catalog = ContentCatalog::builtin();
        catalog.education[1].details.clear();
        let report = audit(&Localization::builtin(), &catalog);
        assert!(report.has_errors());
        assert!(report.findings.iter().any(|f| f.level == Level::Error
            && f.section == "educationData"
            && f.key == "daw"
            && f.detail.contains("details")));
    }

    #[test]
    fn blank_achievements_are_an_error() {
        let mut catalog = ContentCatalog::builtin();
        catalog.work[0].achievements = vec!["".into(), " ".into()];
        let report = audit(&Localization::builtin(), &catalog);
        assert!(report
            .findings
            .iter()
            .any(|f| f.level == Level::Error && f.detail.contains("achievements")));
    }
}
