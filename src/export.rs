// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization of resolved page data for other consumers

use crate::i18n::Lang;
use crate::resolve::ResolvedPage;
use crate::types::ProjectTab;
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }

    /// Default file name for one exported page, e.g. `en-design.json`.
    pub fn file_name(&self, lang: Lang, tab: ProjectTab) -> String {
        format!("{}-{}.{}", lang.code(), tab.as_str(), self.extension())
    }

    pub fn serialize(&self, page: &ResolvedPage) -> Result<String> {
        match self {
            ExportFormat::Json => Ok(serde_json::to_string_pretty(page)?),
            ExportFormat::Yaml => Ok(serde_yaml::to_string(page)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentCatalog;
    use crate::i18n::Localization;

    fn page() -> ResolvedPage {
        ResolvedPage::new(
            &ContentCatalog::builtin(),
            &Localization::builtin(),
            Lang::En,
            ProjectTab::Design,
        )
    }

    #[test]
    fn file_name_carries_page_and_extension() {
        assert_eq!(ExportFormat::Json.file_name(Lang::En, ProjectTab::Design), "en-design.json");
        assert_eq!(ExportFormat::Yaml.file_name(Lang::Es, ProjectTab::Web), "es-web.yaml");
    }

    #[test]
    fn json_export_uses_document_field_names() {
        let json = ExportFormat::Json.serialize(&page()).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["lang"], "en");
        assert_eq!(value["tab"], "design");
        assert_eq!(value["work"][0]["companyName"], "Peereira7 Channel");
        assert_eq!(value["projects"][0]["key"], "thebliss");
        // Absent links are omitted rather than null.
        assert!(value["projects"][0].get("githubLink").is_none());
    }

    #[test]
    fn yaml_export_contains_resolved_titles() {
        let yaml = ExportFormat::Yaml.serialize(&page()).expect("yaml");
        assert!(yaml.contains("title: The Bliss"));
        assert!(yaml.contains("moreProjectsUrl:"));
        assert!(yaml.contains("behance.net/ivanmayoralvfx"));
    }
}
