// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading of user-supplied data files (translations, content catalogs).

use crate::error::SiteError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
    Toml,
}

impl DataFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(DataFormat::Json),
            "yaml" | "yml" => Some(DataFormat::Yaml),
            "toml" => Some(DataFormat::Toml),
            _ => None,
        }
    }

    pub fn parse<T: DeserializeOwned>(&self, text: &str) -> Result<T, SiteError> {
        match self {
            DataFormat::Json => Ok(serde_json::from_str(text)?),
            DataFormat::Yaml => Ok(serde_yaml::from_str(text)?),
            DataFormat::Toml => Ok(toml::from_str(text)?),
        }
    }
}

/// Read and deserialize a data file, choosing the parser by extension.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, SiteError> {
    let format =
        DataFormat::from_path(path).ok_or_else(|| SiteError::UnsupportedFormat(path.to_path_buf()))?;
    let text = fs::read_to_string(path)?;
    tracing::debug!("parsing {} as {:?}", path.display(), format);
    format.parse(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(DataFormat::from_path(Path::new("a.json")), Some(DataFormat::Json));
        assert_eq!(DataFormat::from_path(Path::new("a.YML")), Some(DataFormat::Yaml));
        assert_eq!(DataFormat::from_path(Path::new("a.toml")), Some(DataFormat::Toml));
        assert_eq!(DataFormat::from_path(Path::new("a.txt")), None);
        assert_eq!(DataFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let err = load::<serde_json::Value>(Path::new("content.ini")).unwrap_err();
        assert!(matches!(err, SiteError::UnsupportedFormat(_)));
    }
}
