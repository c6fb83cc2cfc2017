// SPDX-License-Identifier: PMPL-1.0-or-later

//! Library error type.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or data files.
///
/// Missing translations are not errors; they resolve to the fallback text of
/// the content record.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// A data file named a language tag folio does not publish.
    #[error("unsupported language tag '{0}'")]
    UnsupportedLanguage(String),

    /// A data file extension folio cannot parse.
    #[error("unsupported data format for {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML (de)serialization error.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parse error.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}
