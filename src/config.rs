// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site configuration (`folio.toml`).

use crate::error::SiteError;
use crate::i18n::Lang;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Where `folio build` writes the site.
    pub output_dir: PathBuf,
    /// Language the root `index.html` redirects to.
    pub default_language: Lang,
    /// Static files (images) copied verbatim into the output.
    pub assets_dir: Option<PathBuf>,
    /// Translation document laid over the built-in bundles.
    pub translations: Option<PathBuf>,
    /// Content catalog replacing the built-in one.
    pub content: Option<PathBuf>,
    /// Document `<title>` for every page, instead of `title | subtitle`.
    pub base_title: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            default_language: Lang::default(),
            assets_dir: None,
            translations: None,
            content: None,
            base_title: None,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a TOML file.
    ///
    /// Falls back to defaults if the file does not exist. Relative paths in
    /// the file are taken relative to the file's directory.
    pub fn load(path: &Path) -> Result<SiteConfig, SiteError> {
        if !path.exists() {
            tracing::info!("config file not found at {}, using defaults", path.display());
            return Ok(SiteConfig::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| SiteError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let mut config: SiteConfig = toml::from_str(&content)
            .map_err(|e| SiteError::Config(format!("failed to parse {}: {}", path.display(), e)))?;

        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.rebase(base);
        }
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    fn rebase(&mut self, base: &Path) {
        let join = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        join(&mut self.output_dir);
        for p in [&mut self.assets_dir, &mut self.translations, &mut self.content]
            .into_iter()
            .flatten()
        {
            join(p);
        }
    }
}
