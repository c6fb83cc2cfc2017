// SPDX-License-Identifier: PMPL-1.0-or-later

//! Static site build: every language and tab to its own HTML file.

use crate::config::SiteConfig;
use crate::content::ContentCatalog;
use crate::i18n::{Lang, Localization};
use crate::render::{render_page, PageContext};
use crate::types::ProjectTab;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const MANIFEST_FILE: &str = "build.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    pub lang: Lang,
    pub tab: ProjectTab,
    /// Path relative to the output directory, `/`-separated.
    pub path: String,
    pub sha256: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildManifest {
    pub generated_at: String,
    pub default_language: Lang,
    pub pages: Vec<PageEntry>,
    pub assets: Vec<String>,
}

pub struct SiteBuilder {
    config: SiteConfig,
    store: Localization,
    catalog: ContentCatalog,
}

impl SiteBuilder {
    pub fn new(config: SiteConfig, store: Localization, catalog: ContentCatalog) -> Self {
        Self {
            config,
            store,
            catalog,
        }
    }

    /// Assemble the store and catalog a config points at.
    ///
    /// The built-in bundles are always loaded first; a translation document
    /// only overrides what it names.
    pub fn from_config(config: SiteConfig) -> Result<Self> {
        let mut store = Localization::builtin();
        if let Some(path) = &config.translations {
            let overlay = Localization::from_file(path)
                .with_context(|| format!("loading translations from {}", path.display()))?;
            store.overlay(overlay);
        }
        let catalog = match &config.content {
            Some(path) => ContentCatalog::from_file(path)
                .with_context(|| format!("loading content from {}", path.display()))?,
            None => ContentCatalog::builtin(),
        };
        Ok(Self::new(config, store, catalog))
    }

    pub fn store(&self) -> &Localization {
        &self.store
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Render one page without touching the filesystem.
    pub fn render(&self, lang: Lang, tab: ProjectTab) -> String {
        let ctx = PageContext::new(lang, &self.store, &self.catalog)
            .with_base_title(self.config.base_title.as_deref());
        render_page(&ctx, tab)
    }

    pub fn build(&self) -> Result<BuildManifest> {
        let out = &self.config.output_dir;
        fs::create_dir_all(out)
            .with_context(|| format!("creating output directory {}", out.display()))?;

        // Assets go first so a generated file can never be replaced by one.
        let assets = match &self.config.assets_dir {
            Some(dir) => copy_assets(dir, out, &generated_paths())?,
            None => Vec::new(),
        };

        let mut pages = Vec::new();
        for &lang in Lang::all() {
            let lang_dir = out.join(lang.code());
            fs::create_dir_all(&lang_dir)?;
            for &tab in ProjectTab::all() {
                let html = self.render(lang, tab);
                let path = lang_dir.join(tab.page_file());
                fs::write(&path, &html).with_context(|| format!("writing {}", path.display()))?;
                tracing::info!("wrote {}", path.display());
                pages.push(PageEntry {
                    lang,
                    tab,
                    path: page_path(lang, tab),
                    sha256: digest(html.as_bytes()),
                });
            }
        }

        let redirect = redirect_page(self.config.default_language);
        fs::write(out.join("index.html"), redirect)?;

        let manifest = BuildManifest {
            generated_at: Utc::now().to_rfc3339(),
            default_language: self.config.default_language,
            pages,
            assets,
        };
        let json = serde_json::to_string_pretty(&manifest)?;
        fs::write(out.join(MANIFEST_FILE), json)?;
        Ok(manifest)
    }
}

fn digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

fn redirect_page(lang: Lang) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n<meta http-equiv=\"refresh\" content=\"0; url={lang}/index.html\">\n<title>{lang}</title>\n</head>\n<body><a href=\"{lang}/index.html\">{name}</a></body>\n</html>\n",
        lang = lang.code(),
        name = lang.native_name(),
    )
}

fn page_path(lang: Lang, tab: ProjectTab) -> String {
    format!("{}/{}", lang.code(), tab.page_file())
}

/// Output paths the builder writes itself, `/`-separated.
fn generated_paths() -> Vec<String> {
    let mut paths = vec!["index.html".to_string(), MANIFEST_FILE.to_string()];
    for &lang in Lang::all() {
        for &tab in ProjectTab::all() {
            paths.push(page_path(lang, tab));
        }
    }
    paths
}

/// Copy every file under `src` into `out`, keeping relative paths.
///
/// Files whose relative path is in `reserved` are skipped, as is the output
/// directory itself when it lies inside `src`.
fn copy_assets(src: &Path, out: &Path, reserved: &[String]) -> Result<Vec<String>> {
    if !src.is_dir() {
        tracing::warn!("assets directory {} not found, skipping", src.display());
        return Ok(Vec::new());
    }
    let src = src
        .canonicalize()
        .with_context(|| format!("resolving {}", src.display()))?;
    let out_canonical = out
        .canonicalize()
        .with_context(|| format!("resolving {}", out.display()))?;

    let mut copied = Vec::new();
    let walker = WalkDir::new(&src)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !entry.path().starts_with(&out_canonical));
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative: PathBuf = entry.path().strip_prefix(&src)?.to_path_buf();
        let name = relative.to_string_lossy().replace('\\', "/");
        if reserved.iter().any(|r| *r == name) {
            tracing::warn!("asset {} collides with a generated file, skipping", name);
            continue;
        }
        let target = out.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &target)
            .with_context(|| format!("copying {}", entry.path().display()))?;
        tracing::debug!("copied asset {}", name);
        copied.push(name);
    }
    copied.sort();
    Ok(copied)
}
