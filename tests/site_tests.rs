// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end site builds into a temporary directory.

use folio::config::SiteConfig;
use folio::i18n::Lang;
use folio::site::{BuildManifest, SiteBuilder, MANIFEST_FILE};
use std::fs;

fn config_in(dir: &std::path::Path) -> SiteConfig {
    SiteConfig {
        output_dir: dir.join("dist"),
        ..SiteConfig::default()
    }
}

#[test]
fn test_build_writes_every_language_and_tab() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = config_in(tmp.path());
    let out = config.output_dir.clone();

    let manifest = SiteBuilder::from_config(config)
        .expect("builder")
        .build()
        .expect("build succeeds");

    assert_eq!(manifest.pages.len(), 4);
    for rel in ["es/index.html", "es/design.html", "en/index.html", "en/design.html"] {
        let path = out.join(rel);
        assert!(path.is_file(), "{} should exist", rel);
    }

    let es = fs::read_to_string(out.join("es/index.html")).expect("read es page");
    assert!(es.contains("<html lang=\"es\">"));
    assert!(es.contains("Proyectos Web"));
    assert!(es.contains("data-key=\"dawflix\""));

    let en_design = fs::read_to_string(out.join("en/design.html")).expect("read en design");
    assert!(en_design.contains("data-key=\"thebliss\""));
    assert!(!en_design.contains("data-key=\"dawflix\""));

    let root = fs::read_to_string(out.join("index.html")).expect("read root");
    assert!(root.contains("url=es/index.html"));
}

#[test]
fn test_manifest_round_trips_and_hashes_pages() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = config_in(tmp.path());
    let out = config.output_dir.clone();
    let manifest = SiteBuilder::from_config(config)
        .expect("builder")
        .build()
        .expect("build");

    let stored: BuildManifest = serde_json::from_str(
        &fs::read_to_string(out.join(MANIFEST_FILE)).expect("manifest written"),
    )
    .expect("manifest parses");
    assert_eq!(stored, manifest);
    assert_eq!(stored.default_language, Lang::Es);
    for page in &stored.pages {
        assert_eq!(page.sha256.len(), 64);
    }
    // The two tabs of a language are different pages.
    let en_pages: Vec<_> = stored.pages.iter().filter(|p| p.lang == Lang::En).collect();
    assert_ne!(en_pages[0].sha256, en_pages[1].sha256);
}

#[test]
fn test_build_copies_assets() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let assets = tmp.path().join("public");
    fs::create_dir_all(assets.join("img")).expect("mkdir");
    fs::write(assets.join("DawFlix.png"), b"png").expect("write asset");
    fs::write(assets.join("img/ArtUs.png"), b"png").expect("write nested asset");

    let config = SiteConfig {
        assets_dir: Some(assets),
        ..config_in(tmp.path())
    };
    let out = config.output_dir.clone();
    let manifest = SiteBuilder::from_config(config)
        .expect("builder")
        .build()
        .expect("build");

    assert_eq!(manifest.assets, vec!["DawFlix.png".to_string(), "img/ArtUs.png".to_string()]);
    assert!(out.join("img/ArtUs.png").is_file());
}

#[test]
fn test_bad_translation_file_fails_builder() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("translations.yaml");
    fs::write(&path, "de:\n  title: Hallo\n").expect("write");

    let config = SiteConfig {
        translations: Some(path),
        ..config_in(tmp.path())
    };
    let err = SiteBuilder::from_config(config).err().expect("unsupported language");
    assert!(format!("{:#}", err).contains("unsupported language tag 'de'"));
}

#[test]
fn test_assets_never_replace_generated_files() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let assets = tmp.path().join("public");
    fs::create_dir_all(assets.join("es")).expect("mkdir");
    fs::write(assets.join("index.html"), "asset root").expect("write");
    fs::write(assets.join("es/index.html"), "asset es").expect("write");
    fs::write(assets.join(MANIFEST_FILE), "{}").expect("write");
    fs::write(assets.join("es/logo.png"), b"png").expect("write");

    let config = SiteConfig {
        assets_dir: Some(assets),
        ..config_in(tmp.path())
    };
    let out = config.output_dir.clone();
    let manifest = SiteBuilder::from_config(config)
        .expect("builder")
        .build()
        .expect("build");

    assert_eq!(manifest.assets, vec!["es/logo.png".to_string()]);
    let es = fs::read_to_string(out.join("es/index.html")).expect("read es page");
    assert_ne!(es, "asset es");
    let root = fs::read_to_string(out.join("index.html")).expect("read root");
    assert!(root.contains("url=es/index.html"));

    use sha2::{Digest, Sha256};
    for page in &manifest.pages {
        let bytes = fs::read(out.join(&page.path)).expect("page on disk");
        assert_eq!(hex::encode(Sha256::digest(&bytes)), page.sha256, "{}", page.path);
    }
}

#[test]
fn test_output_inside_assets_dir_is_not_copied_into_itself() {
    let tmp = tempfile::tempdir().expect("tempdir");
    fs::write(tmp.path().join("a.png"), b"png").expect("write");

    let config = SiteConfig {
        assets_dir: Some(tmp.path().to_path_buf()),
        ..config_in(tmp.path())
    };
    let first = SiteBuilder::from_config(config.clone())
        .expect("builder")
        .build()
        .expect("first build");
    assert_eq!(first.assets, vec!["a.png".to_string()]);

    // A second build sees the previous output under the assets dir.
    let second = SiteBuilder::from_config(config)
        .expect("builder")
        .build()
        .expect("second build");
    assert_eq!(second.assets, vec!["a.png".to_string()]);
}

#[test]
fn test_base_title_applies_to_every_page() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = SiteConfig {
        base_title: Some("Iván Mayoral".into()),
        ..config_in(tmp.path())
    };
    let out = config.output_dir.clone();
    let manifest = SiteBuilder::from_config(config)
        .expect("builder")
        .build()
        .expect("build");
    for page in &manifest.pages {
        let html = fs::read_to_string(out.join(&page.path)).expect("page on disk");
        assert!(html.contains("<title>Iván Mayoral</title>"), "{}", page.path);
    }
}
