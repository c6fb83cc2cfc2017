// SPDX-License-Identifier: PMPL-1.0-or-later

//! folio: build the bilingual portfolio site and inspect its translations.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::*;
use folio::check;
use folio::config::{SiteConfig, DEFAULT_CONFIG_FILE};
use folio::export::ExportFormat;
use folio::i18n::{Lang, Section};
use folio::resolve::ResolvedPage;
use folio::site::SiteBuilder;
use folio::types::ProjectTab;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Static renderer for a bilingual (Spanish/English) portfolio site")]
#[command(long_about = None)]
struct Cli {
    /// Site configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Translation document laid over the built-in bundles
    #[arg(short, long, global = true)]
    translations: Option<PathBuf>,

    /// Content catalog replacing the built-in one
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Verbose logging (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write every language and tab page into the output directory
    Build {
        /// Output directory (overrides the config file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Static assets directory copied into the output
        #[arg(short, long)]
        assets: Option<PathBuf>,
    },

    /// Render a single page
    Render {
        #[arg(short, long, value_enum, default_value = "es")]
        lang: LangArg,

        #[arg(long, value_enum, default_value = "web")]
        tab: TabArg,

        /// Write to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Look up the localized record for a content key
    Resolve {
        #[arg(short, long, value_enum)]
        lang: LangArg,

        /// educationData, workData or projects
        #[arg(short, long)]
        section: String,

        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Dump the resolved data of one page
    Export {
        #[arg(short, long, value_enum, default_value = "es")]
        lang: LangArg,

        #[arg(long, value_enum, default_value = "web")]
        tab: TabArg,

        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Write to file (or into a directory) instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Audit translation coverage of every content key and label
    Check {
        /// Treat missing translations as failures
        #[arg(long)]
        strict: bool,
    },

    /// List published languages
    Languages,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    Es,
    En,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::Es => Lang::Es,
            LangArg::En => Lang::En,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum TabArg {
    Web,
    Design,
}

impl From<TabArg> for ProjectTab {
    fn from(arg: TabArg) -> Self {
        match arg {
            TabArg::Web => ProjectTab::Web,
            TabArg::Design => ProjectTab::Design,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = SiteConfig::load(&cli.config)?;
    if cli.translations.is_some() {
        config.translations = cli.translations.clone();
    }
    if cli.content.is_some() {
        config.content = cli.content.clone();
    }

    match cli.command {
        Commands::Build { output, assets } => {
            if let Some(output) = output {
                config.output_dir = output;
            }
            if assets.is_some() {
                config.assets_dir = assets;
            }
            let builder = SiteBuilder::from_config(config)?;
            let manifest = builder.build()?;

            println!(
                "Built {} pages into {}",
                manifest.pages.len(),
                builder.config().output_dir.display()
            );
            for page in &manifest.pages {
                println!("  {} {:6} {}", page.lang, page.tab, page.path);
            }
            if !manifest.assets.is_empty() {
                println!("  {} assets copied", manifest.assets.len());
            }
        }

        Commands::Render { lang, tab, output } => {
            let builder = SiteBuilder::from_config(config)?;
            let html = builder.render(lang.into(), tab.into());
            write_or_print(output, &html)?;
        }

        Commands::Resolve { lang, section, key } => {
            let section = Section::parse(&section).ok_or_else(|| {
                anyhow!("unknown section '{section}' (expected educationData, workData or projects)")
            })?;
            let builder = SiteBuilder::from_config(config)?;
            match builder.store().resolve(lang.into(), section, &key) {
                Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                None => println!("{}", "absent".yellow()),
            }
        }

        Commands::Export {
            lang,
            tab,
            format,
            output,
        } => {
            let (lang, tab): (Lang, ProjectTab) = (lang.into(), tab.into());
            let builder = SiteBuilder::from_config(config)?;
            let page = ResolvedPage::new(builder.catalog(), builder.store(), lang, tab);
            let text = format.serialize(&page)?;
            // A directory target gets the default file name for this page.
            let output = output.map(|path| {
                if path.is_dir() {
                    path.join(format.file_name(lang, tab))
                } else {
                    path
                }
            });
            write_or_print(output, &text)?;
        }

        Commands::Check { strict } => {
            let builder = SiteBuilder::from_config(config)?;
            let report = check::audit(builder.store(), builder.catalog());
            report.print();
            if report.has_errors() {
                return Err(anyhow!("translation audit found blank fallback text"));
            }
            if strict && report.has_warnings() {
                return Err(anyhow!("translation audit found missing translations"));
            }
        }

        Commands::Languages => {
            for lang in Lang::all() {
                let marker = if *lang == config.default_language {
                    " (default)"
                } else {
                    ""
                };
                println!("{}  {:8} {}{}", lang.code().bold(), lang.name(), lang.native_name(), marker);
            }
        }
    }

    Ok(())
}

fn write_or_print(output: Option<PathBuf>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(&path, text)?;
            println!("Saved to: {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}
