// SPDX-License-Identifier: PMPL-1.0-or-later

//! folio: static renderer for a bilingual personal portfolio.
//!
//! The site is built from two immutable inputs:
//! 1. **Content catalog** ([`content`]): projects, work history and education
//!    entries with their untranslated attributes and fallback text.
//! 2. **Localization store** ([`i18n`]): Spanish and English bundles keyed by
//!    content key.
//!
//! [`resolve`] merges the two field by field, [`render`] turns the result
//! into HTML and [`site`] writes one page per language and projects tab.

pub mod check;
pub mod config;
pub mod content;
pub mod data;
pub mod error;
pub mod export;
pub mod i18n;
pub mod render;
pub mod resolve;
pub mod site;
pub mod types;

pub use error::SiteError;
