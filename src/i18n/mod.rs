// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for folio.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | es   | Spanish  | Español     |
//! | en   | English  | English     |
//!
//! ## Design
//!
//! Two layers:
//!
//! - the label catalog (`catalog`): flat page strings such as `"projectsTitle"`,
//!   embedded as static tables and looked up with [`t`];
//! - the localization store ([`Localization`]): per-language bundles holding
//!   those labels plus the nested `educationData`, `workData` and `projects`
//!   dictionaries keyed by content key.
//!
//! A content key absent from a bundle is a normal outcome. The lookup reports
//! it as `None` and the caller renders the fallback text of its content record.

mod bundle;
mod catalog;
mod texts;

pub use bundle::{
    EducationText, Localization, LocalizedBundle, LocalizedRecord, ProjectText, Section, WorkText,
};
pub use catalog::{label_keys, labels, t, t_or_key, Lang};
