// SPDX-License-Identifier: PMPL-1.0-or-later

//! Card container shared by the list sections.

use super::html::Markup;

const CARD_CLASS: &str = "card rounded-2xl border border-neutral-200 bg-neutral-100 p-4 dark:border-neutral-800 dark:bg-neutral-900 sm:p-8";

/// Wrap pre-rendered children in the card layout. Children pass through unchanged.
pub fn card(children: &Markup) -> Markup {
    Markup::raw(format!(r#"<div class="{CARD_CLASS}">{children}</div>"#))
}
