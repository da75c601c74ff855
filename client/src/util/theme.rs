//! Theme initialization and toggle.
//!
//! Reads the persisted `theme-mode` preference and applies it as a
//! `dark-mode` / `light-mode` class on `<body>` plus a `data-theme`
//! attribute on `<html>`. Toggle writes the new value back.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use triage::session::Theme;

use crate::util::storage;

/// Read the theme preference; anything unrecognized reads as dark.
pub fn read_preference() -> Theme {
    storage::session().load_theme()
}

/// Apply `theme` to the document.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
            if let Some(body) = doc.body() {
                body.set_class_name(&theme.body_class());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    storage::session().save_theme(next);
    next
}
