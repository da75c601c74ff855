//! Persisted session identity and theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser persists to `localStorage`, the CLI to a state file. Both go
//! through [`KeyValueStore`] so load/save/clear semantics are shared, and so
//! is the rule that a corrupt stored user is dropped rather than surfaced.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::types::User;

/// Storage key holding the JSON-encoded logged-in [`User`].
pub const USER_KEY: &str = "radethix_user";
/// Storage key holding the theme preference (`"dark"` / `"light"`).
pub const THEME_KEY: &str = "theme-mode";

/// Minimal string key/value persistence.
///
/// Writes are best-effort; implementations swallow backend errors the same
/// way `localStorage` quota failures are ignored.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process store, used by tests and as a fallback when no persistent
/// backend is available.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Color theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Body class applied for this theme (`"dark-mode"` / `"light-mode"`).
    #[must_use]
    pub fn body_class(self) -> String {
        format!("{}-mode", self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Session persistence over any [`KeyValueStore`].
#[derive(Debug, Default)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the persisted user. A value that fails to decode is removed and
    /// reported as no session.
    pub fn load(&self) -> Option<User> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(_) => {
                self.store.remove(USER_KEY);
                None
            }
        }
    }

    pub fn save(&self, user: &User) {
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        self.store.set(USER_KEY, &raw);
    }

    pub fn clear(&self) {
        self.store.remove(USER_KEY);
    }

    /// Load the theme preference; missing or unrecognized values read as
    /// [`Theme::Dark`].
    pub fn load_theme(&self) -> Theme {
        self.store
            .get(THEME_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn save_theme(&self, theme: Theme) {
        self.store.set(THEME_KEY, theme.as_str());
    }
}
