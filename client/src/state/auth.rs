//! Auth-session state for the current patient.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and patient-aware components to coordinate login
//! redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use triage::User;

/// Authentication state tracking the current patient and loading status.
///
/// `loading` stays `true` until the persisted session has been read, so the
/// server render and the first hydrate pass show the loading view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Record the outcome of the initial session load.
    pub fn restored(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        !self.loading && self.user.is_some()
    }
}
