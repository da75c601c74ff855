//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: the dashboard
//! bounces signed-out visitors to `/login`, and the auth gate bounces
//! signed-in patients back to `/`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

fn should_redirect_auth(state: &AuthState) -> bool {
    state.is_signed_in()
}

/// Redirect to `/login` whenever the session has loaded and no patient is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/` once a patient is signed in.
pub fn install_auth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_auth(&auth.get()) {
            navigate("/", NavigateOptions::default());
        }
    });
}
