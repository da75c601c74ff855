//! Auth gate: landing, patient-ID login, and signup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route reachable without a session. A successful login or signup
//! persists the returned patient and the redirect effect moves to `/`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use triage::auth::{AuthMode, DEMO_PATIENT_ID, DEMO_PROFILE, GENDER_OPTIONS, validate_login, validate_signup};
#[cfg(feature = "hydrate")]
use triage::{ApiConfig, Operation};

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::install_auth_redirect;

fn mode_heading(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Landing => "AI-Powered Chest X-Ray Analysis",
        AuthMode::Login => "Patient Login",
        AuthMode::Signup => "Create Patient Account",
    }
}

fn mode_subtitle(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Landing => "Upload an X-ray, review AI findings, and generate a report.",
        AuthMode::Login => "Enter your patient ID to continue.",
        AuthMode::Signup => "We will generate a patient ID for you.",
    }
}

/// Mark a submit as in flight. Returns `false` if one already is.
fn claim(busy: RwSignal<bool>) -> bool {
    if busy.get_untracked() {
        return false;
    }
    busy.set(true);
    true
}

/// Auth gate page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_auth_redirect(auth, use_navigate());
    #[cfg(feature = "hydrate")]
    let config = StoredValue::new(expect_context::<ApiConfig>());

    let patient_id = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let mode = move || ui.get().auth_mode;
    let set_mode = move |next: AuthMode| {
        error.set(String::new());
        ui.update(|u| u.auth_mode = next);
    };

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !claim(busy) {
            return;
        }
        let request = match validate_login(&patient_id.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&config, &request).await {
                    Ok(user) => finish_sign_in(auth, user),
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        error.set(e.user_message(Operation::Login).to_owned());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    let on_signup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !claim(busy) {
            return;
        }
        let request = match validate_signup(&name.get(), &age.get(), &gender.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::signup(&config, &request).await {
                    Ok(user) => finish_sign_in(auth, user),
                    Err(e) => {
                        log::warn!("signup failed: {e}");
                        error.set(e.user_message(Operation::Signup).to_owned());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <Show
            when=move || !auth.get().loading
            fallback=|| view! { <div class="loading-screen"><p>"Loading RAD-ETHIX..."</p></div> }
        >
            <div class="auth-page">
                <div class="auth-card">
                    <h1 class="auth-card__brand">"RAD-ETHIX"</h1>
                    <h2>{move || mode_heading(mode())}</h2>
                    <p class="auth-card__subtitle">{move || mode_subtitle(mode())}</p>

                    <Show when=move || mode() == AuthMode::Landing>
                        <div class="auth-card__actions">
                            <button class="btn btn--primary" on:click=move |_| set_mode(AuthMode::Login)>
                                "Login"
                            </button>
                            <button class="btn" on:click=move |_| set_mode(AuthMode::Signup)>
                                "Sign Up"
                            </button>
                        </div>
                        <div class="auth-card__demo">
                            <p>"Demo credentials"</p>
                            <code>{DEMO_PATIENT_ID}</code>
                            <span>" "{DEMO_PROFILE}</span>
                        </div>
                    </Show>

                    <Show when=move || mode() == AuthMode::Login>
                        <form class="auth-form" on:submit=on_login>
                            <input
                                class="auth-input"
                                type="text"
                                placeholder="Patient ID"
                                prop:value=move || patient_id.get()
                                on:input=move |ev| patient_id.set(event_target_value(&ev))
                            />
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                {move || AuthMode::Login.submit_label(busy.get())}
                            </button>
                        </form>
                    </Show>

                    <Show when=move || mode() == AuthMode::Signup>
                        <form class="auth-form" on:submit=on_signup>
                            <input
                                class="auth-input"
                                type="text"
                                placeholder="Full name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                            <input
                                class="auth-input"
                                type="number"
                                min="1"
                                max="120"
                                placeholder="Age"
                                prop:value=move || age.get()
                                on:input=move |ev| age.set(event_target_value(&ev))
                            />
                            <select
                                class="auth-input"
                                prop:value=move || gender.get()
                                on:change=move |ev| gender.set(event_target_value(&ev))
                            >
                                <option value="">"Select gender"</option>
                                {GENDER_OPTIONS
                                    .iter()
                                    .map(|g| view! { <option value=*g>{*g}</option> })
                                    .collect_view()}
                            </select>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                {move || AuthMode::Signup.submit_label(busy.get())}
                            </button>
                        </form>
                    </Show>

                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-card__error">{move || error.get()}</p>
                    </Show>

                    <Show when=move || mode() != AuthMode::Landing>
                        <button class="btn btn--link" on:click=move |_| set_mode(AuthMode::Landing)>
                            "Back"
                        </button>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

#[cfg(feature = "hydrate")]
fn finish_sign_in(auth: RwSignal<AuthState>, user: triage::User) {
    crate::util::storage::session().save(&user);
    log::info!("signed in patient {}", user.patient_id);
    auth.update(|a| a.sign_in(user));
}
