//! Dashboard header: brand, patient identity, doctors, theme toggle, logout.

use leptos::prelude::*;
use triage::session::Theme;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::{browser, theme};

fn theme_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    }
}

#[component]
pub fn Header(on_logout: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let identity = move || {
        auth.with(|a| {
            a.user
                .as_ref()
                .map(|u| format!("{} ({})", u.name, u.patient_id))
                .unwrap_or_default()
        })
    };

    view! {
        <header class="dashboard-header toolbar">
            <span class="dashboard-header__brand">"RAD-ETHIX"</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <span class="dashboard-header__patient">{identity}</span>

            <span class="toolbar__spacer"></span>

            <button
                class="btn dashboard-header__doctors"
                on:click=move |_| ui.update(|u| u.open_doctors(browser::random_roll()))
            >
                "Consult a Doctor"
            </button>
            <button
                class="btn toolbar__dark-toggle"
                on:click=move |_| {
                    let next = theme::toggle(ui.get().theme);
                    ui.update(|u| u.theme = next);
                }
                title="Toggle theme"
            >
                {move || theme_icon(ui.get().theme)}
            </button>
            <button class="btn toolbar__logout" on:click=move |_| on_logout.run(()) title="Logout">
                "Logout"
            </button>
        </header>
    }
}
