//! Patient identity card shown at the top of the dashboard.

#[cfg(test)]
#[path = "patient_card_test.rs"]
mod patient_card_test;

use leptos::prelude::*;
use triage::User;

use crate::state::auth::AuthState;

fn age_label(age: u32) -> String {
    format!("{age} years")
}

fn user_field(user: Option<&User>, pick: impl Fn(&User) -> String) -> String {
    user.map_or_else(|| "—".to_owned(), pick)
}

#[component]
pub fn PatientCard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let field = move |pick: fn(&User) -> String| auth.with(|a| user_field(a.user.as_ref(), pick));

    view! {
        <section class="patient-card">
            <h3>"Patient Information"</h3>
            <dl class="patient-card__grid">
                <dt>"Name"</dt>
                <dd>{move || field(|u| u.name.clone())}</dd>
                <dt>"Age"</dt>
                <dd>{move || field(|u| age_label(u.age))}</dd>
                <dt>"Gender"</dt>
                <dd>{move || field(|u| u.gender.clone())}</dd>
                <dt>"Patient ID"</dt>
                <dd class="patient-card__mono">{move || field(|u| u.patient_id.clone())}</dd>
            </dl>
        </section>
    }
}
