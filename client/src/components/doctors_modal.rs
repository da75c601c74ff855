//! Modal listing consultation doctors.

use leptos::prelude::*;
use triage::doctors::{DOCTORS, format_fee};

use crate::state::ui::UiState;

/// Doctors directory overlay. Closes on the close button, a backdrop click,
/// or Escape.
#[component]
pub fn DoctorsModal(on_close: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--doctors"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="dialog__header">
                    <h2>"Consult a Doctor"</h2>
                    <button class="dialog__close" on:click=on_close_click title="Close">
                        "✕"
                    </button>
                </div>
                <p class="dialog__featured">
                    "Consultations from "
                    <strong>{move || format_fee(ui.get().featured_fee)}</strong>
                </p>
                <ul class="doctor-list">
                    {DOCTORS
                        .iter()
                        .map(|doctor| {
                            view! {
                                <li class="doctor-card">
                                    <div class="doctor-card__head">
                                        <span class="doctor-card__name">{doctor.name}</span>
                                        <span class="doctor-card__specialty">{doctor.specialty}</span>
                                    </div>
                                    <p class="doctor-card__description">{doctor.description}</p>
                                    <div class="doctor-card__foot">
                                        <a class="doctor-card__phone" href=doctor.tel_href()>{doctor.phone}</a>
                                        <span class="doctor-card__fee">{format_fee(doctor.fee_inr)}</span>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
