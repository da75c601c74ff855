//! Floating toast notification.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn Toast() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast" class:toast--visible=move || ui.get().toast.is_visible() role="status">
            {move || ui.get().toast.message().to_owned()}
        </div>
    }
}
