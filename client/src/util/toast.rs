//! Toast display with timed auto-dismiss.

use leptos::prelude::*;
use triage::toast::TOAST_DURATION_MS;

use crate::state::ui::UiState;

/// Show `message` and schedule its dismissal. A newer toast shown before the
/// timer fires is left alone.
pub fn show_toast(ui: RwSignal<UiState>, message: impl Into<String>) {
    let message = message.into();
    let mut generation = 0;
    ui.update(|u| generation = u.toast.show(message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(TOAST_DURATION_MS))).await;
        ui.update(|u| {
            u.toast.expire(generation);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (generation, TOAST_DURATION_MS);
    }
}
