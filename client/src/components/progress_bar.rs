//! Analyze progress bar.

#[cfg(test)]
#[path = "progress_bar_test.rs"]
mod progress_bar_test;

use leptos::prelude::*;

use crate::state::analysis::AnalysisState;

fn width_style(progress: u8) -> String {
    format!("width: {}%", progress.min(100))
}

#[component]
pub fn ProgressBar() -> impl IntoView {
    let analysis = expect_context::<RwSignal<AnalysisState>>();
    let visible = move || analysis.with(|a| a.workflow.progress_visible());
    let progress = move || analysis.with(|a| a.workflow.progress());

    view! {
        <Show when=visible>
            <div class="progress">
                <div class="progress__fill" style=move || width_style(progress())></div>
            </div>
            <p class="progress__label">"Analyzing X-ray..."</p>
        </Show>
    }
}
