//! Analysis results: headline, overall confidence, review banner, findings.

use leptos::prelude::*;
use triage::selection::FindingsView;

use crate::components::findings_grid::FindingsGrid;
use crate::state::analysis::AnalysisState;

#[component]
pub fn ResultsSection() -> impl IntoView {
    let analysis = expect_context::<RwSignal<AnalysisState>>();

    let has_result = move || analysis.with(|a| a.workflow.result().is_some());
    let confidence = move || {
        analysis.with(|a| a.workflow.result().map(|r| r.confidence_value.clone()).unwrap_or_default())
    };
    let review_reason = move || {
        analysis.with(|a| {
            a.workflow
                .result()
                .filter(|r| r.needs_doctor_review)
                .map(|r| r.review_reason.clone().unwrap_or_default())
        })
    };
    let diagnosis = move || analysis.with(AnalysisState::diagnosis).unwrap_or_default();
    let findings = Signal::derive(move || analysis.with(AnalysisState::displayed_findings));
    let view_mode = move || analysis.with(|a| a.view);

    let view_button = move |target: FindingsView| {
        view! {
            <button
                class="btn results__view-btn"
                class:results__view-btn--active=move || view_mode() == target
                on:click=move |_| analysis.update(|a| a.view = target)
            >
                {target.label()}
            </button>
        }
    };

    view! {
        <Show when=has_result>
            <section class="results">
                <div class="results__summary">
                    <div class="results__confidence">
                        <span class="results__confidence-label">"Overall confidence"</span>
                        <span class="results__confidence-value">{confidence}</span>
                    </div>
                    <div class="results__diagnosis">
                        <h3>{move || diagnosis().title}</h3>
                        {move || {
                            diagnosis()
                                .description
                                .lines()
                                .map(|line| view! { <p>{line.to_owned()}</p> })
                                .collect_view()
                        }}
                    </div>
                </div>
                <Show when=move || review_reason().is_some()>
                    <div class="results__review-banner" role="alert">
                        <strong>"Doctor review recommended. "</strong>
                        {move || review_reason().unwrap_or_default()}
                    </div>
                </Show>
                <div class="results__views">
                    {view_button(FindingsView::Standard)}
                    {view_button(FindingsView::Legacy)}
                </div>
                <FindingsGrid findings=findings/>
            </section>
        </Show>
    }
}
