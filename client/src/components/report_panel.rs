//! AI medical report panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requests a narrative report for the active analysis result on mount and
//! whenever that result changes. The text can be edited, printed, and
//! downloaded locally; nothing is written back to the backend.
//!
//! ERROR HANDLING
//! ==============
//! A failed request is logged and leaves the panel in its failed state with a
//! Retry button. Responses for superseded requests are dropped by
//! `ReportPanel`'s request ids.

#[cfg(test)]
#[path = "report_panel_test.rs"]
mod report_panel_test;

use leptos::prelude::*;
use triage::findings::{ConfidenceBand, confidence_precise};
use triage::report::{self, DISCLAIMER, FAILED_MESSAGE, LOADING_MESSAGE, ReportDraft, ReportPanel, ReportStatus};
use triage::{ApiConfig, Finding, User};

use crate::state::analysis::AnalysisState;
use crate::state::auth::AuthState;
use crate::util::browser;

fn summary_card_class(confidence: f64) -> String {
    format!("summary-card summary-card--{}", ConfidenceBand::from_confidence(confidence).css_class())
}

fn request_report(config: ApiConfig, user: User, findings: Vec<Finding>, report: RwSignal<ReportPanel>) {
    let mut request_id = 0;
    report.update(|r| request_id = r.begin());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let request = triage::ReportRequest::new(&user, &findings);
        match crate::net::api::generate_report(&config, &request).await {
            Ok(body) => report.update(|r| {
                if !r.complete(request_id, body) {
                    log::debug!("dropped stale report response {request_id}");
                }
            }),
            Err(e) => {
                log::error!("report generation failed: {e}");
                report.update(|r| {
                    r.fail(request_id);
                });
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, user, findings, request_id);
    }
}

#[component]
pub fn ReportPanelView() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let auth = expect_context::<RwSignal<AuthState>>();
    let analysis = expect_context::<RwSignal<AnalysisState>>();
    let report = expect_context::<RwSignal<ReportPanel>>();

    let findings = Memo::new(move |_| analysis.with(|a| a.workflow.result().map(|r| r.findings.clone())));

    let generate = move || {
        let Some(findings) = findings.get_untracked() else {
            return;
        };
        let Some(user) = auth.with_untracked(|a| a.user.clone()) else {
            return;
        };
        request_report(config.get_value(), user, findings, report);
    };

    Effect::new(move || {
        if findings.get().is_some() {
            generate();
        }
    });

    let loading = move || report.with(ReportPanel::is_loading);
    let failed = move || report.with(|r| matches!(r.status(), ReportStatus::Failed));
    let ready = move || report.with(|r| r.draft().is_some());
    let draft = move || report.with(|r| r.draft().cloned());
    let editing = move || draft().is_some_and(|d| d.is_editing());
    let edit = move |f: fn(&mut ReportDraft)| {
        report.update(|r| {
            if let Some(d) = r.draft_mut() {
                f(d);
            }
        });
    };

    let on_print = move |_| {
        if let Some(d) = draft() {
            browser::print_html(&report::print_html(d.text(), d.citations()));
        }
    };
    let on_download = move |_| {
        let Some(d) = draft() else {
            return;
        };
        let patient_id = auth.with_untracked(|a| a.user.as_ref().map(|u| u.patient_id.clone()).unwrap_or_default());
        let filename = report::download_filename(&patient_id, browser::today());
        browser::download_text(&filename, &report::download_body(d.text(), d.citations()));
    };

    let summary_cards = move || {
        findings
            .get()
            .unwrap_or_default()
            .into_iter()
            .map(|f| {
                view! {
                    <div class=summary_card_class(f.confidence)>
                        <span class="summary-card__disease">{f.disease}</span>
                        <span class="summary-card__confidence">{confidence_precise(f.confidence)}</span>
                        <span class="summary-card__severity">{f.severity}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section class="report-panel">
            <div class="report-panel__summary">{summary_cards}</div>

            <Show when=loading>
                <div class="report-panel__loading">
                    <div class="spinner"></div>
                    <p>{LOADING_MESSAGE}</p>
                </div>
            </Show>

            <Show when=failed>
                <div class="report-panel__error">
                    <p>{FAILED_MESSAGE}</p>
                    <button class="btn" on:click=move |_| generate()>"Retry"</button>
                </div>
            </Show>

            <Show when=ready>
                <div class="report-panel__toolbar">
                    <Show
                        when=editing
                        fallback=move || {
                            view! {
                                <button class="btn" on:click=move |_| edit(ReportDraft::begin_edit)>"Edit"</button>
                            }
                        }
                    >
                        <button class="btn btn--primary" on:click=move |_| edit(ReportDraft::save)>"Save"</button>
                        <button class="btn" on:click=move |_| edit(ReportDraft::cancel)>"Cancel"</button>
                    </Show>
                    <button class="btn" on:click=on_print>"Print"</button>
                    <button class="btn" on:click=on_download>"Download"</button>
                </div>

                <Show
                    when=editing
                    fallback=move || {
                        view! {
                            <pre class="report-panel__text">
                                {move || draft().map(|d| d.text().to_owned()).unwrap_or_default()}
                            </pre>
                        }
                    }
                >
                    <textarea
                        class="report-panel__editor"
                        prop:value=move || draft().map(|d| d.text().to_owned()).unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            report.update(|r| {
                                if let Some(d) = r.draft_mut() {
                                    d.edit(value);
                                }
                            });
                        }
                    ></textarea>
                </Show>

                <Show when=move || draft().is_some_and(|d| !d.citations().is_empty())>
                    <div class="report-panel__citations">
                        <h4>"References"</h4>
                        <ul>
                            {move || {
                                draft()
                                    .map(|d| report::numbered_citations(d.citations()))
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|line| view! { <li>{line}</li> })
                                    .collect_view()
                            }}
                        </ul>
                    </div>
                </Show>
            </Show>

            <aside class="report-panel__disclaimer">
                <strong>"Disclaimer: "</strong>
                {DISCLAIMER}
            </aside>
        </section>
    }
}
