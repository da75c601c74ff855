//! Dashboard page: upload, analyze, results, and report tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It owns the analyze orchestration
//! (request ids, progress, toasts) and logout; rendering is delegated to
//! components that read the shared analysis/report/ui contexts.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use triage::ApiConfig;
use triage::report::ReportPanel;
use triage::workflow::{AnalyzeStart, NO_FILE_MESSAGE};

use crate::components::doctors_modal::DoctorsModal;
use crate::components::header::Header;
use crate::components::patient_card::PatientCard;
use crate::components::progress_bar::ProgressBar;
use crate::components::report_panel::ReportPanelView;
use crate::components::results_section::ResultsSection;
use crate::components::upload_area::UploadArea;
use crate::state::analysis::AnalysisState;
use crate::state::auth::AuthState;
use crate::state::ui::{DashboardTab, Modal, UiState};
use crate::util::auth::install_unauth_redirect;
use crate::util::storage;
use crate::util::toast::show_toast;

fn tab_class(active: bool) -> &'static str {
    if active { "tab tab--active" } else { "tab" }
}

fn analyze_label(pending: bool) -> &'static str {
    if pending { "Analyzing..." } else { "Analyze X-ray" }
}

/// Start an analyze call for the staged file.
fn run_analyze(config: ApiConfig, analysis: RwSignal<AnalysisState>, ui: RwSignal<UiState>) {
    let mut start = AnalyzeStart::InFlight;
    analysis.update(|a| start = a.workflow.begin_analyze());
    let (request, file) = match start {
        AnalyzeStart::Started { request, file } => (request, file),
        AnalyzeStart::NoFile => {
            show_toast(ui, NO_FILE_MESSAGE);
            return;
        }
        AnalyzeStart::InFlight => return,
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let on_headers = move || {
            analysis.update(|a| {
                a.workflow.mark_responded(request);
            });
        };
        match crate::net::api::predict(&config, &file, on_headers).await {
            Ok(response) => {
                let mut applied = false;
                analysis.update(|a| applied = a.workflow.complete(request, &response));
                if applied {
                    log::info!("analysis {request} complete: {} findings", response.findings.len());
                    show_toast(ui, triage::workflow::ANALYSIS_COMPLETE_MESSAGE);
                }
            }
            Err(e) => {
                let mut applied = false;
                analysis.update(|a| applied = a.workflow.fail(request));
                if applied {
                    log::error!("analysis {request} failed: {e}");
                    show_toast(ui, e.user_message(triage::Operation::Analyze));
                }
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request, file);
    }
}

/// Forget the patient and clear per-session state. The theme is kept.
fn end_session(
    auth: RwSignal<AuthState>,
    ui: RwSignal<UiState>,
    analysis: RwSignal<AnalysisState>,
    report: RwSignal<ReportPanel>,
) {
    storage::session().clear();
    analysis.update(AnalysisState::reset);
    report.update(ReportPanel::reset);
    ui.update(UiState::reset_session);
    auth.update(AuthState::sign_out);
}

/// Dashboard page. Redirects to `/login` if no patient is signed in.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let analysis = expect_context::<RwSignal<AnalysisState>>();
    let report = expect_context::<RwSignal<ReportPanel>>();
    install_unauth_redirect(auth, use_navigate());

    let on_logout = Callback::new(move |()| end_session(auth, ui, analysis, report));
    let on_close_modal = Callback::new(move |()| ui.update(UiState::close_modal));

    let pending = move || analysis.with(|a| a.workflow.is_pending());
    let can_report = move || analysis.with(AnalysisState::can_report);
    let tab = move || ui.get().tab;
    let select_tab = move |target: DashboardTab| {
        let has_result = can_report();
        ui.update(|u| {
            u.select_tab(target, has_result);
        });
    };

    view! {
        <Show
            when=move || auth.get().is_signed_in()
            fallback=move || {
                view! {
                    <div class="loading-screen">
                        <p>{move || if auth.get().loading { "Loading RAD-ETHIX..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <Header on_logout=on_logout/>
                <main class="dashboard-page__body">
                    <PatientCard/>

                    <nav class="tabs">
                        <button
                            class=move || tab_class(tab() == DashboardTab::Analyze)
                            on:click=move |_| select_tab(DashboardTab::Analyze)
                        >
                            "Analyze"
                        </button>
                        <button
                            class=move || tab_class(tab() == DashboardTab::Report)
                            disabled=move || !can_report()
                            on:click=move |_| select_tab(DashboardTab::Report)
                        >
                            "Report"
                        </button>
                    </nav>

                    <Show
                        when=move || tab() == DashboardTab::Analyze
                        fallback=|| view! { <ReportPanelView/> }
                    >
                        <section class="analyze-tab">
                            <UploadArea/>
                            <ProgressBar/>
                            <button
                                class="btn btn--primary analyze-tab__submit"
                                disabled=pending
                                on:click=move |_| run_analyze(config.get_value(), analysis, ui)
                            >
                                {move || analyze_label(pending())}
                            </button>
                            <ResultsSection/>
                        </section>
                    </Show>
                </main>
                <Show when=move || ui.get().modal == Modal::Doctors>
                    <DoctorsModal on_close=on_close_modal/>
                </Show>
            </div>
        </Show>
    }
}
