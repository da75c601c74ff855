//! X-ray upload drop zone with preview and remove.
//!
//! SYSTEM CONTEXT
//! ==============
//! Picking a file (click or drop) clears prior results immediately, then reads
//! the bytes asynchronously. The read is tagged with a token from the
//! workflow so a slow read cannot overwrite a newer pick or a remove.

#[cfg(test)]
#[path = "upload_area_test.rs"]
mod upload_area_test;

use leptos::prelude::*;
use triage::report::ReportPanel;
use triage::upload::ACCEPT;

use crate::state::analysis::AnalysisState;
use crate::state::ui::{DashboardTab, UiState};

fn drop_zone_class(hover: bool) -> &'static str {
    if hover { "upload-area upload-area--hover" } else { "upload-area" }
}

#[cfg(feature = "hydrate")]
fn accept_file(
    file: web_sys::File,
    analysis: RwSignal<AnalysisState>,
    report: RwSignal<ReportPanel>,
    ui: RwSignal<UiState>,
) {
    let mut token = 0;
    analysis.update(|a| token = a.workflow.begin_read());
    report.update(ReportPanel::reset);
    ui.update(|u| u.tab = DashboardTab::Analyze);

    leptos::task::spawn_local(async move {
        let Some(selected) = crate::util::browser::read_file(file).await else {
            log::warn!("could not read picked file");
            let mut dropped = false;
            analysis.update(|a| dropped = a.workflow.abandon_read(token));
            if dropped {
                crate::util::toast::show_toast(ui, triage::workflow::READ_FAILED_MESSAGE);
            }
            return;
        };
        if !triage::upload::matches_accept(&selected.name, &selected.mime) {
            log::info!("{} ({}) is outside the picker filter", selected.name, selected.mime);
        }
        let mut staged = false;
        analysis.update(|a| staged = a.workflow.finish_read(token, selected));
        if staged {
            crate::util::toast::show_toast(ui, triage::workflow::IMAGE_LOADED_MESSAGE);
        }
    });
}

#[component]
pub fn UploadArea() -> impl IntoView {
    let analysis = expect_context::<RwSignal<AnalysisState>>();
    let report = expect_context::<RwSignal<ReportPanel>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let hover = RwSignal::new(false);

    let preview = move || analysis.with(|a| a.workflow.preview_url().map(str::to_owned));
    let file_name = move || analysis.with(|a| a.workflow.file().map(|f| f.name.clone()).unwrap_or_default());
    let heatmap = move || analysis.with(|a| a.workflow.heatmap().map(triage::workflow::Heatmap::data_url));

    let on_pick = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get() {
                input.click();
            }
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(file) = input.files().and_then(|list| list.get(0)) {
                accept_file(file, analysis, report, ui);
            }
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        hover.set(false);
        #[cfg(feature = "hydrate")]
        {
            if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|list| list.get(0)) {
                accept_file(file, analysis, report, ui);
            }
        }
    };

    let on_remove = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        analysis.update(|a| a.workflow.remove());
        report.update(ReportPanel::reset);
        ui.update(|u| u.tab = DashboardTab::Analyze);
    };

    view! {
        <div
            class=move || drop_zone_class(hover.get())
            on:click=on_pick
            on:dragover=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                hover.set(true);
            }
            on:dragleave=move |_| hover.set(false)
            on:drop=on_drop
        >
            <input
                node_ref=input_ref
                class="upload-area__input"
                type="file"
                accept=ACCEPT
                on:change=on_change
            />
            <Show
                when=move || preview().is_some()
                fallback=|| {
                    view! {
                        <div class="upload-area__prompt">
                            <p>"Drop a chest X-ray here or click to browse"</p>
                            <p class="upload-area__hint">"JPEG, PNG or DICOM"</p>
                        </div>
                    }
                }
            >
                <div class="image-preview">
                    <img class="image-preview__image" src=move || preview().unwrap_or_default() alt="X-ray preview"/>
                    <Show when=move || heatmap().is_some()>
                        <img
                            class="image-preview__heatmap"
                            src=move || heatmap().unwrap_or_default()
                            alt="Heatmap overlay"
                        />
                    </Show>
                    <div class="image-preview__footer">
                        <span class="image-preview__name">{file_name}</span>
                        <button class="btn btn--danger" on:click=on_remove>"Remove"</button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
