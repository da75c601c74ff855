//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use triage::ApiConfig;
use triage::report::ReportPanel;

use crate::components::toast::Toast;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::{analysis::AnalysisState, auth::AuthState, ui::UiState};
use crate::util::{storage, theme};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="dark-mode">
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, restores the persisted session once
/// hydrated, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let analysis = RwSignal::new(AnalysisState::default());
    let report = RwSignal::new(ReportPanel::default());

    provide_context(ApiConfig::from_build_env());
    provide_context(auth);
    provide_context(ui);
    provide_context(analysis);
    provide_context(report);

    // Effects only run in the browser, so SSR keeps the loading view.
    Effect::new(move || {
        let preference = theme::read_preference();
        theme::apply(preference);
        ui.update(|u| u.theme = preference);
        auth.update(|a| a.restored(storage::session().load()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/radethix.css"/>
        <Title text="RAD-ETHIX"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
        <Toast/>
    }
}
