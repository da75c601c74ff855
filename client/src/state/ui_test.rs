use super::*;

#[test]
fn ui_state_defaults() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.auth_mode, AuthMode::Landing);
    assert_eq!(state.tab, DashboardTab::Analyze);
    assert_eq!(state.modal, Modal::None);
    assert!(!state.toast.is_visible());
}

#[test]
fn open_doctors_picks_featured_fee() {
    let mut state = UiState::default();
    state.open_doctors(0.99);
    assert_eq!(state.modal, Modal::Doctors);
    assert_eq!(state.featured_fee, 700);
    state.close_modal();
    assert_eq!(state.modal, Modal::None);
}

#[test]
fn report_tab_requires_result() {
    let mut state = UiState::default();
    assert!(!state.select_tab(DashboardTab::Report, false));
    assert_eq!(state.tab, DashboardTab::Analyze);
    assert!(state.select_tab(DashboardTab::Report, true));
    assert_eq!(state.tab, DashboardTab::Report);
}

#[test]
fn reset_session_keeps_theme() {
    let mut state = UiState { theme: Theme::Light, tab: DashboardTab::Report, ..UiState::default() };
    state.open_doctors(0.1);
    state.toast.show("Analysis complete.");
    state.reset_session();
    assert_eq!(state, UiState { theme: Theme::Light, ..UiState::default() });
}
