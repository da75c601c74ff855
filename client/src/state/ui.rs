//! Local UI chrome state (theme, tabs, modal, toast, auth view).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the analysis and report
//! state so rendering controls can evolve independently of backend data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use triage::auth::AuthMode;
use triage::doctors::featured_fee;
use triage::session::Theme;
use triage::toast::ToastState;

/// Dashboard tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Analyze,
    Report,
}

/// Which overlay is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    None,
    Doctors,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub auth_mode: AuthMode,
    pub tab: DashboardTab,
    pub modal: Modal,
    /// Fee highlighted in the doctors overlay, re-rolled on every open.
    pub featured_fee: u32,
    pub toast: ToastState,
}

impl UiState {
    /// Open the doctors overlay with a fee picked from `roll` in `[0, 1)`.
    pub fn open_doctors(&mut self, roll: f64) {
        self.featured_fee = featured_fee(roll);
        self.modal = Modal::Doctors;
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::None;
    }

    /// Switch tabs. The Report tab is refused until there is a result.
    pub fn select_tab(&mut self, tab: DashboardTab, has_result: bool) -> bool {
        if tab == DashboardTab::Report && !has_result {
            return false;
        }
        self.tab = tab;
        true
    }

    /// Reset everything but the theme, as on logout.
    pub fn reset_session(&mut self) {
        *self = Self { theme: self.theme, ..Self::default() };
    }
}
