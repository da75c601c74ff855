//! Single-slot toast notification.
//!
//! Each [`ToastState::show`] bumps a generation counter. The dismiss timer
//! started for a message carries that generation, so a timer belonging to a
//! replaced message cannot hide the one that replaced it.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays visible.
pub const TOAST_DURATION_MS: u32 = 2500;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    message: String,
    visible: bool,
    generation: u64,
}

impl ToastState {
    /// Show `message`, replacing any current one. Returns the generation the
    /// dismiss timer must pass to [`ToastState::expire`].
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.message = message.into();
        self.visible = true;
        self.generation
    }

    /// Hide the toast if `generation` is still the latest. Returns whether it
    /// was hidden.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
