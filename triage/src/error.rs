//! Error taxonomy for backend calls and the user-facing text for each.
//!
//! Status codes and transport details are kept for logs; users only ever see
//! the fixed per-operation messages from [`ApiError::user_message`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a call to the external backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(u16),
    /// The response body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),
    /// The request could not be built from local input.
    #[error("request build failed: {0}")]
    Request(String),
}

/// Backend operation a failure belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Login,
    Signup,
    Analyze,
    Report,
}

impl ApiError {
    /// Return `Ok` for 2xx statuses and [`ApiError::Status`] otherwise.
    pub fn check_status(status: u16) -> Result<(), Self> {
        if (200..300).contains(&status) { Ok(()) } else { Err(Self::Status(status)) }
    }

    /// Fixed user-facing message for this failure during `operation`.
    #[must_use]
    pub fn user_message(&self, operation: Operation) -> &'static str {
        match (operation, self) {
            (Operation::Login, Self::Status(_)) => "Patient ID not found",
            (Operation::Login, _) => "Login failed",
            (Operation::Signup, _) => "Signup failed",
            (Operation::Analyze, _) => "AI backend request failed.",
            (Operation::Report, _) => "Failed to generate report. Please try again.",
        }
    }
}
