//! # UI State Module
//!
//! General UI state that is not part of the session itself.
//!
//! ## Responsibilities:
//! - User feedback messages (error and success)
//!
//! ## Purpose:
//! Keeps presentation-only feedback out of the domain session, which stays a
//! pure function of the actions applied to it.

/// Feedback shown in the status line
#[derive(Debug, Default)]
pub struct UIState {
    /// Error message to display to the user
    pub error_message: Option<String>,

    /// Success message to display to the user
    pub success_message: Option<String>,
}

impl UIState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear any error or success messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    /// Set an error message, replacing any success message
    pub fn set_error(&mut self, message: String) {
        self.success_message = None;
        self.error_message = Some(message);
    }

    /// Set a success message, replacing any error message
    pub fn set_success(&mut self, message: String) {
        self.error_message = None;
        self.success_message = Some(message);
    }
}
