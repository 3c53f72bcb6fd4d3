//! # UI State
//!
//! Presentation-only state. Domain state lives in the backend session.

pub mod ui_state;

pub use ui_state::UIState;
