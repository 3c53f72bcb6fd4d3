//! # UI Components Module
//!
//! All UI components for the Eat-N-Split window.
//!
//! ## Module Organization:
//! - `friend_list` - friend rows with balance status and Select/Close buttons
//! - `add_friend_form` - add-friend inputs and the panel toggle button
//! - `split_bill_form` - split-bill inputs for the selected friend
//! - `styling` - global style setup and drawing helpers
//! - `theme` - color constants

pub mod add_friend_form;
pub mod friend_list;
pub mod split_bill_form;
pub mod styling;
pub mod theme;

pub use styling::{balance_color, draw_avatar, primary_button, setup_app_style};
pub use theme::*;
