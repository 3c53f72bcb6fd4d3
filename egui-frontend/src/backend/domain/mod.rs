//! # Domain Module
//!
//! Business logic for Eat-N-Split, independent of egui.
//!
//! ## Module Organization
//!
//! - **friend_registry**: ordered friends and their running balances
//! - **active_panel**: which form is open and which friend is selected
//! - **add_friend**: add-friend form validation and friend construction
//! - **split_bill**: split-bill form values and the derived balance delta
//! - **session_service**: the state container that applies user actions
//! - **id_generator**: session-unique ids for new friends
//! - **commands**: actions, commands and outcomes passed between layers
//!
//! ## Balance convention
//!
//! A negative balance means the user owes the friend, a positive one means the
//! friend owes the user, zero means settled.

pub mod active_panel;
pub mod add_friend;
pub mod commands;
pub mod friend_registry;
pub mod id_generator;
pub mod session_service;
pub mod split_bill;

pub use active_panel::*;
pub use add_friend::*;
pub use commands::friends::*;
pub use commands::session::*;
pub use friend_registry::*;
pub use id_generator::*;
pub use session_service::*;
pub use split_bill::*;
