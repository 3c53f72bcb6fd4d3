//! Eat-N-Split: split bills with friends and keep track of who owes whom.
//!
//! `backend` holds configuration and the egui-independent domain logic;
//! `ui` renders it with eframe.

pub mod backend;
pub mod ui;
