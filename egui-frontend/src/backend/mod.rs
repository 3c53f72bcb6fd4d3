//! # Backend Module for egui Frontend
//!
//! Configuration and domain services for the desktop app. Everything here is
//! synchronous and in-memory; the UI talks to it through `Backend`.

use log::info;

pub mod config;
pub mod domain;

pub use config::AppConfig;

/// Main backend struct that owns configuration and the session
pub struct Backend {
    pub config: AppConfig,
    pub session_service: domain::SessionService,
}

impl Backend {
    pub fn with_config(config: AppConfig) -> Self {
        info!(
            "Initializing backend with {} seed friends",
            config.seed_friends.len()
        );
        let session_service = domain::SessionService::new(&config);
        Self {
            config,
            session_service,
        }
    }
}
