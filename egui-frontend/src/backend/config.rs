//! # App Configuration
//!
//! Optional YAML configuration for the Eat-N-Split app.
//!
//! ## Lookup order
//!
//! 1. The file named by `EAT_N_SPLIT_CONFIG`, if set
//! 2. `<config_dir>/eat-n-split/config.yaml`, if it exists
//! 3. Built-in defaults
//!
//! ## YAML Format
//!
//! ```yaml
//! window_title: "Eat-N-Split"
//! window_size: [1000.0, 700.0]
//! default_image_url: "https://i.pravatar.cc/48"
//! seed_friends:
//!   - id: "118836"
//!     name: "Clark"
//!     image: "https://i.pravatar.cc/48?u=118836"
//!     balance: -7.0
//! ```
//!
//! Every field is optional; missing fields fall back to the defaults.
//! Seed friends must have distinct ids and finite balances.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use shared::Friend;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "EAT_N_SPLIT_CONFIG";

const CONFIG_DIR_NAME: &str = "eat-n-split";
const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    /// Initial inner size of the window as [width, height]
    pub window_size: [f32; 2],
    /// Avatar URL pre-filled in the add-friend form
    pub default_image_url: String,
    /// Friends present when the app starts
    pub seed_friends: Vec<Friend>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Eat-N-Split".to_string(),
            window_size: [1000.0, 700.0],
            default_image_url: "https://i.pravatar.cc/48".to_string(),
            seed_friends: default_seed_friends(),
        }
    }
}

impl AppConfig {
    /// Load configuration following the lookup order above
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            info!("Loading config from ${} = {}", CONFIG_ENV_VAR, path);
            return Self::from_file(Path::new(&path));
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                info!("Loading config from {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read and parse a YAML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&yaml_content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_yaml(yaml_content: &str) -> Result<Self> {
        let config: AppConfig = serde_yaml::from_str(yaml_content)?;
        config.validate_seed_friends()?;
        Ok(config)
    }

    fn validate_seed_friends(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for friend in &self.seed_friends {
            if !seen.insert(friend.id.as_str()) {
                bail!("Duplicate friend id {} in seed_friends", friend.id);
            }
            if !friend.balance.is_finite() {
                bail!("Friend {} has a non-finite balance", friend.id);
            }
        }
        Ok(())
    }
}

/// `<config_dir>/eat-n-split/config.yaml` for the current platform
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn seed_friend(id: &str, name: &str, balance: f64) -> Friend {
    Friend {
        id: id.to_string(),
        name: name.to_string(),
        image: format!("https://i.pravatar.cc/48?u={}", id),
        balance,
    }
}

pub fn default_seed_friends() -> Vec<Friend> {
    vec![
        seed_friend("118836", "Clark", -7.0),
        seed_friend("933372", "Sarah", 20.0),
        seed_friend("499476", "Anthony", 0.0),
    ]
}
