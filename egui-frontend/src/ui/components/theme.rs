//! # Theme Configuration
//!
//! Centralized colors for the Eat-N-Split app. All visual styling should use
//! these constants so the look stays consistent.
//!
//! ## Usage
//! ```rust,ignore
//! use crate::ui::components::theme::CURRENT_THEME;
//!
//! let color = CURRENT_THEME.balance.you_owe;
//! ```

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Interactive element colors (buttons, selected rows)
    pub interactive: InteractiveColors,
    /// Background and layout colors
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Balance status colors
    pub balance: BalanceColors,
    /// Avatar fill colors, picked per friend
    pub avatars: [Color32; 6],
}

/// Colors for buttons and selection highlights
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    pub button_fill: Color32,
    pub button_text: Color32,
    /// Background of the selected friend row
    pub selected_background: Color32,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub app_background: Color32,
    pub sidebar_background: Color32,
    pub card_background: Color32,
    pub card_border: Color32,
    /// Split-bill form background
    pub form_background: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub heading: Color32,
    pub error: Color32,
    pub success: Color32,
}

/// Colors for the three balance states
#[derive(Debug, Clone)]
pub struct BalanceColors {
    /// The user owes the friend
    pub you_owe: Color32,
    /// The friend owes the user
    pub owes_you: Color32,
    pub even: Color32,
}

/// The current active theme - warm orange accents
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        button_fill: Color32::from_rgb(255, 169, 77),
        button_text: Color32::from_rgb(52, 58, 64),
        selected_background: Color32::from_rgb(255, 244, 230),
    },
    layout: LayoutColors {
        app_background: Color32::from_rgb(248, 249, 250),
        sidebar_background: Color32::from_rgb(248, 249, 250),
        card_background: Color32::WHITE,
        card_border: Color32::from_rgb(222, 226, 230),
        form_background: Color32::from_rgb(255, 244, 230),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(52, 58, 64),
        secondary: Color32::from_rgb(108, 117, 125),
        heading: Color32::from_rgb(33, 37, 41),
        error: Color32::from_rgb(224, 49, 49),
        success: Color32::from_rgb(47, 158, 68),
    },
    balance: BalanceColors {
        you_owe: Color32::from_rgb(224, 49, 49),
        owes_you: Color32::from_rgb(102, 168, 15),
        even: Color32::from_rgb(108, 117, 125),
    },
    avatars: [
        Color32::from_rgb(255, 146, 43),
        Color32::from_rgb(76, 110, 245),
        Color32::from_rgb(64, 192, 87),
        Color32::from_rgb(250, 82, 82),
        Color32::from_rgb(190, 75, 219),
        Color32::from_rgb(21, 170, 191),
    ],
};

impl Theme {
    /// Stable avatar color for a friend id
    pub fn avatar_color(&self, friend_id: &str) -> Color32 {
        let hash = friend_id
            .bytes()
            .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
        self.avatars[hash % self.avatars.len()]
    }
}
