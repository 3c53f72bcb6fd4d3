//! # Styling Module
//!
//! Global egui style setup and small drawing helpers shared by the components.
//!
//! ## Key Functions:
//! - `setup_app_style()` - Configure global egui styling
//! - `draw_avatar()` - Round avatar from a local image, or the friend's initial
//! - `balance_color()` - Text color for a balance status
//! - `primary_button()` - Orange action button

use eframe::egui;
use log::debug;
use shared::{BalanceStatus, Friend};

use super::theme::CURRENT_THEME;

/// Setup the global egui style for the whole application
pub fn setup_app_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = CURRENT_THEME.layout.app_background;
        style.visuals.extreme_bg_color = CURRENT_THEME.layout.card_background;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(7.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(7.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(7.0);

        style
    });
}

/// Draw a round avatar. `file://` images are loaded through the egui_extras
/// loaders; anything else, or an image that fails to load, is drawn as the
/// friend's initial. The image reference is shown on hover.
pub fn draw_avatar(ui: &mut egui::Ui, friend: &Friend, diameter: f32) -> egui::Response {
    let size = egui::vec2(diameter, diameter);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());

    if let Some(uri) = local_image_uri(&friend.image) {
        let image = egui::Image::new(uri)
            .fit_to_exact_size(size)
            .rounding(egui::Rounding::same(diameter / 2.0));
        match image.load_for_size(ui.ctx(), size) {
            Ok(_) => {
                image.paint_at(ui, rect);
                return response.on_hover_text(friend.image.as_str());
            }
            Err(e) => debug!("Avatar {} not loaded: {}", friend.image, e),
        }
    }

    let painter = ui.painter();
    painter.circle_filled(
        rect.center(),
        diameter / 2.0,
        CURRENT_THEME.avatar_color(&friend.id),
    );

    let initial = friend
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial,
        egui::FontId::new(diameter * 0.45, egui::FontFamily::Proportional),
        egui::Color32::WHITE,
    );

    response.on_hover_text(friend.image.as_str())
}

/// The loadable `file://` URI of an avatar reference, without the `?u=<id>`
/// discriminator. `None` for remote images.
pub fn local_image_uri(image: &str) -> Option<&str> {
    if !image.starts_with("file://") {
        return None;
    }
    image.split('?').next()
}

pub fn balance_color(status: BalanceStatus) -> egui::Color32 {
    match status {
        BalanceStatus::YouOwe(_) => CURRENT_THEME.balance.you_owe,
        BalanceStatus::OwesYou(_) => CURRENT_THEME.balance.owes_you,
        BalanceStatus::Even => CURRENT_THEME.balance.even,
    }
}

/// Orange action button used across the app
pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.to_string())
            .strong()
            .color(CURRENT_THEME.interactive.button_text),
    )
    .fill(CURRENT_THEME.interactive.button_fill)
    .rounding(egui::Rounding::same(7.0))
    .min_size(egui::vec2(90.0, 32.0))
}
