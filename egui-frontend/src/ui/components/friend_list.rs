//! # Friend List
//!
//! Renders every friend with avatar, name and balance status, plus a
//! Select/Close button that toggles the friend's selection. The selected
//! friend's row is highlighted.

use eframe::egui;
use shared::{Friend, SessionSnapshot};

use crate::backend::domain::AppAction;
use crate::ui::app_state::EatNSplitApp;
use crate::ui::components::styling::{balance_color, draw_avatar, primary_button};
use crate::ui::components::theme::CURRENT_THEME;

impl EatNSplitApp {
    /// Render the friend list in the sidebar
    pub fn render_friend_list(&mut self, ui: &mut egui::Ui, snapshot: &SessionSnapshot) {
        egui::ScrollArea::vertical()
            .id_source("friend_list")
            .max_height(ui.available_height() * 0.6)
            .show(ui, |ui| {
                for friend in &snapshot.friends {
                    let is_selected = snapshot.is_selected(&friend.id);
                    if self.render_friend_row(ui, friend, is_selected) {
                        self.dispatch(AppAction::FriendSelected(friend.id.clone()));
                    }
                    ui.add_space(4.0);
                }
            });
    }

    /// Returns true when the Select/Close button was clicked
    fn render_friend_row(&self, ui: &mut egui::Ui, friend: &Friend, is_selected: bool) -> bool {
        let fill = if is_selected {
            CURRENT_THEME.interactive.selected_background
        } else {
            CURRENT_THEME.layout.card_background
        };

        let mut clicked = false;
        egui::Frame::none()
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, CURRENT_THEME.layout.card_border))
            .rounding(egui::Rounding::same(7.0))
            .inner_margin(egui::Margin::same(10.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    draw_avatar(ui, friend, 44.0);

                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(&friend.name)
                                .strong()
                                .size(18.0)
                                .color(CURRENT_THEME.typography.heading),
                        );
                        ui.label(
                            egui::RichText::new(friend.balance_message())
                                .color(balance_color(friend.balance_status())),
                        );
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label = if is_selected { "Close" } else { "Select" };
                        if ui.add(primary_button(label)).clicked() {
                            clicked = true;
                        }
                    });
                });
            });
        clicked
    }
}
