//! # Add Friend Form
//!
//! Name and image URL inputs shown under the friend list while the add-friend
//! panel is open, followed by the "Add friend" / "Close" toggle button.
//! Pressing Enter in either field submits the form.

use eframe::egui;
use shared::{AddFriendField, AddFriendSnapshot, SessionSnapshot};

use crate::backend::domain::AppAction;
use crate::ui::app_state::EatNSplitApp;
use crate::ui::components::styling::primary_button;
use crate::ui::components::theme::CURRENT_THEME;

impl EatNSplitApp {
    /// Render the add-friend form (if open) and its toggle button
    pub fn render_add_friend_section(&mut self, ui: &mut egui::Ui, snapshot: &SessionSnapshot) {
        if let Some(form) = &snapshot.add_friend {
            self.render_add_friend_form(ui, form);
            ui.add_space(8.0);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            let label = if snapshot.add_friend.is_some() { "Close" } else { "Add friend" };
            if ui.add(primary_button(label)).clicked() {
                self.ui.clear_messages();
                self.dispatch(AppAction::AddFriendRequested);
            }
        });
    }

    fn render_add_friend_form(&mut self, ui: &mut egui::Ui, form: &AddFriendSnapshot) {
        let mut name = form.name.clone();
        let mut image_url = form.image_url.clone();
        let mut submit = false;

        egui::Frame::none()
            .fill(CURRENT_THEME.layout.form_background)
            .rounding(egui::Rounding::same(7.0))
            .inner_margin(egui::Margin::same(14.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                egui::Grid::new("add_friend_grid")
                    .num_columns(2)
                    .spacing([12.0, 10.0])
                    .show(ui, |ui| {
                        ui.label("😍 Friend name");
                        let name_response = ui.add(
                            egui::TextEdit::singleline(&mut name)
                                .hint_text("Name")
                                .desired_width(180.0),
                        );
                        ui.end_row();

                        ui.label("🖼 Image URL");
                        let image_response = ui.add(
                            egui::TextEdit::singleline(&mut image_url).desired_width(180.0),
                        );
                        ui.end_row();

                        if name_response.changed() {
                            self.dispatch(AppAction::AddFriendFieldChanged(
                                AddFriendField::Name,
                                name.clone(),
                            ));
                        }
                        if image_response.changed() {
                            self.dispatch(AppAction::AddFriendFieldChanged(
                                AddFriendField::ImageUrl,
                                image_url.clone(),
                            ));
                        }

                        let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
                        if enter_pressed && (name_response.lost_focus() || image_response.lost_focus()) {
                            submit = true;
                        }
                    });

                ui.add_space(6.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    if ui.add(primary_button("Add")).clicked() {
                        submit = true;
                    }
                });
            });

        if submit {
            self.dispatch(AppAction::AddFriendSubmitted);
        }
    }
}
