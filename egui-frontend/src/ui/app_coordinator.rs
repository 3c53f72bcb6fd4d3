//! # App Coordinator Module
//!
//! Main update loop of the Eat-N-Split window.
//!
//! ## Application Flow (each frame):
//! 1. Handle global input (ESC closes the open panel)
//! 2. Take a snapshot of the session
//! 3. Render the sidebar: header, friend list, add-friend section
//! 4. Render the main area: split-bill form or a hint
//!
//! Components dispatch actions while rendering; the next frame renders the
//! resulting state.

use eframe::egui;
use shared::SessionSnapshot;

use crate::backend::domain::AppAction;
use crate::ui::app_state::EatNSplitApp;
use crate::ui::components::theme::CURRENT_THEME;

impl eframe::App for EatNSplitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape))
            && !self.backend.session_service.panel().is_hidden()
        {
            self.ui.clear_messages();
            self.dispatch(AppAction::PanelClosed);
        }

        let snapshot = self.backend.session_service.snapshot();

        egui::SidePanel::left("friends_sidebar")
            .resizable(false)
            .exact_width(420.0)
            .frame(
                egui::Frame::none()
                    .fill(CURRENT_THEME.layout.sidebar_background)
                    .inner_margin(egui::Margin::same(16.0)),
            )
            .show(ctx, |ui| {
                self.render_header(ui);
                ui.add_space(8.0);
                self.render_friend_list(ui, &snapshot);
                ui.add_space(8.0);
                self.render_add_friend_section(ui, &snapshot);
                ui.add_space(8.0);
                self.render_messages(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_main_content(ui, &snapshot);
        });
    }
}

impl EatNSplitApp {
    fn render_header(&self, ui: &mut egui::Ui) {
        ui.add(
            egui::Label::new(
                egui::RichText::new(&self.backend.config.window_title)
                    .size(26.0)
                    .strong()
                    .color(CURRENT_THEME.typography.heading),
            )
            .selectable(false),
        );
    }

    /// Render error and success messages
    fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.ui.error_message {
            ui.colored_label(CURRENT_THEME.typography.error, format!("❌ {}", error));
        }
        if let Some(success) = &self.ui.success_message {
            ui.colored_label(CURRENT_THEME.typography.success, format!("✅ {}", success));
        }
    }

    fn render_main_content(&mut self, ui: &mut egui::Ui, snapshot: &SessionSnapshot) {
        ui.add_space(24.0);
        match &snapshot.split_bill {
            Some(form) => self.render_split_bill_form(ui, form),
            None => {
                ui.vertical_centered(|ui| {
                    ui.add_space(80.0);
                    ui.label(
                        egui::RichText::new("Select a friend to split a bill")
                            .size(18.0)
                            .color(CURRENT_THEME.typography.secondary),
                    );
                });
            }
        }
    }
}
