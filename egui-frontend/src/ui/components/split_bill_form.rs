//! # Split Bill Form
//!
//! Shown in the main area while a friend is selected. The bill value and the
//! user's expense are editable; the friend's expense is derived and read-only.
//! An expense edit above the bill value is rejected by the session, so the
//! field simply snaps back to its previous value. Both amount fields are
//! limited to non-negative values. If the bill is lowered below the current
//! expense, the friend's share turns negative and is shown in the error color.

use eframe::egui;
use shared::{format_amount, Payer, SplitBillField, SplitBillSnapshot};

use crate::backend::domain::AppAction;
use crate::ui::app_state::EatNSplitApp;
use crate::ui::components::styling::primary_button;
use crate::ui::components::theme::CURRENT_THEME;

/// Values the amount fields accept
const AMOUNT_RANGE: std::ops::RangeInclusive<f64> = 0.0..=f64::MAX;

impl EatNSplitApp {
    /// Render the split-bill form for the selected friend
    pub fn render_split_bill_form(&mut self, ui: &mut egui::Ui, form: &SplitBillSnapshot) {
        let mut bill_total = form.bill_total;
        let mut user_expense = form.user_expense;
        let mut payer = form.payer;

        egui::Frame::none()
            .fill(CURRENT_THEME.layout.form_background)
            .rounding(egui::Rounding::same(7.0))
            .inner_margin(egui::Margin::same(24.0))
            .show(ui, |ui| {
                ui.set_max_width(460.0);
                ui.heading(
                    egui::RichText::new(format!("Split a bill with {}", form.friend_name))
                        .color(CURRENT_THEME.typography.heading),
                );
                ui.add_space(12.0);

                egui::Grid::new("split_bill_grid")
                    .num_columns(2)
                    .spacing([16.0, 12.0])
                    .show(ui, |ui| {
                        ui.label("💰 Bill value");
                        if ui
                            .add(
                                egui::DragValue::new(&mut bill_total)
                                    .speed(1.0)
                                    .clamp_range(AMOUNT_RANGE)
                                    .prefix("$"),
                            )
                            .changed()
                        {
                            self.dispatch(AppAction::SplitBillFieldChanged(
                                SplitBillField::BillTotal(bill_total),
                            ));
                        }
                        ui.end_row();

                        ui.label("🧍 Your expense");
                        if ui
                            .add(
                                egui::DragValue::new(&mut user_expense)
                                    .speed(1.0)
                                    .clamp_range(AMOUNT_RANGE)
                                    .prefix("$"),
                            )
                            .changed()
                        {
                            self.dispatch(AppAction::SplitBillFieldChanged(
                                SplitBillField::UserExpense(user_expense),
                            ));
                        }
                        ui.end_row();

                        ui.label(format!("👫 {}'s expense", form.friend_name));
                        if form.friend_expense < 0.0 {
                            ui.label(
                                egui::RichText::new(friend_share_text(form.friend_expense))
                                    .color(CURRENT_THEME.typography.error),
                            )
                            .on_hover_text("Your expense is above the bill value");
                        } else {
                            ui.label(
                                egui::RichText::new(friend_share_text(form.friend_expense))
                                    .color(CURRENT_THEME.typography.secondary),
                            );
                        }
                        ui.end_row();

                        ui.label("🤑 Who is paying the bill");
                        let previous = payer;
                        egui::ComboBox::from_id_source("payer_select")
                            .selected_text(payer_label(payer, &form.friend_name))
                            .show_ui(ui, |ui| {
                                ui.selectable_value(&mut payer, Payer::User, "You");
                                ui.selectable_value(&mut payer, Payer::Friend, form.friend_name.as_str());
                            });
                        if payer != previous {
                            self.dispatch(AppAction::SplitBillFieldChanged(SplitBillField::Payer(
                                payer,
                            )));
                        }
                        ui.end_row();
                    });

                ui.add_space(16.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    if ui.add(primary_button("Split bill")).clicked() {
                        self.dispatch(AppAction::SplitBillSubmitted);
                    }
                });
            });
    }
}

fn friend_share_text(friend_expense: f64) -> String {
    if friend_expense < 0.0 {
        format!("-${}", format_amount(friend_expense.abs()))
    } else {
        format!("${}", format_amount(friend_expense))
    }
}

fn payer_label(payer: Payer, friend_name: &str) -> String {
    match payer {
        Payer::User => "You".to_string(),
        Payer::Friend => friend_name.to_string(),
    }
}
