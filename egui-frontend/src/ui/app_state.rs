//! # App State Module
//!
//! Central application struct for the Eat-N-Split window.
//!
//! ## Key Types:
//! - `EatNSplitApp` - owns the backend and the presentation-only state
//!
//! ## Key Functions:
//! - `new()` - set up styling and wrap a backend
//! - `dispatch()` - forward a user action to the session and turn the result
//!   into user feedback
//!
//! ## State Management:
//! Domain state (friends, selection, form drafts) lives in the backend's
//! `SessionService`. Components read a snapshot each frame and report
//! interactions back through `dispatch()`, so there is a single source of
//! truth for everything that is rendered.

use log::{debug, info, trace, warn};

use crate::backend::domain::{ActionOutcome, AppAction, SessionError};
use crate::backend::Backend;
use crate::ui::state::UIState;

pub struct EatNSplitApp {
    pub backend: Backend,
    pub ui: UIState,
}

impl EatNSplitApp {
    pub fn new(cc: &eframe::CreationContext<'_>, backend: Backend) -> Self {
        info!("Initializing EatNSplitApp");
        crate::ui::setup_app_style(&cc.egui_ctx);

        // Local file avatars; remote URLs are never fetched
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Self::with_backend(backend)
    }

    /// App without an egui context, used by tests
    pub fn with_backend(backend: Backend) -> Self {
        Self {
            backend,
            ui: UIState::new(),
        }
    }

    /// Apply one action and record feedback for the status line
    pub fn dispatch(&mut self, action: AppAction) {
        debug!("Dispatching {:?}", action);
        match self.backend.session_service.dispatch(action) {
            Ok(ActionOutcome::Updated) => {}
            Ok(ActionOutcome::FriendAdded(friend)) => {
                self.ui.set_success(format!("{} was added to your friends", friend.name));
            }
            Ok(ActionOutcome::BillSplit { friend_id, new_balance, .. }) => {
                let message = self
                    .backend
                    .session_service
                    .registry()
                    .get(&friend_id)
                    .map(|friend| friend.balance_message())
                    .unwrap_or_else(|| format!("New balance: {:.2}", new_balance));
                self.ui.set_success(message);
            }
            // Rejected amount edits snap back without feedback
            Err(SessionError::SplitBill(e)) => {
                debug!("Amount edit ignored: {}", e);
            }
            Err(e) if e.is_user_input() => {
                self.ui.set_error(e.to_string());
            }
            Err(e) => {
                warn!("Action rejected: {}", e);
                self.ui.set_error(e.to_string());
            }
        }

        if log::log_enabled!(log::Level::Trace) {
            match serde_json::to_string(&self.backend.session_service.snapshot()) {
                Ok(json) => trace!("Session after action: {}", json),
                Err(e) => warn!("Failed to serialize session snapshot: {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::AppConfig;
    use shared::{Payer, SplitBillField};

    fn create_test_app() -> EatNSplitApp {
        EatNSplitApp::with_backend(Backend::with_config(AppConfig::default()))
    }

    #[test]
    fn test_empty_name_shows_error() {
        let mut app = create_test_app();
        app.dispatch(AppAction::AddFriendRequested);
        app.dispatch(AppAction::AddFriendSubmitted);

        assert_eq!(app.ui.error_message.as_deref(), Some("Name is required"));
        assert!(app.backend.session_service.panel().is_adding_friend());
    }

    #[test]
    fn test_clamped_expense_is_silent() {
        let mut app = create_test_app();
        app.dispatch(AppAction::FriendSelected("499476".to_string()));
        app.dispatch(AppAction::SplitBillFieldChanged(SplitBillField::BillTotal(100.0)));
        app.dispatch(AppAction::SplitBillFieldChanged(SplitBillField::UserExpense(150.0)));

        assert_eq!(app.ui.error_message, None);
    }

    #[test]
    fn test_negative_amount_is_silent() {
        let mut app = create_test_app();
        app.dispatch(AppAction::FriendSelected("499476".to_string()));
        app.dispatch(AppAction::SplitBillFieldChanged(SplitBillField::BillTotal(-5.0)));
        app.dispatch(AppAction::SplitBillFieldChanged(SplitBillField::UserExpense(-1.0)));

        assert_eq!(app.ui.error_message, None);
        let form = app.backend.session_service.snapshot().split_bill.unwrap();
        assert_eq!(form.bill_total, 0.0);
        assert_eq!(form.user_expense, 0.0);
    }

    #[test]
    fn test_split_reports_new_balance() {
        let mut app = create_test_app();
        app.dispatch(AppAction::FriendSelected("499476".to_string()));
        app.dispatch(AppAction::SplitBillFieldChanged(SplitBillField::BillTotal(100.0)));
        app.dispatch(AppAction::SplitBillFieldChanged(SplitBillField::UserExpense(40.0)));
        app.dispatch(AppAction::SplitBillFieldChanged(SplitBillField::Payer(Payer::Friend)));
        app.dispatch(AppAction::SplitBillSubmitted);

        assert_eq!(app.ui.success_message.as_deref(), Some("You owe Anthony $40."));
    }
}
