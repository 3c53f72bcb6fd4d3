//! Session state container for the Eat-N-Split app.
//!
//! `SessionService` owns the friend registry and the active panel and is the
//! only place either is mutated. The UI feeds it `AppAction`s one at a time and
//! renders from `snapshot()`. Every action either commits synchronously or is
//! rejected with a typed error, in which case no state has changed.

use log::{info, warn};
use shared::{Friend, SessionSnapshot, SplitBillSnapshot};

use super::active_panel::ActivePanel;
use super::add_friend::{create_friend, AddFriendError};
use super::commands::friends::AdjustBalanceCommand;
use super::commands::session::{ActionOutcome, AppAction};
use super::friend_registry::{FriendRegistry, FriendRegistryError};
use super::id_generator::{FriendIdGenerator, UuidIdGenerator};
use super::split_bill::SplitBillError;
use crate::backend::config::AppConfig;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    AddFriend(#[from] AddFriendError),
    #[error(transparent)]
    SplitBill(#[from] SplitBillError),
    #[error(transparent)]
    Registry(#[from] FriendRegistryError),
    #[error("Cannot select unknown friend {0}")]
    UnknownFriend(String),
    #[error("The add-friend form is not open")]
    NotAddingFriend,
    #[error("No friend is selected for splitting a bill")]
    NoActiveSplit,
}

impl SessionError {
    /// Rejections the user caused by editing a form, as opposed to actions
    /// that should never arrive in the current state.
    pub fn is_user_input(&self) -> bool {
        matches!(self, SessionError::AddFriend(_) | SessionError::SplitBill(_))
    }
}

pub struct SessionService {
    registry: FriendRegistry,
    panel: ActivePanel,
    id_generator: Box<dyn FriendIdGenerator>,
    default_image_url: String,
}

impl SessionService {
    /// Session seeded from configuration, generating UUID ids
    pub fn new(config: &AppConfig) -> Self {
        Self::with_id_generator(
            config.seed_friends.clone(),
            &config.default_image_url,
            Box::new(UuidIdGenerator),
        )
    }

    pub fn with_id_generator(
        seed_friends: Vec<Friend>,
        default_image_url: &str,
        id_generator: Box<dyn FriendIdGenerator>,
    ) -> Self {
        Self {
            registry: FriendRegistry::with_friends(seed_friends),
            panel: ActivePanel::Hidden,
            id_generator,
            default_image_url: default_image_url.to_string(),
        }
    }

    /// Apply one user action
    pub fn dispatch(&mut self, action: AppAction) -> Result<ActionOutcome, SessionError> {
        match action {
            AppAction::AddFriendRequested => {
                self.panel.toggle_add_friend(&self.default_image_url);
                Ok(ActionOutcome::Updated)
            }
            AppAction::FriendSelected(friend_id) => self.select_friend(&friend_id),
            AppAction::AddFriendFieldChanged(field, value) => {
                let draft = self
                    .panel
                    .add_friend_draft_mut()
                    .ok_or(SessionError::NotAddingFriend)?;
                draft.set_field(field, value);
                Ok(ActionOutcome::Updated)
            }
            AppAction::AddFriendSubmitted => self.submit_add_friend(),
            AppAction::SplitBillFieldChanged(field) => {
                let draft = self
                    .panel
                    .split_bill_draft_mut()
                    .ok_or(SessionError::NoActiveSplit)?;
                draft.apply(field)?;
                Ok(ActionOutcome::Updated)
            }
            AppAction::SplitBillSubmitted => self.submit_split_bill(),
            AppAction::PanelClosed => {
                self.panel.close();
                Ok(ActionOutcome::Updated)
            }
        }
    }

    fn select_friend(&mut self, friend_id: &str) -> Result<ActionOutcome, SessionError> {
        if !self.registry.contains(friend_id) {
            return Err(SessionError::UnknownFriend(friend_id.to_string()));
        }
        self.panel.toggle_friend(friend_id);
        Ok(ActionOutcome::Updated)
    }

    fn submit_add_friend(&mut self) -> Result<ActionOutcome, SessionError> {
        let draft = self
            .panel
            .add_friend_draft()
            .ok_or(SessionError::NotAddingFriend)?;
        let command = draft.validate()?;

        let friend = create_friend(command, self.id_generator.next_id());
        self.registry.add(friend.clone());
        self.panel.close();

        info!("Friend {} added, {} friends total", friend.name, self.registry.len());
        Ok(ActionOutcome::FriendAdded(friend))
    }

    fn submit_split_bill(&mut self) -> Result<ActionOutcome, SessionError> {
        let command = match &self.panel {
            ActivePanel::Splitting { friend_id, draft } => AdjustBalanceCommand {
                friend_id: friend_id.clone(),
                delta: draft.balance_delta(),
            },
            _ => return Err(SessionError::NoActiveSplit),
        };

        let new_balance = self
            .registry
            .adjust_balance(&command.friend_id, command.delta)
            .map_err(|e| {
                warn!("Split bill rejected: {}", e);
                e
            })?;
        self.panel.close();

        info!(
            "Bill split with {}: delta {:.2}, new balance {:.2}",
            command.friend_id, command.delta, new_balance
        );
        Ok(ActionOutcome::BillSplit {
            friend_id: command.friend_id,
            delta: command.delta,
            new_balance,
        })
    }

    /// Read-only view of the whole session for rendering
    pub fn snapshot(&self) -> SessionSnapshot {
        let split_bill = match &self.panel {
            ActivePanel::Splitting { friend_id, draft } => {
                self.registry.get(friend_id).map(|friend| SplitBillSnapshot {
                    friend_id: friend.id.clone(),
                    friend_name: friend.name.clone(),
                    bill_total: draft.bill_total(),
                    user_expense: draft.user_expense(),
                    friend_expense: draft.friend_expense(),
                    payer: draft.payer(),
                })
            }
            _ => None,
        };

        SessionSnapshot {
            friends: self.registry.friends().to_vec(),
            selected_friend_id: self.panel.selected_friend_id().map(str::to_string),
            add_friend: self.panel.add_friend_draft().map(|draft| draft.to_snapshot()),
            split_bill,
        }
    }

    pub fn registry(&self) -> &FriendRegistry {
        &self.registry
    }

    pub fn panel(&self) -> &ActivePanel {
        &self.panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::config::default_seed_friends;
    use crate::backend::domain::id_generator::SequentialIdGenerator;
    use shared::{AddFriendField, Payer, SplitBillField};

    const DEFAULT_IMAGE: &str = "https://i.pravatar.cc/48";
    const ANTHONY: &str = "499476";

    fn create_test_service() -> SessionService {
        SessionService::with_id_generator(
            default_seed_friends(),
            DEFAULT_IMAGE,
            Box::new(SequentialIdGenerator::new("friend")),
        )
    }

    fn balance_of(service: &SessionService, id: &str) -> f64 {
        service.registry().get(id).unwrap().balance
    }

    fn split(service: &mut SessionService, bill: f64, expense: f64, payer: Payer) {
        service.dispatch(AppAction::FriendSelected(ANTHONY.to_string())).unwrap();
        service
            .dispatch(AppAction::SplitBillFieldChanged(SplitBillField::BillTotal(bill)))
            .unwrap();
        service
            .dispatch(AppAction::SplitBillFieldChanged(SplitBillField::UserExpense(expense)))
            .unwrap();
        service
            .dispatch(AppAction::SplitBillFieldChanged(SplitBillField::Payer(payer)))
            .unwrap();
    }

    #[test]
    fn test_friend_paid_decreases_balance() {
        let mut service = create_test_service();
        split(&mut service, 100.0, 40.0, Payer::Friend);

        let outcome = service.dispatch(AppAction::SplitBillSubmitted).unwrap();
        assert_eq!(
            outcome,
            ActionOutcome::BillSplit {
                friend_id: ANTHONY.to_string(),
                delta: -40.0,
                new_balance: -40.0,
            }
        );
        assert_eq!(balance_of(&service, ANTHONY), -40.0);
    }

    #[test]
    fn test_user_paid_increases_balance() {
        let mut service = create_test_service();
        split(&mut service, 100.0, 40.0, Payer::User);

        assert_eq!(service.snapshot().split_bill.unwrap().friend_expense, 60.0);
        service.dispatch(AppAction::SplitBillSubmitted).unwrap();
        assert_eq!(balance_of(&service, ANTHONY), 60.0);
    }

    #[test]
    fn test_split_submit_clears_selection() {
        let mut service = create_test_service();
        split(&mut service, 30.0, 10.0, Payer::User);
        service.dispatch(AppAction::SplitBillSubmitted).unwrap();

        let snapshot = service.snapshot();
        assert_eq!(snapshot.selected_friend_id, None);
        assert_eq!(snapshot.split_bill, None);
    }

    #[test]
    fn test_split_with_zero_bill_is_accepted() {
        let mut service = create_test_service();
        service.dispatch(AppAction::FriendSelected(ANTHONY.to_string())).unwrap();

        let outcome = service.dispatch(AppAction::SplitBillSubmitted).unwrap();
        assert!(matches!(outcome, ActionOutcome::BillSplit { delta, .. } if delta == 0.0));
        assert_eq!(balance_of(&service, ANTHONY), 0.0);
    }

    #[test]
    fn test_expense_above_bill_keeps_previous_value() {
        let mut service = create_test_service();
        split(&mut service, 100.0, 40.0, Payer::User);

        let result = service.dispatch(AppAction::SplitBillFieldChanged(
            SplitBillField::UserExpense(150.0),
        ));
        assert!(matches!(
            result,
            Err(SessionError::SplitBill(SplitBillError::ExpenseExceedsBill { .. }))
        ));
        assert!(result.unwrap_err().is_user_input());
        assert_eq!(service.snapshot().split_bill.unwrap().user_expense, 40.0);
    }

    #[test]
    fn test_add_friend_appends_settled_friend() {
        let mut service = create_test_service();
        service.dispatch(AppAction::AddFriendRequested).unwrap();
        service
            .dispatch(AppAction::AddFriendFieldChanged(AddFriendField::Name, "Bob".to_string()))
            .unwrap();
        service
            .dispatch(AppAction::AddFriendFieldChanged(
                AddFriendField::ImageUrl,
                "http://x/y".to_string(),
            ))
            .unwrap();

        let outcome = service.dispatch(AppAction::AddFriendSubmitted).unwrap();
        let added = match outcome {
            ActionOutcome::FriendAdded(friend) => friend,
            other => panic!("unexpected outcome {:?}", other),
        };
        assert_eq!(added.id, "friend-1");
        assert_eq!(added.name, "Bob");
        assert_eq!(added.image, "http://x/y?u=friend-1");
        assert_eq!(added.balance, 0.0);

        assert_eq!(service.registry().len(), 4);
        assert_eq!(service.registry().friends().last(), Some(&added));
        assert!(service.panel().is_hidden());
    }

    #[test]
    fn test_add_friend_with_empty_name_is_rejected() {
        let mut service = create_test_service();
        service.dispatch(AppAction::AddFriendRequested).unwrap();

        let result = service.dispatch(AppAction::AddFriendSubmitted);
        assert_eq!(result, Err(SessionError::AddFriend(AddFriendError::EmptyName)));
        assert_eq!(service.registry().len(), 3);
        assert!(service.panel().is_adding_friend());
    }

    #[test]
    fn test_reopened_add_friend_form_is_reset() {
        let mut service = create_test_service();
        service.dispatch(AppAction::AddFriendRequested).unwrap();
        service
            .dispatch(AppAction::AddFriendFieldChanged(AddFriendField::Name, "Half typed".to_string()))
            .unwrap();
        service.dispatch(AppAction::AddFriendRequested).unwrap();
        service.dispatch(AppAction::AddFriendRequested).unwrap();

        let form = service.snapshot().add_friend.unwrap();
        assert_eq!(form.name, "");
        assert_eq!(form.image_url, DEFAULT_IMAGE);
    }

    #[test]
    fn test_select_unknown_friend_is_rejected() {
        let mut service = create_test_service();
        let result = service.dispatch(AppAction::FriendSelected("ghost".to_string()));
        assert_eq!(result, Err(SessionError::UnknownFriend("ghost".to_string())));
        assert!(service.panel().is_hidden());
    }

    #[test]
    fn test_actions_for_closed_panels_are_rejected() {
        let mut service = create_test_service();
        assert_eq!(
            service.dispatch(AppAction::SplitBillSubmitted),
            Err(SessionError::NoActiveSplit)
        );
        assert_eq!(
            service.dispatch(AppAction::AddFriendSubmitted),
            Err(SessionError::NotAddingFriend)
        );
        assert_eq!(
            service.dispatch(AppAction::SplitBillFieldChanged(SplitBillField::BillTotal(5.0))),
            Err(SessionError::NoActiveSplit)
        );
    }

    #[test]
    fn test_snapshot_reflects_selection_and_forms() {
        let mut service = create_test_service();
        let snapshot = service.snapshot();
        assert_eq!(snapshot.friends.len(), 3);
        assert_eq!(snapshot.selected_friend_id, None);
        assert_eq!(snapshot.add_friend, None);

        service.dispatch(AppAction::FriendSelected("933372".to_string())).unwrap();
        let snapshot = service.snapshot();
        assert!(snapshot.is_selected("933372"));
        assert_eq!(snapshot.split_bill.unwrap().friend_name, "Sarah");

        service.dispatch(AppAction::PanelClosed).unwrap();
        assert_eq!(service.snapshot().selected_friend_id, None);
    }
}
