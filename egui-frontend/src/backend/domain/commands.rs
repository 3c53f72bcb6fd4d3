//! Domain-level command and action types.
//!
//! The UI never mutates domain state directly: every interaction becomes an
//! `AppAction` handed to the session service, which answers with an
//! `ActionOutcome` or a typed error.

pub mod friends {
    /// Validated input for creating a new friend.
    #[derive(Debug, Clone, PartialEq)]
    pub struct CreateFriendCommand {
        pub name: String,
        pub image_url: String,
    }

    /// Balance change for one friend, produced by a committed split bill.
    #[derive(Debug, Clone, PartialEq)]
    pub struct AdjustBalanceCommand {
        pub friend_id: String,
        pub delta: f64,
    }
}

pub mod session {
    use shared::{AddFriendField, Friend, SplitBillField};

    /// Discrete user actions processed by the session, one at a time.
    #[derive(Debug, Clone, PartialEq)]
    pub enum AppAction {
        /// "Add friend" / "Close" button under the friend list
        AddFriendRequested,
        /// "Select" / "Close" button on a friend row
        FriendSelected(String),
        AddFriendFieldChanged(AddFriendField, String),
        AddFriendSubmitted,
        SplitBillFieldChanged(SplitBillField),
        SplitBillSubmitted,
        /// Close whichever panel is open
        PanelClosed,
    }

    /// What a successfully applied action did.
    #[derive(Debug, Clone, PartialEq)]
    pub enum ActionOutcome {
        /// Panel or form state changed, registry untouched
        Updated,
        FriendAdded(Friend),
        BillSplit {
            friend_id: String,
            delta: f64,
            new_balance: f64,
        },
    }
}
