use serde::{Deserialize, Serialize};
use std::fmt;

/// A friend the user shares expenses with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    /// Opaque identifier, unique within a session
    pub id: String,
    pub name: String,
    /// Avatar reference (URL or any text)
    pub image: String,
    /// Net amount between the user and this friend.
    /// Negative: the user owes the friend. Positive: the friend owes the user.
    pub balance: f64,
}

impl Friend {
    /// Classify the balance by its sign
    pub fn balance_status(&self) -> BalanceStatus {
        BalanceStatus::from_balance(self.balance)
    }

    /// Human readable summary of the balance, e.g. "You owe Clark $7."
    pub fn balance_message(&self) -> String {
        match self.balance_status() {
            BalanceStatus::YouOwe(amount) => {
                format!("You owe {} ${}.", self.name, format_amount(amount))
            }
            BalanceStatus::OwesYou(amount) => {
                format!("{} owes you ${}.", self.name, format_amount(amount))
            }
            BalanceStatus::Even => format!("You and {} are even.", self.name),
        }
    }
}

/// Sign of a friend's balance, carrying the absolute amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BalanceStatus {
    /// The user owes the friend this amount
    YouOwe(f64),
    /// The friend owes the user this amount
    OwesYou(f64),
    /// Settled
    Even,
}

/// Balances closer to zero than half a cent count as settled
pub const EVEN_THRESHOLD: f64 = 0.005;

impl BalanceStatus {
    pub fn from_balance(balance: f64) -> Self {
        if balance <= -EVEN_THRESHOLD {
            BalanceStatus::YouOwe(balance.abs())
        } else if balance >= EVEN_THRESHOLD {
            BalanceStatus::OwesYou(balance)
        } else {
            BalanceStatus::Even
        }
    }
}

/// Plain number display: whole amounts without decimals, otherwise two places.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

/// Who paid the bill being split
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Payer {
    #[default]
    User,
    Friend,
}

impl fmt::Display for Payer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Payer::User => write!(f, "user"),
            Payer::Friend => write!(f, "friend"),
        }
    }
}

/// A single edit to the split-bill form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SplitBillField {
    BillTotal(f64),
    UserExpense(f64),
    Payer(Payer),
}

/// Text fields of the add-friend form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddFriendField {
    Name,
    ImageUrl,
}

/// Read-only view of the add-friend form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddFriendSnapshot {
    pub name: String,
    pub image_url: String,
}

/// Read-only view of the split-bill form for the selected friend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitBillSnapshot {
    pub friend_id: String,
    pub friend_name: String,
    pub bill_total: f64,
    pub user_expense: f64,
    /// Derived: bill_total - user_expense when both are nonzero, else 0
    pub friend_expense: f64,
    pub payer: Payer,
}

/// Everything the presentation layer needs to render one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Friends in insertion order
    pub friends: Vec<Friend>,
    pub selected_friend_id: Option<String>,
    /// Present while the add-friend form is open
    pub add_friend: Option<AddFriendSnapshot>,
    /// Present while a friend is selected
    pub split_bill: Option<SplitBillSnapshot>,
}

impl SessionSnapshot {
    pub fn is_selected(&self, friend_id: &str) -> bool {
        self.selected_friend_id.as_deref() == Some(friend_id)
    }
}
