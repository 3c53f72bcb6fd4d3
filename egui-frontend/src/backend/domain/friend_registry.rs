//! Friend registry for the Eat-N-Split app.
//!
//! Holds the ordered list of friends and their running balances. Friends are
//! only ever appended; there is no removal and no renaming. Balances change
//! only through `adjust_balance`, which the session calls when a split bill
//! is committed.

use log::{debug, info};
use shared::Friend;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FriendRegistryError {
    #[error("No friend with id {0}")]
    FriendNotFound(String),
}

/// Ordered collection of friends, insertion order preserved
#[derive(Debug, Clone, Default)]
pub struct FriendRegistry {
    friends: Vec<Friend>,
}

impl FriendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the given friends
    pub fn with_friends(friends: Vec<Friend>) -> Self {
        info!("Seeding friend registry with {} friends", friends.len());
        Self { friends }
    }

    /// Append a friend. The caller is responsible for supplying a fresh id.
    pub fn add(&mut self, friend: Friend) {
        info!("Adding friend {} ({})", friend.name, friend.id);
        self.friends.push(friend);
    }

    /// Add `delta` to the balance of the friend with the given id.
    /// The stored balance is rounded to whole cents. Returns the new balance.
    pub fn adjust_balance(&mut self, id: &str, delta: f64) -> Result<f64, FriendRegistryError> {
        let friend = self
            .friends
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| FriendRegistryError::FriendNotFound(id.to_string()))?;

        friend.balance = round_to_cents(friend.balance + delta);
        debug!(
            "Adjusted balance of {} by {:.2}, new balance {:.2}",
            friend.name, delta, friend.balance
        );
        Ok(friend.balance)
    }

    pub fn get(&self, id: &str) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All friends in insertion order
    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}

fn round_to_cents(amount: f64) -> f64 {
    let rounded = (amount * 100.0).round() / 100.0;
    // avoid storing -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::config::default_seed_friends;

    fn create_test_registry() -> FriendRegistry {
        FriendRegistry::with_friends(default_seed_friends())
    }

    fn friend(id: &str, name: &str) -> Friend {
        Friend {
            id: id.to_string(),
            name: name.to_string(),
            image: format!("http://img/{}", id),
            balance: 0.0,
        }
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut registry = create_test_registry();
        registry.add(friend("x1", "Bob"));
        registry.add(friend("x2", "Eve"));

        let names: Vec<&str> = registry.friends().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Clark", "Sarah", "Anthony", "Bob", "Eve"]);
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_adjust_balance() {
        let mut registry = create_test_registry();

        let new_balance = registry.adjust_balance("118836", 10.0).unwrap();
        assert_eq!(new_balance, 3.0);
        assert_eq!(registry.get("118836").unwrap().balance, 3.0);

        registry.adjust_balance("118836", -5.5).unwrap();
        assert_eq!(registry.get("118836").unwrap().balance, -2.5);
    }

    #[test]
    fn test_adjustments_that_cancel_leave_exactly_zero() {
        let mut registry = create_test_registry();

        // 0.3 - 0.1 and 0.4 - 0.2 are not exact in binary floating point
        registry.adjust_balance("499476", 0.3 - 0.1).unwrap();
        assert_eq!(registry.get("499476").unwrap().balance, 0.2);

        let new_balance = registry.adjust_balance("499476", -0.2).unwrap();
        assert_eq!(new_balance, 0.0);
        assert!(new_balance.is_sign_positive());
    }

    #[test]
    fn test_adjust_balance_only_touches_target() {
        let mut registry = create_test_registry();
        registry.adjust_balance("499476", 60.0).unwrap();

        assert_eq!(registry.get("118836").unwrap().balance, -7.0);
        assert_eq!(registry.get("933372").unwrap().balance, 20.0);
        assert_eq!(registry.get("499476").unwrap().balance, 60.0);
    }

    #[test]
    fn test_adjust_balance_missing_friend() {
        let mut registry = create_test_registry();
        let before = registry.friends().to_vec();

        let result = registry.adjust_balance("nope", 5.0);
        assert_eq!(result, Err(FriendRegistryError::FriendNotFound("nope".to_string())));
        assert_eq!(registry.friends(), before.as_slice());
    }

    #[test]
    fn test_empty_registry() {
        let registry = FriendRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains("118836"));
    }
}
