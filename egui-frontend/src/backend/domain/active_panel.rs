//! # Active Panel
//!
//! Tracks which side panel is open: nothing, the add-friend form, or the
//! split-bill form for one selected friend. A single variant replaces separate
//! "show add friend" and "selected friend" flags, so both can never be open at
//! once. Each form's draft lives inside its variant and is discarded when the
//! panel changes.

use log::debug;

use super::add_friend::AddFriendDraft;
use super::split_bill::SplitBillDraft;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActivePanel {
    #[default]
    Hidden,
    AddingFriend(AddFriendDraft),
    Splitting {
        /// Weak reference into the friend registry
        friend_id: String,
        draft: SplitBillDraft,
    },
}

impl ActivePanel {
    /// Select a friend for splitting, or clear the selection when that friend
    /// is already selected. Closes the add-friend form either way.
    pub fn toggle_friend(&mut self, friend_id: &str) {
        if self.selected_friend_id() == Some(friend_id) {
            debug!("Deselecting friend {}", friend_id);
            *self = ActivePanel::Hidden;
        } else {
            debug!("Selecting friend {}", friend_id);
            *self = ActivePanel::Splitting {
                friend_id: friend_id.to_string(),
                draft: SplitBillDraft::new(),
            };
        }
    }

    /// Open the add-friend form, or close it when already open.
    /// Opening clears any friend selection.
    pub fn toggle_add_friend(&mut self, default_image_url: &str) {
        if self.is_adding_friend() {
            *self = ActivePanel::Hidden;
        } else {
            *self = ActivePanel::AddingFriend(AddFriendDraft::new(default_image_url));
        }
    }

    pub fn close(&mut self) {
        *self = ActivePanel::Hidden;
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, ActivePanel::Hidden)
    }

    pub fn is_adding_friend(&self) -> bool {
        matches!(self, ActivePanel::AddingFriend(_))
    }

    pub fn selected_friend_id(&self) -> Option<&str> {
        match self {
            ActivePanel::Splitting { friend_id, .. } => Some(friend_id.as_str()),
            _ => None,
        }
    }

    pub fn add_friend_draft(&self) -> Option<&AddFriendDraft> {
        match self {
            ActivePanel::AddingFriend(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn add_friend_draft_mut(&mut self) -> Option<&mut AddFriendDraft> {
        match self {
            ActivePanel::AddingFriend(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn split_bill_draft(&self) -> Option<&SplitBillDraft> {
        match self {
            ActivePanel::Splitting { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn split_bill_draft_mut(&mut self) -> Option<&mut SplitBillDraft> {
        match self {
            ActivePanel::Splitting { draft, .. } => Some(draft),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_IMAGE: &str = "https://i.pravatar.cc/48";

    #[test]
    fn test_starts_hidden() {
        let panel = ActivePanel::default();
        assert!(panel.is_hidden());
        assert_eq!(panel.selected_friend_id(), None);
    }

    #[test]
    fn test_toggle_same_friend_twice_clears_selection() {
        let mut panel = ActivePanel::default();
        panel.toggle_friend("499476");
        assert_eq!(panel.selected_friend_id(), Some("499476"));

        panel.toggle_friend("499476");
        assert!(panel.is_hidden());
    }

    #[test]
    fn test_toggle_other_friend_switches_selection_with_fresh_draft() {
        let mut panel = ActivePanel::default();
        panel.toggle_friend("118836");
        panel.split_bill_draft_mut().unwrap().set_bill_total(50.0).unwrap();

        panel.toggle_friend("933372");
        assert_eq!(panel.selected_friend_id(), Some("933372"));
        assert_eq!(panel.split_bill_draft().unwrap().bill_total(), 0.0);
    }

    #[test]
    fn test_selecting_friend_closes_add_friend_form() {
        let mut panel = ActivePanel::default();
        panel.toggle_add_friend(DEFAULT_IMAGE);
        assert!(panel.is_adding_friend());

        panel.toggle_friend("118836");
        assert!(!panel.is_adding_friend());
        assert_eq!(panel.selected_friend_id(), Some("118836"));
    }

    #[test]
    fn test_opening_add_friend_clears_selection() {
        let mut panel = ActivePanel::default();
        panel.toggle_friend("118836");

        panel.toggle_add_friend(DEFAULT_IMAGE);
        assert!(panel.is_adding_friend());
        assert_eq!(panel.selected_friend_id(), None);
        assert_eq!(panel.add_friend_draft().unwrap().image_url, DEFAULT_IMAGE);
    }

    #[test]
    fn test_toggle_add_friend_twice_hides() {
        let mut panel = ActivePanel::default();
        panel.toggle_add_friend(DEFAULT_IMAGE);
        panel.toggle_add_friend(DEFAULT_IMAGE);
        assert!(panel.is_hidden());
    }

    #[test]
    fn test_close() {
        let mut panel = ActivePanel::default();
        panel.toggle_friend("118836");
        panel.close();
        assert!(panel.is_hidden());
        assert!(panel.split_bill_draft().is_none());
    }
}
