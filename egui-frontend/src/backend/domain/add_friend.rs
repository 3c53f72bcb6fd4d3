//! Add-friend workflow for the Eat-N-Split app.
//!
//! The form collects a name and an avatar URL. A submission is only accepted
//! when both are present; the new friend starts settled (balance 0) and gets
//! its generated id appended to the avatar URL, so two friends sharing a base
//! URL still get distinct avatars.

use shared::{AddFriendField, AddFriendSnapshot, Friend};

use super::commands::friends::CreateFriendCommand;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AddFriendError {
    #[error("Name is required")]
    EmptyName,
    #[error("Image URL is required")]
    EmptyImageUrl,
}

/// Form state for the add-friend panel
#[derive(Debug, Clone, PartialEq)]
pub struct AddFriendDraft {
    pub name: String,
    pub image_url: String,
}

impl AddFriendDraft {
    /// Empty name, image pre-filled with the default avatar URL
    pub fn new(default_image_url: &str) -> Self {
        Self {
            name: String::new(),
            image_url: default_image_url.to_string(),
        }
    }

    pub fn set_field(&mut self, field: AddFriendField, value: String) {
        match field {
            AddFriendField::Name => self.name = value,
            AddFriendField::ImageUrl => self.image_url = value,
        }
    }

    /// Check presence of both fields and build the command to commit
    pub fn validate(&self) -> Result<CreateFriendCommand, AddFriendError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AddFriendError::EmptyName);
        }

        let image_url = self.image_url.trim();
        if image_url.is_empty() {
            return Err(AddFriendError::EmptyImageUrl);
        }

        Ok(CreateFriendCommand {
            name: name.to_string(),
            image_url: image_url.to_string(),
        })
    }

    pub fn to_snapshot(&self) -> AddFriendSnapshot {
        AddFriendSnapshot {
            name: self.name.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Build a settled friend from a validated command and a fresh id
pub fn create_friend(command: CreateFriendCommand, id: String) -> Friend {
    let image = image_with_discriminator(&command.image_url, &id);
    Friend {
        id,
        name: command.name,
        image,
        balance: 0.0,
    }
}

/// Append `u=<id>` as a query parameter to the avatar URL
pub fn image_with_discriminator(image_url: &str, id: &str) -> String {
    let separator = if image_url.contains('?') { '&' } else { '?' };
    format!("{}{}u={}", image_url, separator, id)
}
