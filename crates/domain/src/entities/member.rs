//! Member entity - One team roster entry
//!
//! A member is always attached to a category and carries one of two
//! visibility states: `Draft` (back-office only) or `Published` (visible on
//! the public site). Drafts accept an empty description; publishing demands
//! a substantive one.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{ImageId, MemberId};

use super::Category;

pub const FULL_NAME_MIN_CHARS: usize = 2;
pub const FULL_NAME_MAX_CHARS: usize = 50;
pub const DESCRIPTION_MAX_CHARS: usize = 200;
/// Publishing requires a description of at least this many characters.
pub const PUBLISH_DESCRIPTION_MIN_CHARS: usize = 20;

/// Visibility state of a roster member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberStatus {
    Draft,
    Published,
}

impl MemberStatus {
    pub fn is_published(self) -> bool {
        matches!(self, Self::Published)
    }
}

/// One roster entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub full_name: String,
    pub description: String,
    /// Reference to a previously uploaded photo, if any
    pub photo: Option<ImageId>,
    pub status: MemberStatus,
    pub category: Category,
}

impl Member {
    /// Transition between visibility states.
    ///
    /// `Draft` and `Published` are the only states and both directions are
    /// allowed; publishing additionally enforces the description minimum.
    pub fn transition_to(&mut self, status: MemberStatus) -> Result<(), DomainError> {
        if status == MemberStatus::Published {
            validate_description(&self.description, true)?;
        }
        self.status = status;
        Ok(())
    }
}

/// Validate a member's display name.
///
/// 2-50 characters; letters, hyphens, apostrophes, and spaces only.
pub fn validate_full_name(full_name: &str) -> Result<(), DomainError> {
    let trimmed = full_name.trim();
    let len = trimmed.chars().count();
    if len < FULL_NAME_MIN_CHARS || len > FULL_NAME_MAX_CHARS {
        return Err(DomainError::validation(format!(
            "Full name must be {FULL_NAME_MIN_CHARS}-{FULL_NAME_MAX_CHARS} characters"
        )));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_alphabetic() || c == '-' || c == '\'' || c == ' ')
    {
        return Err(DomainError::validation(
            "Full name may only contain letters, hyphens, apostrophes, and spaces",
        ));
    }
    Ok(())
}

/// Validate a member's description.
///
/// Drafts may leave it empty; publishing requires at least
/// [`PUBLISH_DESCRIPTION_MIN_CHARS`]. Both paths cap at
/// [`DESCRIPTION_MAX_CHARS`].
pub fn validate_description(description: &str, publishing: bool) -> Result<(), DomainError> {
    let len = description.trim().chars().count();
    if len > DESCRIPTION_MAX_CHARS {
        return Err(DomainError::validation(format!(
            "Description must be at most {DESCRIPTION_MAX_CHARS} characters"
        )));
    }
    if publishing && len < PUBLISH_DESCRIPTION_MIN_CHARS {
        return Err(DomainError::validation(format!(
            "Description must be at least {PUBLISH_DESCRIPTION_MIN_CHARS} characters to publish"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CategoryId;

    fn member(status: MemberStatus, description: &str) -> Member {
        Member {
            id: MemberId::from_i64(1),
            full_name: "Ada O'Neil-Smith".to_string(),
            description: description.to_string(),
            photo: None,
            status,
            category: Category::new(CategoryId::from_i64(1), "Core Team"),
        }
    }

    #[test]
    fn test_full_name_accepts_letters_hyphens_apostrophes_spaces() {
        assert!(validate_full_name("Ada O'Neil-Smith").is_ok());
    }

    #[test]
    fn test_full_name_rejects_digits_and_symbols() {
        assert!(validate_full_name("Ada2").is_err());
        assert!(validate_full_name("Ada_Smith").is_err());
    }

    #[test]
    fn test_full_name_length_bounds() {
        assert!(validate_full_name("A").is_err());
        assert!(validate_full_name(&"a".repeat(50)).is_ok());
        assert!(validate_full_name(&"a".repeat(51)).is_err());
    }

    #[test]
    fn test_description_optional_for_draft() {
        assert!(validate_description("", false).is_ok());
    }

    #[test]
    fn test_description_minimum_for_publish() {
        assert!(validate_description("too short", true).is_err());
        assert!(validate_description("a description long enough to publish", true).is_ok());
    }

    #[test]
    fn test_description_maximum() {
        assert!(validate_description(&"a".repeat(201), false).is_err());
    }

    #[test]
    fn test_publish_transition_enforces_description() {
        let mut m = member(MemberStatus::Draft, "short");
        assert!(m.transition_to(MemberStatus::Published).is_err());
        assert_eq!(m.status, MemberStatus::Draft);

        m.description = "a description long enough to publish".to_string();
        assert!(m.transition_to(MemberStatus::Published).is_ok());
        assert_eq!(m.status, MemberStatus::Published);
    }

    #[test]
    fn test_unpublish_transition_always_allowed() {
        let mut m = member(MemberStatus::Published, "");
        assert!(m.transition_to(MemberStatus::Draft).is_ok());
        assert_eq!(m.status, MemberStatus::Draft);
    }
}
