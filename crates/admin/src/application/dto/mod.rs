//! Application DTOs - form value objects and validation
//!
//! `MemberDraft` is the live content of the edit form. The edit workflow
//! compares drafts structurally (`PartialEq`) against the snapshot taken at
//! open time, so newly added fields participate in the dirty check without
//! touching comparison logic.

use serde::{Deserialize, Serialize};

use rosterly_domain::entities::member::{validate_description, validate_full_name};
use rosterly_domain::{Category, CategoryId, ImageId, Member};

/// Live (possibly dirty) edit-form content for one member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDraft {
    pub full_name: String,
    pub description: String,
    pub category_id: CategoryId,
    pub photo: Option<ImageId>,
}

impl MemberDraft {
    /// Empty draft for the add flow, scoped to the active category.
    pub fn empty(category_id: CategoryId) -> Self {
        Self {
            full_name: String::new(),
            description: String::new(),
            category_id,
            photo: None,
        }
    }

    /// Snapshot an existing member for editing.
    pub fn from_member(member: &Member) -> Self {
        Self {
            full_name: member.full_name.clone(),
            description: member.description.clone(),
            category_id: member.category.id,
            photo: member.photo,
        }
    }
}

/// One inline form error, attached to the offending field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a draft against the domain rules.
///
/// `publishing` switches the description rule from optional to the publish
/// minimum. Errors are collected per field so the form can render them all
/// at once instead of stopping at the first.
pub fn validate_draft(draft: &MemberDraft, publishing: bool) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if let Err(e) = validate_full_name(&draft.full_name) {
        errors.push(FieldError::new("full_name", e.to_string()));
    }
    if let Err(e) = validate_description(&draft.description, publishing) {
        errors.push(FieldError::new("description", e.to_string()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Lookup helper for rendering one field's error next to its input.
pub fn error_for_field<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a FieldError> {
    errors.iter().find(|e| e.field == field)
}

/// Resolve a draft's category id against the loaded category list.
pub fn resolve_category(categories: &[Category], id: CategoryId) -> Option<&Category> {
    categories.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> MemberDraft {
        MemberDraft {
            full_name: "Ada Smith".to_string(),
            description: "a description long enough to publish".to_string(),
            category_id: CategoryId::from_i64(1),
            photo: None,
        }
    }

    #[test]
    fn test_valid_draft_passes_both_modes() {
        assert!(validate_draft(&draft(), false).is_ok());
        assert!(validate_draft(&draft(), true).is_ok());
    }

    #[test]
    fn test_empty_description_is_draft_only() {
        let mut d = draft();
        d.description.clear();
        assert!(validate_draft(&d, false).is_ok());

        let errors = validate_draft(&d, true).expect_err("publish must require description");
        assert!(error_for_field(&errors, "description").is_some());
        assert!(error_for_field(&errors, "full_name").is_none());
    }

    #[test]
    fn test_errors_collected_per_field() {
        let mut d = draft();
        d.full_name = "1".to_string();
        d.description = "x".repeat(201);

        let errors = validate_draft(&d, false).expect_err("both fields invalid");
        assert_eq!(errors.len(), 2);
        assert!(error_for_field(&errors, "full_name").is_some());
        assert!(error_for_field(&errors, "description").is_some());
    }

    #[test]
    fn test_draft_equality_is_structural() {
        let a = draft();
        let mut b = a.clone();
        assert_eq!(a, b);

        b.photo = Some(ImageId::from_i64(9));
        assert_ne!(a, b);
    }
}
