//! Category entity - Roster classification tag
//!
//! Categories form a fixed small set served by the backend (e.g. "Core Team",
//! "Advisory Board"). The admin client never creates or deletes them; it only
//! selects one as the active roster tab.

use serde::{Deserialize, Serialize};

use crate::ids::CategoryId;

/// Classification tag a member belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Optional blurb shown on the public site
    pub description: Option<String>,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
