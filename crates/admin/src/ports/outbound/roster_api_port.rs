//! Roster API port - typed boundary to the roster backend
//!
//! Application services talk to the backend exclusively through this trait.
//! The HTTP adapter implements it against the production REST API; the
//! in-memory adapter implements it for tests and standalone runs. The trait
//! speaks domain types; wire-format conversion is the adapter's concern.

use async_trait::async_trait;
use thiserror::Error;

use rosterly_domain::{Category, CategoryId, ImageId, Member, MemberId, MemberStatus};

/// Error type for roster backend operations
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

/// One fetched page of members for a category
#[derive(Debug, Clone, PartialEq)]
pub struct MemberPage {
    pub members: Vec<Member>,
    pub total_pages: u32,
}

/// Fields of a member write (create or update); the backend owns the id
#[derive(Debug, Clone, PartialEq)]
pub struct MemberUpsert {
    pub full_name: String,
    pub description: String,
    pub photo: Option<ImageId>,
    pub status: MemberStatus,
    pub category_id: CategoryId,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterApiPort: Send + Sync {
    /// Fetch one page of members for a category.
    ///
    /// Idempotent; safe to call repeatedly with the same arguments.
    async fn fetch_members(
        &self,
        category: CategoryId,
        page: u32,
        page_size: u32,
    ) -> Result<MemberPage, ApiError>;

    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// Create a member; the backend assigns the id.
    async fn create_member(&self, upsert: MemberUpsert) -> Result<Member, ApiError>;

    async fn update_member(&self, id: MemberId, upsert: MemberUpsert) -> Result<(), ApiError>;

    async fn delete_member(&self, id: MemberId) -> Result<(), ApiError>;

    /// Persist the final member order for a category.
    async fn reorder_members(
        &self,
        category: CategoryId,
        ordered_ids: Vec<MemberId>,
    ) -> Result<(), ApiError>;

    /// Upload an image and get back a stable reference id.
    async fn upload_image(&self, filename: String, bytes: Vec<u8>) -> Result<ImageId, ApiError>;

    async fn delete_image(&self, id: ImageId) -> Result<(), ApiError>;
}
