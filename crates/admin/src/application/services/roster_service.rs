//! Roster Service - Application service for member persistence
//!
//! Use case implementations for paging, creating, updating, deleting, and
//! reordering members. Validation runs before any network call; the service
//! depends only on the `RosterApiPort`, not concrete adapters.

use std::sync::Arc;

use rosterly_domain::{CategoryId, Member, MemberId, MemberStatus};

use crate::application::dto::{validate_draft, MemberDraft};
use crate::application::error::ServiceError;
use crate::ports::outbound::{MemberPage, MemberUpsert, RosterApiPort};

/// Roster service for member persistence
#[derive(Clone)]
pub struct RosterService {
    api: Arc<dyn RosterApiPort>,
}

impl RosterService {
    pub fn new(api: Arc<dyn RosterApiPort>) -> Self {
        Self { api }
    }

    /// Fetch one page of members for a category.
    pub async fn fetch_page(
        &self,
        category: CategoryId,
        page: u32,
        page_size: u32,
    ) -> Result<MemberPage, ServiceError> {
        let page = self.api.fetch_members(category, page, page_size).await?;
        Ok(page)
    }

    /// Create a member from the current draft.
    ///
    /// The backend assigns the id; the returned member is ready for the
    /// store's upsert. Validation blocks the call entirely when the draft
    /// does not satisfy the rules for the requested status.
    pub async fn create_member(
        &self,
        draft: &MemberDraft,
        status: MemberStatus,
    ) -> Result<Member, ServiceError> {
        validate_draft(draft, status.is_published()).map_err(ServiceError::Validation)?;
        let member = self.api.create_member(upsert_from(draft, status)).await?;
        Ok(member)
    }

    /// Update an existing member in place.
    pub async fn update_member(
        &self,
        id: MemberId,
        draft: &MemberDraft,
        status: MemberStatus,
    ) -> Result<(), ServiceError> {
        validate_draft(draft, status.is_published()).map_err(ServiceError::Validation)?;
        self.api.update_member(id, upsert_from(draft, status)).await?;
        Ok(())
    }

    /// Delete a member by id.
    ///
    /// Callers remove the member from the window before this resolves
    /// (optimistic); a failure is propagated, not rolled back here.
    pub async fn delete_member(&self, id: MemberId) -> Result<(), ServiceError> {
        self.api.delete_member(id).await?;
        Ok(())
    }

    /// Persist the final member order after local drag-drop settles.
    pub async fn commit_reorder(
        &self,
        category: CategoryId,
        ordered_ids: Vec<MemberId>,
    ) -> Result<(), ServiceError> {
        self.api.reorder_members(category, ordered_ids).await?;
        Ok(())
    }
}

fn upsert_from(draft: &MemberDraft, status: MemberStatus) -> MemberUpsert {
    MemberUpsert {
        full_name: draft.full_name.trim().to_string(),
        description: draft.description.trim().to_string(),
        photo: draft.photo,
        status,
        category_id: draft.category_id,
    }
}
