//! Request DTOs sent to the roster backend

use serde::{Deserialize, Serialize};

use crate::responses::MemberStatusData;

/// Create a new member (the backend assigns the id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMemberRequest {
    pub full_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_id: Option<i64>,
    pub status: MemberStatusData,
    pub category_id: i64,
}

/// Update an existing member in place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMemberRequest {
    pub full_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_id: Option<i64>,
    pub status: MemberStatusData,
    pub category_id: i64,
}

/// Persist the final member order for a category after a drag-drop settles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderMembersRequest {
    pub category_id: i64,
    pub ordered_ids: Vec<i64>,
}
