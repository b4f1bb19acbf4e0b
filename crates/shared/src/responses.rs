//! Response DTOs returned by the roster backend

use serde::{Deserialize, Serialize};

/// Wire form of a member's visibility state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatusData {
    Draft,
    Published,
}

/// One roster member as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberData {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub photo_id: Option<i64>,
    pub status: MemberStatusData,
    pub category: CategoryData,
}

/// One page of members for a category
///
/// `total_pages` is computed by the backend for the requested page size and
/// category; it is taken from the first page of a freshly reset window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberPageData {
    pub members: Vec<MemberData>,
    pub total_pages: u32,
}

/// Category as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryData {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Stable reference to an uploaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    pub id: i64,
}
