//! Rosterly Shared - Wire-format contracts for the roster REST API
//!
//! This crate contains the types exchanged between the admin client and the
//! roster backend:
//! - Response DTOs (members, pages, categories, image references)
//! - Request DTOs (create, update, reorder)
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and serde_json
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Raw ids** - DTOs carry raw `i64` ids; typed ids live in the domain
//!    crate and conversions happen at the adapter/service boundary

pub mod requests;
pub mod responses;

pub use requests::{CreateMemberRequest, ReorderMembersRequest, UpdateMemberRequest};
pub use responses::{CategoryData, ImageData, MemberData, MemberPageData, MemberStatusData};
