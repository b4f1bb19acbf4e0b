//! Roster entities

pub mod category;
pub mod member;

pub use category::Category;
pub use member::{
    validate_description, validate_full_name, Member, MemberStatus, DESCRIPTION_MAX_CHARS,
    FULL_NAME_MAX_CHARS, FULL_NAME_MIN_CHARS, PUBLISH_DESCRIPTION_MIN_CHARS,
};
