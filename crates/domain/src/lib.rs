pub mod entities;
pub mod error;
pub mod ids;

pub use entities::{Category, Member, MemberStatus};
pub use error::DomainError;
pub use ids::{CategoryId, ImageId, MemberId};
