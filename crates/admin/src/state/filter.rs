//! Client-side filters over the loaded window
//!
//! Pure predicates; pagination state is never touched here.

use rosterly_domain::{Member, MemberStatus};

/// Status filter applied to the loaded window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Draft,
    Published,
}

impl StatusFilter {
    pub fn matches(self, status: MemberStatus) -> bool {
        match self {
            Self::All => true,
            Self::Draft => status == MemberStatus::Draft,
            Self::Published => status == MemberStatus::Published,
        }
    }
}

/// The members to render: status predicate plus case-insensitive substring
/// match on the full name.
pub fn visible_members<'a>(
    members: &'a [Member],
    filter: StatusFilter,
    query: &str,
) -> Vec<&'a Member> {
    let needle = query.trim().to_lowercase();
    members
        .iter()
        .filter(|m| filter.matches(m.status))
        .filter(|m| needle.is_empty() || m.full_name.to_lowercase().contains(&needle))
        .collect()
}
