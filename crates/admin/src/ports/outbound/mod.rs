//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must
//! implement, allowing application services to interact with the roster
//! backend and the host platform without depending on concrete
//! implementations.

pub mod platform_port;
pub mod roster_api_port;

pub use platform_port::{storage_keys, PlatformPort};
pub use roster_api_port::{ApiError, MemberPage, MemberUpsert, RosterApiPort};

#[cfg(test)]
pub use roster_api_port::MockRosterApiPort;
