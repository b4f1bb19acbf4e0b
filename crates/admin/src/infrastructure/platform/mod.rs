//! Platform-specific implementations of `PlatformPort`
//!
//! The admin client is a desktop app; `mock` provides an in-memory platform
//! for tests.

mod desktop;
pub mod mock;

pub use desktop::{create_platform, DesktopPlatform};
