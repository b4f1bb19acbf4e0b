//! Infrastructure adapters for the admin client

pub mod http_client;
pub mod memory;
pub mod platform;

pub use http_client::HttpRosterApi;
pub use memory::InMemoryRosterApi;

/// Spawn a future on the Dioxus runtime.
///
/// Thin wrapper so presentation code doesn't reach into the runtime
/// directly; must be called from component scope.
pub fn spawn_task<F>(fut: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    let _ = dioxus::prelude::spawn(fut);
}
