pub mod components;
pub mod services;

pub use services::Services;
