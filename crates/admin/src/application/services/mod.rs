//! Application services for the roster back-office

pub mod category_service;
pub mod image_service;
pub mod roster_service;

pub use category_service::CategoryService;
pub use image_service::ImageService;
pub use roster_service::RosterService;
