//! Service providers for the presentation layer
//!
//! Dioxus context providers for application services. Components use
//! `use_context` to access services without depending on infrastructure
//! implementations.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::application::services::{CategoryService, ImageService, RosterService};
use crate::ports::outbound::{PlatformPort, RosterApiPort};

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub roster: Arc<RosterService>,
    pub category: Arc<CategoryService>,
    pub image: Arc<ImageService>,
}

impl Services {
    /// Create all services with the given ports
    pub fn new(api: Arc<dyn RosterApiPort>, platform: Arc<dyn PlatformPort>) -> Self {
        Self {
            roster: Arc::new(RosterService::new(api.clone())),
            category: Arc::new(CategoryService::new(api.clone(), platform)),
            image: Arc::new(ImageService::new(api)),
        }
    }
}

/// Hook to access the RosterService from context
pub fn use_roster_service() -> Arc<RosterService> {
    let services = use_context::<Services>();
    services.roster.clone()
}

/// Hook to access the CategoryService from context
pub fn use_category_service() -> Arc<CategoryService> {
    let services = use_context::<Services>();
    services.category.clone()
}

/// Hook to access the ImageService from context
pub fn use_image_service() -> Arc<ImageService> {
    let services = use_context::<Services>();
    services.image.clone()
}

/// Hook to access the shared PlatformPort from context
pub fn use_platform() -> Arc<dyn PlatformPort> {
    use_context::<Arc<dyn PlatformPort>>()
}
