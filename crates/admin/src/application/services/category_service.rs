//! Category Service - category list plus last-selected tab persistence
//!
//! The roster reopens on the tab the admin last had selected. The selection
//! is written through `PlatformPort` storage on every change and read once
//! when the roster page mounts.

use std::sync::Arc;

use rosterly_domain::{Category, CategoryId};

use crate::application::error::ServiceError;
use crate::ports::outbound::{storage_keys, PlatformPort, RosterApiPort};

/// Category service for the roster tabs
#[derive(Clone)]
pub struct CategoryService {
    api: Arc<dyn RosterApiPort>,
    platform: Arc<dyn PlatformPort>,
}

impl CategoryService {
    pub fn new(api: Arc<dyn RosterApiPort>, platform: Arc<dyn PlatformPort>) -> Self {
        Self { api, platform }
    }

    /// Fetch the fixed category set from the backend.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
        let categories = self.api.fetch_categories().await?;
        Ok(categories)
    }

    /// Persist the active tab so the roster reopens on it.
    pub fn remember_selection(&self, category: CategoryId) {
        self.platform
            .storage_save(storage_keys::LAST_CATEGORY, &category.as_i64().to_string());
    }

    /// Last persisted tab, if any. A value that no longer parses (stale or
    /// hand-edited storage) is treated as absent.
    pub fn last_selection(&self) -> Option<CategoryId> {
        self.platform
            .storage_load(storage_keys::LAST_CATEGORY)?
            .parse::<i64>()
            .ok()
            .map(CategoryId::from_i64)
    }

    /// Pick the tab to open: the remembered one when it still exists,
    /// otherwise the first category.
    pub fn initial_selection(&self, categories: &[Category]) -> Option<CategoryId> {
        if let Some(last) = self.last_selection() {
            if categories.iter().any(|c| c.id == last) {
                return Some(last);
            }
        }
        categories.first().map(|c| c.id)
    }
}
