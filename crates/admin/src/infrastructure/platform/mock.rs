//! In-memory platform for tests

use std::collections::HashMap;
use std::sync::RwLock;

use crate::ports::outbound::PlatformPort;

/// Platform backed by a plain HashMap; nothing touches the filesystem
#[derive(Default)]
pub struct MockPlatform {
    storage: RwLock<HashMap<String, String>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlatformPort for MockPlatform {
    fn storage_save(&self, key: &str, value: &str) {
        if let Ok(mut guard) = self.storage.write() {
            guard.insert(key.to_string(), value.to_string());
        }
    }

    fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.read().ok()?.get(key).cloned()
    }

    fn storage_remove(&self, key: &str) {
        if let Ok(mut guard) = self.storage.write() {
            guard.remove(key);
        }
    }

    fn now_millis(&self) -> u64 {
        0
    }

    fn log_info(&self, _msg: &str) {}

    fn log_warn(&self, _msg: &str) {}

    fn log_error(&self, _msg: &str) {}
}
