//! PlatformPort - host platform services needed by the UI layer
//!
//! Abstracts persistent key-value storage (last-selected tab), time, and
//! logging so presentation code stays free of platform details. The desktop
//! implementation lives in `infrastructure::platform`.
//!
//! Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`

/// Well-known storage keys
pub mod storage_keys {
    /// Last category tab the admin had open; restored on mount
    pub const LAST_CATEGORY: &str = "rosterly_last_category";
}

/// Unified platform services port
pub trait PlatformPort: Send + Sync {
    // -------------------------------------------------------------------------
    // Storage operations
    // -------------------------------------------------------------------------

    /// Save a string value with the given key
    fn storage_save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn storage_load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn storage_remove(&self, key: &str);

    // -------------------------------------------------------------------------
    // Time operations
    // -------------------------------------------------------------------------

    /// Current time in milliseconds since epoch
    fn now_millis(&self) -> u64;

    // -------------------------------------------------------------------------
    // Logging operations
    // -------------------------------------------------------------------------

    /// Log an info message
    fn log_info(&self, msg: &str);

    /// Log a warning message
    fn log_warn(&self, msg: &str);

    /// Log an error message
    fn log_error(&self, msg: &str);
}
