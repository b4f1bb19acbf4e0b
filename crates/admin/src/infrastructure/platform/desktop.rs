//! Desktop platform adapter
//!
//! Key-value storage lands in a JSON file under the platform config dir
//! (for example `~/.config/rosterly/admin/storage.json` on Linux). Writes
//! go through a temp file and rename so a crash mid-write never corrupts
//! the stored selection.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

use directories::ProjectDirs;

use crate::ports::outbound::PlatformPort;

const STORAGE_FILE: &str = "storage.json";

/// File-backed string map shared by all clones of the platform.
struct KvFile {
    path: PathBuf,
    values: RwLock<HashMap<String, String>>,
}

impl KvFile {
    fn open(path: PathBuf) -> Self {
        let values = Self::load(&path);
        tracing::debug!(path = %path.display(), entries = values.len(), "kv storage opened");
        Self {
            path,
            values: RwLock::new(values),
        }
    }

    fn load(path: &Path) -> HashMap<String, String> {
        let Ok(raw) = std::fs::read_to_string(path) else {
            return HashMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "discarding unreadable kv file");
            HashMap::new()
        })
    }

    fn mutate(&self, f: impl FnOnce(&mut HashMap<String, String>)) {
        let snapshot = {
            let Ok(mut values) = self.values.write() else {
                tracing::error!("kv storage lock poisoned, dropping write");
                return;
            };
            f(&mut values);
            values.clone()
        };
        if let Err(e) = self.flush(&snapshot) {
            tracing::error!(path = %self.path.display(), error = %e, "kv flush failed");
        }
    }

    fn flush(&self, values: &HashMap<String, String>) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(values)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, data)?;
        std::fs::rename(&tmp, &self.path)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }
}

/// Desktop `PlatformPort` over [`KvFile`] storage and tracing logging.
#[derive(Clone)]
pub struct DesktopPlatform {
    kv: Arc<KvFile>,
}

impl DesktopPlatform {
    pub fn new() -> Self {
        let path = ProjectDirs::from("io", "rosterly", "admin")
            .map(|dirs| dirs.config_dir().join(STORAGE_FILE))
            .unwrap_or_else(|| PathBuf::from(STORAGE_FILE));
        Self {
            kv: Arc::new(KvFile::open(path)),
        }
    }
}

impl Default for DesktopPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformPort for DesktopPlatform {
    fn storage_save(&self, key: &str, value: &str) {
        self.kv
            .mutate(|values| {
                values.insert(key.to_string(), value.to_string());
            });
    }

    fn storage_load(&self, key: &str) -> Option<String> {
        self.kv.get(key)
    }

    fn storage_remove(&self, key: &str) {
        self.kv.mutate(|values| {
            values.remove(key);
        });
    }

    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    fn log_info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn log_warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    fn log_error(&self, msg: &str) {
        tracing::error!("{msg}");
    }
}

/// Create the desktop platform.
pub fn create_platform() -> DesktopPlatform {
    DesktopPlatform::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test gets its own scoped dir so nothing touches the real
    // config dir.
    fn kv_in(dir: &tempfile::TempDir) -> KvFile {
        KvFile::open(dir.path().join(STORAGE_FILE))
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        {
            let kv = kv_in(&dir);
            kv.mutate(|v| {
                v.insert("rosterly_last_category".into(), "2".into());
            });
        }
        let kv = kv_in(&dir);
        assert_eq!(kv.get("rosterly_last_category").as_deref(), Some("2"));
    }

    #[test]
    fn test_remove_deletes_key() {
        let dir = tempfile::tempdir().expect("tempdir");
        let kv = kv_in(&dir);
        kv.mutate(|v| {
            v.insert("k".into(), "v".into());
        });
        kv.mutate(|v| {
            v.remove("k");
        });
        assert_eq!(kv.get("k"), None);
    }
}
