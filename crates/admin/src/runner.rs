//! Composition root for the admin shell.

use std::sync::Arc;

use crate::ports::outbound::{PlatformPort, RosterApiPort};

/// Configuration types for the admin runner.
pub mod config {
    use std::str::FromStr;

    /// Which backend adapter serves the roster API.
    #[derive(Clone, Debug, PartialEq, Eq, Default)]
    pub enum BackendKind {
        /// Seeded in-process backend, useful for local work and demos.
        #[default]
        Memory,
        /// REST backend at the given base url.
        Http { base_url: String },
    }

    impl FromStr for BackendKind {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "memory" => Ok(Self::Memory),
                "http" => Ok(Self::Http {
                    base_url: String::new(),
                }),
                other => Err(format!("unknown backend kind: {other}")),
            }
        }
    }

    impl BackendKind {
        /// Resolve the backend from `ROSTERLY_BACKEND`, filling the REST
        /// base url from `ROSTERLY_API_URL`. Unset or unparseable values
        /// fall back to the in-memory adapter.
        pub fn from_env() -> Self {
            let kind = match std::env::var("ROSTERLY_BACKEND") {
                Ok(raw) => raw.parse::<Self>().unwrap_or_else(|e| {
                    tracing::warn!("{e}; using in-memory backend");
                    Self::Memory
                }),
                Err(_) => Self::Memory,
            };
            match kind {
                Self::Http { .. } => Self::Http {
                    base_url: std::env::var("ROSTERLY_API_URL")
                        .unwrap_or_else(|_| "http://localhost:8080".to_string()),
                },
                kind => kind,
            }
        }
    }

    #[derive(Clone, Debug, Default)]
    pub struct RunnerConfig {
        pub backend: BackendKind,
    }
}

pub use config::RunnerConfig;

pub struct RunnerDeps {
    pub platform: Arc<dyn PlatformPort>,
    pub api: Arc<dyn RosterApiPort>,
    pub config: RunnerConfig,
}

pub fn run(deps: RunnerDeps) {
    let RunnerDeps {
        platform,
        api,
        config,
    } = deps;

    tracing::info!(backend = ?config.backend, "starting admin shell");

    let css = load_admin_css();
    let head = format!("<style>{}</style>", css);
    let cfg = dioxus_desktop::Config::new().with_custom_head(head);

    dioxus::LaunchBuilder::new()
        .with_cfg(cfg)
        .with_context(platform.clone())
        .with_context(crate::ui::presentation::Services::new(api, platform))
        .launch(crate::ui::app);
}

fn load_admin_css() -> String {
    const FALLBACK_CSS: &str = "";

    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    let css_path = repo_root.join("crates/admin/assets/css/output.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}

#[cfg(test)]
mod tests {
    use super::config::BackendKind;

    #[test]
    fn test_backend_kind_parses_known_names() {
        assert_eq!("memory".parse::<BackendKind>(), Ok(BackendKind::Memory));
        assert!(matches!(
            " HTTP ".parse::<BackendKind>(),
            Ok(BackendKind::Http { .. })
        ));
    }

    #[test]
    fn test_backend_kind_rejects_unknown_names() {
        assert!("graphql".parse::<BackendKind>().is_err());
    }
}
