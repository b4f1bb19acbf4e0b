//! Rosterly Admin - composition root binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rosterly_admin::infrastructure::http_client::HttpRosterApi;
use rosterly_admin::infrastructure::memory::InMemoryRosterApi;
use rosterly_admin::infrastructure::platform::create_platform;
use rosterly_admin::ports::outbound::{PlatformPort, RosterApiPort};
use rosterly_admin::runner::{self, config::BackendKind, RunnerConfig, RunnerDeps};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rosterly_admin=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Rosterly Admin");

    let platform: Arc<dyn PlatformPort> = Arc::new(create_platform());

    // Backend selection: in-memory by default, REST when pointed at a server.
    let backend = BackendKind::from_env();

    let api: Arc<dyn RosterApiPort> = match &backend {
        BackendKind::Memory => Arc::new(InMemoryRosterApi::seeded()),
        BackendKind::Http { base_url } => Arc::new(HttpRosterApi::new(base_url)),
    };

    runner::run(RunnerDeps {
        platform,
        api,
        config: RunnerConfig { backend },
    });
}
