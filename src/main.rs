use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vellum::api::{self, AppState, health::ENDPOINTS};
use vellum::config::Config;
use vellum::{BlogStore, Server};

#[tokio::main]
async fn main() -> Result<(), vellum::Error> {
    let config = Config::parse();
    init_tracing(&config.log);

    let addr = config.socket_addr()?;
    let store = if config.no_seed { BlogStore::new() } else { BlogStore::seeded() };
    info!(blogs = store.len(), next_id = store.next_id(), "blog store ready");

    let app = api::router(AppState::new(store)).cors(config.cors_policy());
    info!(origins = ?config.cors_origins, "cross-origin policy installed");
    for endpoint in ENDPOINTS {
        info!("  {endpoint}");
    }

    Server::bind(addr).serve(app).await
}

/// `RUST_LOG` wins; otherwise the `--log` filter applies.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
