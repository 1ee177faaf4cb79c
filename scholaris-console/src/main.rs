use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scholaris_api::{ApiClient, DirectoryService, HttpDirectoryService};
use scholaris_console::{Config, shell};

fn init_tracing() {
    // The shell owns stdout; diagnostics go to stderr and are filtered with
    // RUST_LOG as usual.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("scholaris=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let config = Config::load();
    info!(
        "Connecting to directory service at {} as operator {}",
        config.server_url, config.operator_id
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let client = Arc::new(ApiClient::new(config.server_url.clone()));
    let service: Arc<dyn DirectoryService> =
        Arc::new(HttpDirectoryService::new(client));

    shell::run(&config, service, runtime.handle().clone())
}
