//! Strictly Simon - terminal game CLI.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_simon_cli::app;
use strictly_simon_cli::cli::Cli;
use tracing::{debug, warn};
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Handle for swapping in the configured filter once the config is read.
type FilterHandle = reload::Handle<EnvFilter, Registry>;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let filter = init_tracing();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    app::run(cli, stdin.lock(), stdout.lock(), |config| {
        apply_log_level(&filter, config.log_level());
    })
}

/// Installs the subscriber before anything else runs, logging to stderr so
/// stdout stays the game surface. `RUST_LOG` wins; otherwise `warn` until the
/// config supplies its level.
fn init_tracing() -> FilterHandle {
    let (filter, handle) = reload::Layer::new(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

fn apply_log_level(handle: &FilterHandle, level: &str) {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        debug!("RUST_LOG set, ignoring configured log level");
        return;
    }
    if let Err(err) = handle.reload(EnvFilter::new(level)) {
        warn!(%err, "Could not apply configured log level");
    }
}
