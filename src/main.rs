use clap::Parser;
use handoff::internal::config::Settings;
use handoff::internal::store::MemoryStore;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    init_tracing();

    let settings = Settings::parse();
    let store = Arc::new(MemoryStore::new());

    if let Err(e) = handoff::run(settings, store) {
        error!("{}", e);
        std::process::exit(1);
    }
}

// RUST_LOG overrides the default level
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "handoff=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
