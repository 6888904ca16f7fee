pub mod internal;

use crate::internal::config::Settings;
use crate::internal::orchestrator::Orchestrator;
use crate::internal::readiness;
use crate::internal::shutdown::{CountDownInterrupter, CtrlInterrupter, Interrupter, Shutdown};
use crate::internal::store::Store;
use std::sync::Arc;
use tracing::{error, warn};

pub fn run(settings: Settings, store: Arc<dyn Store>) -> Result<(), Box<dyn std::error::Error>> {
    settings.validate()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(settings.pool_size().max(1))
        .enable_all()
        .build()?;

    runtime.block_on(serve(settings, store))
}

pub async fn serve(settings: Settings, store: Arc<dyn Store>) -> Result<(), Box<dyn std::error::Error>> {
    let mut interrupters: Vec<Box<dyn Interrupter>> = vec![Box::new(CtrlInterrupter::new())];
    if let Some(millis) = settings.run_for_ms {
        interrupters.push(Box::new(CountDownInterrupter::new(millis)));
    }
    let shutdown = Shutdown::new(interrupters);

    let orchestrator = Orchestrator::new(settings, Arc::clone(&store));

    let (notifier, ready) = readiness::channel();
    tokio::spawn(async move {
        // a dropped notifier reports NeverReady to the orchestrator
        match store.init().await {
            Ok(()) => notifier.notify(),
            Err(e) => error!(error = %e, "store failed to initialize"),
        }
    });

    orchestrator.start_when_ready(ready, &shutdown).await?;
    shutdown.register_shutdown().await?;

    let queue = orchestrator.queue();
    queue.close();
    if !queue.is_empty() {
        warn!(unsaved = queue.len(), "{} records left unsaved in the queue", queue.len());
    }
    Ok(())
}
