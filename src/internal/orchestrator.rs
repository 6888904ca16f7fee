use super::config::Settings;
use super::consumer::{Consumer, ConsumerEvents};
use super::error::OrchestratorError;
use super::producer::{Producer, ProducerEvents};
use super::queue::SharedQueue;
use super::readiness::ReadySignal;
use super::shutdown;
use super::store::Store;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub struct Orchestrator {
    settings: Settings,
    queue: SharedQueue,
    store: Arc<dyn Store>,
    producer_events: ProducerEvents,
    consumer_events: ConsumerEvents,
    started: AtomicBool,
}

impl Orchestrator {
    pub fn new(settings: Settings, store: Arc<dyn Store>) -> Orchestrator {
        let queue = match settings.queue_capacity {
            Some(capacity) => SharedQueue::bounded(capacity),
            None => SharedQueue::unbounded(),
        };

        Orchestrator {
            settings,
            queue,
            store,
            producer_events: ProducerEvents::default(),
            consumer_events: ConsumerEvents::default(),
            started: AtomicBool::new(false),
        }
    }

    pub fn with_producer_events(mut self, producer_events: ProducerEvents) -> Orchestrator {
        self.producer_events = producer_events;
        self
    }

    pub fn with_consumer_events(mut self, consumer_events: ConsumerEvents) -> Orchestrator {
        self.consumer_events = consumer_events;
        self
    }

    pub fn queue(&self) -> &SharedQueue {
        &self.queue
    }

    pub async fn start_when_ready(
        &self,
        ready: ReadySignal,
        shutdown: &shutdown::Shutdown<'_>,
    ) -> Result<(), OrchestratorError> {
        ready.wait().await?;
        self.start(shutdown)
    }

    pub fn start(&self, shutdown: &shutdown::Shutdown<'_>) -> Result<(), OrchestratorError> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(OrchestratorError::AlreadyStarted);
        }

        let producer_count = self.settings.producer_threads;
        let consumer_count = self.settings.consumer_threads;
        info!(
            producers = producer_count,
            consumers = consumer_count,
            "Starting {} producers and {} consumers...",
            producer_count,
            consumer_count
        );

        for id in 1..=producer_count {
            let producer = Producer::new(id, self.queue.clone(), self.settings.producer_max_delay());
            // each worker owns its signaler, so shutdown knows when it exits
            let signaler = shutdown.get_signaler();
            tokio::spawn(producer.run(signaler, self.producer_events.clone()));
        }

        for id in 1..=consumer_count {
            let consumer = Consumer::new(
                id,
                self.queue.clone(),
                Arc::clone(&self.store),
                self.settings.consumer_delay(),
            );
            let signaler = shutdown.get_signaler();
            tokio::spawn(consumer.run(signaler, self.consumer_events.clone()));
        }

        Ok(())
    }
}
