use super::error::{QueueError, StoreError};
use super::queue::SharedQueue;
use super::shutdown::Signaler;
use super::store::Store;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

pub struct Consumer {
    id: usize,
    queue: SharedQueue,
    store: Arc<dyn Store>,
    delay: Duration,
}

impl Consumer {
    pub fn new(id: usize, queue: SharedQueue, store: Arc<dyn Store>, delay: Duration) -> Consumer {
        Consumer {
            id,
            queue,
            store,
            delay,
        }
    }

    pub async fn run(self, mut signaler: Signaler, consumer_events: ConsumerEvents) {
        while !signaler.is_shutdown() {
            let record = match self.queue.take(&mut signaler).await {
                Ok(record) => record,
                Err(QueueError::Cancelled) => break,
                Err(QueueError::Closed) => {
                    warn!(consumer_id = self.id, "queue closed, stopping consumer");
                    break;
                }
            };
            let record_id = record.id().to_owned();
            let producer_id = record.producer_id();

            // not raced against the signaler, an in-flight save always completes
            match self.store.save(record).await {
                Ok(()) => {
                    info!(consumer_id = self.id, producer_id, record_id = %record_id, "Consumer {} saved record: {}", self.id, record_id);
                    (consumer_events.on_record_saved)(self.id, &record_id);
                }
                Err(e) => {
                    error!(consumer_id = self.id, producer_id, record_id = %record_id, error = %e, "Consumer {} failed to save record: {}", self.id, record_id);
                    (consumer_events.on_save_failed)(self.id, &record_id, &e);
                }
            }

            tokio::select! {
                biased;
                _ = signaler.recv() => break,
                _ = tokio::time::sleep(self.delay) => {}
            }
        }

        // The shutdown signal has been received.
        info!(consumer_id = self.id, "Consumer {} interrupted.", self.id);
        (consumer_events.on_consumer_killed)(self.id);
    }
}

pub type RecordSavedCallback = Box<dyn Fn(usize, &str) + Send + Sync>;
pub type SaveFailedCallback = Box<dyn Fn(usize, &str, &StoreError) + Send + Sync>;
pub type ConsumerKilledCallback = Box<dyn Fn(usize) + Send + Sync>;

#[derive(Clone)]
pub struct ConsumerEvents {
    pub on_record_saved: Arc<RecordSavedCallback>,
    pub on_save_failed: Arc<SaveFailedCallback>,
    pub on_consumer_killed: Arc<ConsumerKilledCallback>,
}

impl Default for ConsumerEvents {
    fn default() -> Self {
        ConsumerEvents {
            on_record_saved: Arc::new(Box::new(|_: usize, _: &str| {})),
            on_save_failed: Arc::new(Box::new(|_: usize, _: &str, _: &StoreError| {})),
            on_consumer_killed: Arc::new(Box::new(|_: usize| {})),
        }
    }
}
