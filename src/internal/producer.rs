use super::error::QueueError;
use super::queue::SharedQueue;
use super::record::Record;
use super::shutdown::Signaler;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub struct Producer {
    id: usize,
    next_sequence: u64,
    queue: SharedQueue,
    max_delay: Duration,
    rng: StdRng,
}

impl Producer {
    pub fn new(id: usize, queue: SharedQueue, max_delay: Duration) -> Producer {
        Producer {
            id,
            next_sequence: 1,
            queue,
            max_delay,
            rng: StdRng::from_entropy(),
        }
    }

    pub async fn run(mut self, mut signaler: Signaler, producer_events: ProducerEvents) {
        while !signaler.is_shutdown() {
            let record = self.next_record();
            let record_id = record.id().to_owned();

            match self.queue.put(record, &mut signaler).await {
                Ok(()) => {}
                Err(QueueError::Cancelled) => break,
                Err(QueueError::Closed) => {
                    warn!(producer_id = self.id, "queue closed, stopping producer");
                    break;
                }
            }

            info!(producer_id = self.id, record_id = %record_id, "Producer {} created record: {}", self.id, record_id);
            (producer_events.on_record_produced)(self.id, &record_id);

            let delay = self.next_delay();
            tokio::select! {
                biased;
                _ = signaler.recv() => break,
                _ = tokio::time::sleep(delay) => {}
            }
        }

        // The shutdown signal has been received.
        info!(producer_id = self.id, "Producer {} interrupted.", self.id);
        (producer_events.on_producer_killed)(self.id);
    }

    fn next_record(&mut self) -> Record {
        let record = Record::new(self.id, self.next_sequence);
        self.next_sequence += 1;
        record
    }

    fn next_delay(&mut self) -> Duration {
        let max_ms = self.max_delay.as_millis() as u64;
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(self.rng.gen_range(0..max_ms))
    }
}

pub type RecordProducedCallback = Box<dyn Fn(usize, &str) + Send + Sync>;
pub type ProducerKilledCallback = Box<dyn Fn(usize) + Send + Sync>;

#[derive(Clone)]
pub struct ProducerEvents {
    pub on_record_produced: Arc<RecordProducedCallback>,
    pub on_producer_killed: Arc<ProducerKilledCallback>,
}

impl Default for ProducerEvents {
    fn default() -> Self {
        ProducerEvents {
            on_record_produced: Arc::new(Box::new(|_: usize, _: &str| {})),
            on_producer_killed: Arc::new(Box::new(|_: usize| {})),
        }
    }
}
