use super::error::ConfigError;
use clap::Parser;
use std::time::Duration;

const DEFAULT_PRODUCER_THREADS: usize = 2;
const DEFAULT_CONSUMER_THREADS: usize = 2;
const DEFAULT_PRODUCER_MAX_DELAY_MS: u64 = 500;
const DEFAULT_CONSUMER_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Parser)]
#[command(name = "handoff", version, about = "Producers and consumers handing records off through a shared queue")]
pub struct Settings {
    /// Number of producer workers (0 disables production)
    #[arg(long, env = "PRODUCER_THREADS", default_value_t = DEFAULT_PRODUCER_THREADS)]
    pub producer_threads: usize,
    /// Number of consumer workers (0 disables consumption)
    #[arg(long, env = "CONSUMER_THREADS", default_value_t = DEFAULT_CONSUMER_THREADS)]
    pub consumer_threads: usize,
    /// Upper bound (exclusive) of a producer's random pause between records
    #[arg(long, env = "PRODUCER_MAX_DELAY_MS", default_value_t = DEFAULT_PRODUCER_MAX_DELAY_MS)]
    pub producer_max_delay_ms: u64,
    /// Fixed pause of a consumer after each record
    #[arg(long, env = "CONSUMER_DELAY_MS", default_value_t = DEFAULT_CONSUMER_DELAY_MS)]
    pub consumer_delay_ms: u64,
    /// Bound the queue to this many records (unbounded when omitted)
    #[arg(long, env = "QUEUE_CAPACITY")]
    pub queue_capacity: Option<usize>,
    /// Shut down after this many milliseconds (runs until Ctrl-C when omitted)
    #[arg(long, env = "RUN_FOR_MS")]
    pub run_for_ms: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            producer_threads: DEFAULT_PRODUCER_THREADS,
            consumer_threads: DEFAULT_CONSUMER_THREADS,
            producer_max_delay_ms: DEFAULT_PRODUCER_MAX_DELAY_MS,
            consumer_delay_ms: DEFAULT_CONSUMER_DELAY_MS,
            queue_capacity: None,
            run_for_ms: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue_capacity == Some(0) {
            return Err(ConfigError::ZeroCapacity);
        }
        if self
            .producer_threads
            .checked_add(self.consumer_threads)
            .is_none()
        {
            return Err(ConfigError::TooManyWorkers {
                producers: self.producer_threads,
                consumers: self.consumer_threads,
            });
        }
        Ok(())
    }

    // one execution slot per worker, saturates on configs validate() rejects
    pub fn pool_size(&self) -> usize {
        self.producer_threads.saturating_add(self.consumer_threads)
    }

    pub fn producer_max_delay(&self) -> Duration {
        Duration::from_millis(self.producer_max_delay_ms)
    }

    pub fn consumer_delay(&self) -> Duration {
        Duration::from_millis(self.consumer_delay_ms)
    }
}
