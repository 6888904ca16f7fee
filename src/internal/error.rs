use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("queue operation cancelled by shutdown")]
    Cancelled,

    #[error("queue is closed")]
    Closed,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record {0} already exists")]
    Duplicate(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrchestratorError {
    #[error("workers have already been started")]
    AlreadyStarted,

    #[error("readiness notifier dropped before the system was ready")]
    NeverReady,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("queue capacity must be greater than zero")]
    ZeroCapacity,

    #[error("{producers} producers and {consumers} consumers exceed the worker limit")]
    TooManyWorkers { producers: usize, consumers: usize },
}
