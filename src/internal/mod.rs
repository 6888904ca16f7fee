pub mod config;
pub mod consumer;
pub mod error;
pub mod orchestrator;
pub mod producer;
pub mod queue;
pub mod readiness;
pub mod record;
pub mod shutdown;
pub mod store;
