#![allow(dead_code)]

use async_trait::async_trait;
use handoff::internal::config::Settings;
use handoff::internal::consumer::{
    ConsumerEvents, ConsumerKilledCallback, RecordSavedCallback, SaveFailedCallback,
};
use handoff::internal::error::StoreError;
use handoff::internal::producer::{
    ProducerEvents, ProducerKilledCallback, RecordProducedCallback,
};
use handoff::internal::record::Record;
use handoff::internal::store::{MemoryStore, Store};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub struct TestProducerEvents {
    produced: Arc<Mutex<Vec<String>>>,
    producer_kill_count: Arc<Mutex<u8>>,
}

pub struct TestConsumerEvents {
    saved: Arc<Mutex<Vec<(usize, String)>>>,
    failed: Arc<Mutex<Vec<String>>>,
    consumer_kill_count: Arc<Mutex<u8>>,
}

impl TestProducerEvents {
    pub fn new() -> TestProducerEvents {
        TestProducerEvents {
            produced: Arc::new(Mutex::new(Vec::new())),
            producer_kill_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn events(&self) -> ProducerEvents {
        ProducerEvents {
            on_record_produced: self.on_record_produced(),
            on_producer_killed: self.on_producer_killed(),
        }
    }

    fn on_record_produced(&self) -> Arc<RecordProducedCallback> {
        let p = self.produced.clone();
        Arc::new(Box::new(move |_: usize, record_id: &str| {
            p.lock().unwrap().push(record_id.to_owned());
        }))
    }

    fn on_producer_killed(&self) -> Arc<ProducerKilledCallback> {
        let c = self.producer_kill_count.clone();
        Arc::new(Box::new(move |_: usize| {
            let mut count = c.lock().unwrap();
            *count += 1;
        }))
    }

    pub fn get_produced(&self) -> Vec<String> {
        self.produced.lock().unwrap().clone()
    }

    pub fn get_producer_killed_count(&self) -> u8 {
        *self.producer_kill_count.lock().unwrap()
    }
}

impl TestConsumerEvents {
    pub fn new() -> TestConsumerEvents {
        TestConsumerEvents {
            saved: Arc::new(Mutex::new(Vec::new())),
            failed: Arc::new(Mutex::new(Vec::new())),
            consumer_kill_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn events(&self) -> ConsumerEvents {
        ConsumerEvents {
            on_record_saved: self.on_record_saved(),
            on_save_failed: self.on_save_failed(),
            on_consumer_killed: self.on_consumer_killed(),
        }
    }

    fn on_record_saved(&self) -> Arc<RecordSavedCallback> {
        let s = self.saved.clone();
        Arc::new(Box::new(move |consumer_id: usize, record_id: &str| {
            s.lock().unwrap().push((consumer_id, record_id.to_owned()));
        }))
    }

    fn on_save_failed(&self) -> Arc<SaveFailedCallback> {
        let f = self.failed.clone();
        Arc::new(Box::new(
            move |_: usize, record_id: &str, _: &StoreError| {
                f.lock().unwrap().push(record_id.to_owned());
            },
        ))
    }

    fn on_consumer_killed(&self) -> Arc<ConsumerKilledCallback> {
        let c = self.consumer_kill_count.clone();
        Arc::new(Box::new(move |_: usize| {
            let mut count = c.lock().unwrap();
            *count += 1;
        }))
    }

    pub fn get_saved(&self) -> Vec<(usize, String)> {
        self.saved.lock().unwrap().clone()
    }

    pub fn get_saved_ids(&self) -> Vec<String> {
        self.get_saved().into_iter().map(|(_, id)| id).collect()
    }

    pub fn get_failed(&self) -> Vec<String> {
        self.failed.lock().unwrap().clone()
    }

    pub fn get_consumer_killed_count(&self) -> u8 {
        *self.consumer_kill_count.lock().unwrap()
    }
}

pub fn fast_settings(producer_threads: usize, consumer_threads: usize) -> Settings {
    Settings {
        producer_threads,
        consumer_threads,
        producer_max_delay_ms: 5,
        consumer_delay_ms: 1,
        ..Settings::default()
    }
}

/// Rejects every other save.
pub struct FlakyStore {
    calls: AtomicUsize,
    inner: MemoryStore,
}

impl FlakyStore {
    pub fn new() -> FlakyStore {
        FlakyStore {
            calls: AtomicUsize::new(0),
            inner: MemoryStore::new(),
        }
    }

    pub async fn ids(&self) -> Vec<String> {
        self.inner.ids().await
    }
}

#[async_trait]
impl Store for FlakyStore {
    async fn save(&self, record: Record) -> Result<(), StoreError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) % 2 == 1 {
            return Err(StoreError::Unavailable("connection reset".to_owned()));
        }
        self.inner.save(record).await
    }
}

/// Takes `latency` to complete every save.
pub struct SlowStore {
    latency: Duration,
    inner: MemoryStore,
}

impl SlowStore {
    pub fn new(latency: Duration) -> SlowStore {
        SlowStore {
            latency,
            inner: MemoryStore::new(),
        }
    }

    pub async fn ids(&self) -> Vec<String> {
        self.inner.ids().await
    }
}

#[async_trait]
impl Store for SlowStore {
    async fn save(&self, record: Record) -> Result<(), StoreError> {
        tokio::time::sleep(self.latency).await;
        self.inner.save(record).await
    }
}

/// Never comes up.
pub struct BrokenStore;

#[async_trait]
impl Store for BrokenStore {
    async fn init(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("no route to host".to_owned()))
    }

    async fn save(&self, _record: Record) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("no route to host".to_owned()))
    }
}
