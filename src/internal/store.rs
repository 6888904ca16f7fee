use super::error::StoreError;
use super::record::Record;
use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::Mutex;

#[async_trait]
pub trait Store: Send + Sync {
    async fn init(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn save(&self, record: Record) -> Result<(), StoreError>;
}

#[derive(Default)]
struct Saved {
    ids: HashSet<String>,
    records: Vec<Record>,
}

#[derive(Default)]
pub struct MemoryStore {
    saved: Mutex<Saved>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    pub async fn len(&self) -> usize {
        self.saved.lock().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn ids(&self) -> Vec<String> {
        let saved = self.saved.lock().await;
        saved.records.iter().map(|r| r.id().to_owned()).collect()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn save(&self, record: Record) -> Result<(), StoreError> {
        let mut saved = self.saved.lock().await;
        if !saved.ids.insert(record.id().to_owned()) {
            return Err(StoreError::Duplicate(record.id().to_owned()));
        }
        saved.records.push(record);
        Ok(())
    }
}
