use super::error::QueueError;
use super::record::Record;
use super::shutdown::Signaler;
use async_channel::{Receiver, Sender};

#[derive(Clone)]
pub struct SharedQueue {
    tx: Sender<Record>,
    rx: Receiver<Record>,
}

impl SharedQueue {
    pub fn unbounded() -> SharedQueue {
        let (tx, rx) = async_channel::unbounded();
        SharedQueue { tx, rx }
    }

    pub fn bounded(capacity: usize) -> SharedQueue {
        let (tx, rx) = async_channel::bounded(capacity);
        SharedQueue { tx, rx }
    }

    /// If `signaler` is cancelled first the record is dropped without being enqueued.
    pub async fn put(&self, record: Record, signaler: &mut Signaler) -> Result<(), QueueError> {
        if signaler.is_shutdown() {
            return Err(QueueError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = signaler.recv() => Err(QueueError::Cancelled),
            sent = self.tx.send(record) => sent.map_err(|_| QueueError::Closed),
        }
    }

    /// On cancellation nothing is removed from the queue.
    pub async fn take(&self, signaler: &mut Signaler) -> Result<Record, QueueError> {
        if signaler.is_shutdown() {
            return Err(QueueError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = signaler.recv() => Err(QueueError::Cancelled),
            received = self.rx.recv() => received.map_err(|_| QueueError::Closed),
        }
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.tx.capacity()
    }

    // pending records can still be taken after close
    pub fn close(&self) -> bool {
        self.tx.close()
    }
}
