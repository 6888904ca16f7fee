use async_trait::async_trait;
use futures::future;
use std::time::Duration;
use tokio::sync::broadcast::Receiver;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::{io, signal};
use tracing::info;

pub struct Shutdown<'a> {
    sender: broadcast::Sender<()>,
    waiter: mpsc::Receiver<()>,
    sender_waiter: mpsc::Sender<()>,
    interrupters: Vec<Box<dyn Interrupter + 'a>>,
}

pub struct Signaler {
    is_shutdown: bool,
    receiver: broadcast::Receiver<()>,

    #[allow(dead_code)]
    sender_waiter: mpsc::Sender<()>,
}

#[async_trait]
pub trait Interrupter: Send + Sync {
    async fn wait(&self) -> io::Result<()>;
}

pub struct CtrlInterrupter {}

impl CtrlInterrupter {
    pub fn new() -> CtrlInterrupter {
        CtrlInterrupter {}
    }
}

#[async_trait]
impl Interrupter for CtrlInterrupter {
    async fn wait(&self) -> io::Result<()> {
        signal::ctrl_c().await
    }
}

pub struct CountDownInterrupter {
    millis: u64,
}

impl CountDownInterrupter {
    pub fn new(millis: u64) -> CountDownInterrupter {
        CountDownInterrupter { millis }
    }
}

#[async_trait]
impl Interrupter for CountDownInterrupter {
    async fn wait(&self) -> io::Result<()> {
        tokio::time::sleep(Duration::from_millis(self.millis)).await;
        Ok(())
    }
}

pub struct ShutdownTrigger {
    sender: watch::Sender<bool>,
}

pub struct TriggerInterrupter {
    receiver: watch::Receiver<bool>,
}

pub fn trigger() -> (ShutdownTrigger, TriggerInterrupter) {
    let (sender, receiver) = watch::channel(false);
    (ShutdownTrigger { sender }, TriggerInterrupter { receiver })
}

impl ShutdownTrigger {
    pub fn fire(&self) {
        let _ = self.sender.send(true);
    }
}

#[async_trait]
impl Interrupter for TriggerInterrupter {
    async fn wait(&self) -> io::Result<()> {
        let mut receiver = self.receiver.clone();
        loop {
            let fired = *receiver.borrow_and_update();
            if fired {
                return Ok(());
            }
            if receiver.changed().await.is_err() {
                // trigger dropped without firing, never interrupt
                future::pending::<()>().await;
            }
        }
    }
}

impl<'a> Shutdown<'a> {
    pub fn new(interrupters: Vec<Box<dyn Interrupter + 'a>>) -> Shutdown<'a> {
        let (send, recv) = mpsc::channel::<()>(1);
        let (tx, _) = broadcast::channel::<()>(32);
        Shutdown {
            sender: tx,
            waiter: recv,
            sender_waiter: send,
            interrupters,
        }
    }

    pub fn get_signaler(&self) -> Signaler {
        // clone sender_waiter - when all clones go out of scope, waiter.recv() will fire
        Signaler::new(self.sender.subscribe(), self.sender_waiter.clone())
    }

    // with no interrupters this never returns
    pub async fn register_shutdown(mut self) -> io::Result<()> {
        self.wait_for_interrupt().await?;

        // send shutdown signal, no receivers just means no workers were started
        info!("waiting for workers to shut down...");
        let _ = self.sender.send(());

        // wait for tasks to finish
        drop(self.sender_waiter);
        let _ = self.waiter.recv().await;
        info!("shutdown complete");
        Ok(())
    }

    async fn wait_for_interrupt(&self) -> io::Result<()> {
        if self.interrupters.is_empty() {
            return future::pending().await;
        }

        let (result, _, _) =
            future::select_all(self.interrupters.iter().map(|interrupter| interrupter.wait()))
                .await;
        result
    }
}

impl Signaler {
    pub fn new(receiver: Receiver<()>, sender_waiter: mpsc::Sender<()>) -> Signaler {
        Signaler {
            is_shutdown: false,
            receiver,
            sender_waiter,
        }
    }

    pub fn is_shutdown(&self) -> bool {
        self.is_shutdown
    }

    pub async fn recv(&mut self) {
        if self.is_shutdown {
            return;
        }

        let _ = self.receiver.recv().await;
        self.is_shutdown = true;
    }
}
