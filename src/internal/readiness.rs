use super::error::OrchestratorError;
use tokio::sync::oneshot;

pub struct ReadyNotifier {
    tx: oneshot::Sender<()>,
}

pub struct ReadySignal {
    rx: oneshot::Receiver<()>,
}

pub fn channel() -> (ReadyNotifier, ReadySignal) {
    let (tx, rx) = oneshot::channel();
    (ReadyNotifier { tx }, ReadySignal { rx })
}

impl ReadyNotifier {
    pub fn notify(self) {
        let _ = self.tx.send(());
    }
}

impl ReadySignal {
    pub async fn wait(self) -> Result<(), OrchestratorError> {
        self.rx.await.map_err(|_| OrchestratorError::NeverReady)
    }
}
