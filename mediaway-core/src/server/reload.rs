use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

static RELOAD_EPOCH: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, thiserror::Error)]
pub enum ReloadError {
    #[error("failed to install signal handler")]
    Signal(#[source] std::io::Error),
}

#[derive(Clone, Copy, Debug)]
pub struct ReloadEvent {
    pub epoch: u64,
}

#[derive(Clone, Debug)]
pub struct ReloadHandle {
    tx: watch::Sender<ReloadEvent>,
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ReloadHandle {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(ReloadEvent { epoch: 0 });
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<ReloadEvent> {
        self.tx.subscribe()
    }

    pub fn notify_reload(&self) {
        let epoch = RELOAD_EPOCH.fetch_add(1, Ordering::Relaxed) + 1;
        let _ = self.tx.send(ReloadEvent { epoch });
        tracing::info!(epoch, "reload signaled");
    }

    pub async fn install_signal_handler(&self) -> Result<(), ReloadError> {
        let mut hup = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::hangup())
            .map_err(ReloadError::Signal)?;

        while hup.recv().await.is_some() {
            tracing::info!("SIGHUP received");
            self.notify_reload();
        }
        Ok(())
    }
}
