//! One-shot shutdown broadcast.
//!
//! Any number of producers may call [`ShutdownSignal::trigger`]; the first
//! call flips the flag and wakes every listener, later calls do nothing.
//! Triggering never blocks and does not require a listener to exist.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

/// Producer side of the shutdown broadcast. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    tx: Arc<watch::Sender<bool>>,
}

impl ShutdownSignal {
    /// A signal that has not fired.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Raise the signal. Returns `true` only for the call that raised it.
    pub fn trigger(&self) -> bool {
        let raised = self.tx.send_if_modified(|triggered| {
            if *triggered {
                false
            } else {
                *triggered = true;
                true
            }
        });

        if raised {
            debug!("Shutdown signal raised");
        }

        raised
    }

    /// Whether the signal has fired.
    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// A new listener. Listeners created after the trigger resolve at once.
    pub fn listener(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Consumer side of the shutdown broadcast.
#[derive(Debug, Clone)]
pub struct ShutdownListener {
    rx: watch::Receiver<bool>,
}

impl ShutdownListener {
    /// Resolve once the signal fires, or once every [`ShutdownSignal`]
    /// handle is gone.
    pub async fn wait(&mut self) {
        let _ = self.rx.wait_for(|triggered| *triggered).await;
    }

    /// Whether the signal has fired, without waiting.
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }
}
