//! Cancellation signalling
//!
//! Discovery operations are unbounded by design; the caller bounds them by
//! cancelling. A [`CancelHandle`] is handed out when a `Discovery` is
//! built, and the internal signal is checked at every state boundary, in
//! backoff sleeps, and while draining lookup event streams.

use tokio::sync::watch;

/// Caller-side cancellation handle
///
/// Cancelling is idempotent and affects every in-flight and future
/// operation of the `Discovery` it was created with.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Cancel all discovery operations
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }

    /// Whether cancellation has been requested
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

/// Internal receiver side of the cancellation signal
#[derive(Debug, Clone)]
pub(crate) struct CancelSignal {
    rx: watch::Receiver<bool>,
}

impl CancelSignal {
    /// Create a linked handle/signal pair
    pub(crate) fn pair() -> (CancelHandle, Self) {
        let (tx, rx) = watch::channel(false);
        (CancelHandle { tx }, Self { rx })
    }

    /// Whether cancellation has been requested
    pub(crate) fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait until cancellation is requested
    ///
    /// If the handle is dropped without cancelling, this never resolves;
    /// operations then run to their natural completion.
    pub(crate) async fn cancelled(&mut self) {
        if self.rx.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
