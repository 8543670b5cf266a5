//! Cooperative cancellation shared by every install command

use std::future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

/// Why an operation was interrupted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    Cancelled,
    DeadlineExceeded,
}

/// Fires a [`Cancellation`]. Dropping the handle without firing never cancels.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

/// Cancellation signal plus an optional deadline
#[derive(Debug, Clone)]
pub struct Cancellation {
    rx: watch::Receiver<bool>,
    deadline: Option<Instant>,
}

impl Cancellation {
    /// A linked handle/signal pair
    pub fn pair() -> (CancelHandle, Self) {
        let (tx, rx) = watch::channel(false);
        (
            CancelHandle { tx },
            Self { rx, deadline: None },
        )
    }

    /// A signal that only a deadline (if one is added) can trip
    pub fn never() -> Self {
        let (_, cancellation) = Self::pair();
        cancellation
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Current state without waiting
    pub fn interrupted(&self) -> Option<Interrupt> {
        if *self.rx.borrow() {
            Some(Interrupt::Cancelled)
        } else if self.deadline.is_some_and(|d| Instant::now() >= d) {
            Some(Interrupt::DeadlineExceeded)
        } else {
            None
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.interrupted().is_some()
    }

    /// Resolve once the handle fires or the deadline passes
    pub async fn cancelled(&self) -> Interrupt {
        let mut rx = self.rx.clone();
        let signal = async move {
            loop {
                if *rx.borrow_and_update() {
                    return;
                }
                if rx.changed().await.is_err() {
                    // Handle dropped without firing
                    future::pending::<()>().await;
                }
            }
        };

        match self.deadline {
            Some(deadline) => tokio::select! {
                _ = signal => Interrupt::Cancelled,
                _ = tokio::time::sleep_until(deadline) => Interrupt::DeadlineExceeded,
            },
            None => {
                signal.await;
                Interrupt::Cancelled
            }
        }
    }
}

impl Default for Cancellation {
    fn default() -> Self {
        Self::never()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_handle_fires_signal() {
        let (handle, cancel) = Cancellation::pair();
        assert!(!cancel.is_cancelled());

        let waiter = tokio::spawn({
            let cancel = cancel.clone();
            async move { cancel.cancelled().await }
        });
        handle.cancel();

        assert_eq!(waiter.await.unwrap(), Interrupt::Cancelled);
        assert_eq!(cancel.interrupted(), Some(Interrupt::Cancelled));
    }

    #[tokio::test]
    async fn test_deadline_trips() {
        let cancel = Cancellation::never().with_timeout(Duration::from_millis(20));
        assert_eq!(cancel.cancelled().await, Interrupt::DeadlineExceeded);
        assert!(cancel.is_cancelled());
    }

    #[tokio::test]
    async fn test_never_stays_quiet() {
        let cancel = Cancellation::never();
        let outcome =
            tokio::time::timeout(Duration::from_millis(20), cancel.cancelled()).await;
        assert!(outcome.is_err());
        assert!(!cancel.is_cancelled());
    }
}
