//! Graceful shutdown signal handling.

use std::time::Duration;

use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix;
use tokio::sync::watch;

use crate::TRACING_TARGET_SERVER_SHUTDOWN;

/// Waits for a shutdown signal (SIGTERM or SIGINT/Ctrl+C).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!(
                target: TRACING_TARGET_SERVER_SHUTDOWN,
                error = %e,
                "Failed to install Ctrl+C handler"
            );
            std::future::pending::<()>().await;
        } else {
            tracing::info!(
                target: TRACING_TARGET_SERVER_SHUTDOWN,
                "Received Ctrl+C signal, initiating graceful shutdown"
            );
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match unix::signal(unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                tracing::info!(
                    target: TRACING_TARGET_SERVER_SHUTDOWN,
                    "Received SIGTERM signal, initiating graceful shutdown"
                );
            }
            Err(e) => {
                tracing::error!(
                    target: TRACING_TARGET_SERVER_SHUTDOWN,
                    error = %e,
                    "Failed to install SIGTERM handler"
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

/// Coordinates the graceful shutdown signal with its drain deadline.
///
/// [`ShutdownTrigger::signal`] resolves on SIGINT/SIGTERM and is handed to
/// axum; [`ShutdownTrigger::deadline`] resolves `shutdown_timeout` after that
/// signal, or never if the signal did not fire.
#[derive(Debug, Clone)]
pub struct ShutdownTrigger {
    shutdown_timeout: Duration,
    sender: watch::Sender<bool>,
}

impl ShutdownTrigger {
    /// Creates a trigger with the given drain deadline.
    pub fn new(shutdown_timeout: Duration) -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            shutdown_timeout,
            sender,
        }
    }

    /// Resolves once `signal` does, recording that shutdown has begun.
    pub async fn signal<F>(self, signal: F)
    where
        F: Future<Output = ()>,
    {
        signal.await;

        tracing::info!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            timeout_secs = self.shutdown_timeout.as_secs(),
            "Graceful shutdown initiated"
        );

        self.sender.send_replace(true);
    }

    /// Resolves `shutdown_timeout` after the shutdown signal.
    pub async fn deadline(self) {
        let mut receiver = self.sender.subscribe();
        if receiver.wait_for(|started| *started).await.is_err() {
            std::future::pending::<()>().await;
        }

        tokio::time::sleep(self.shutdown_timeout).await;

        tracing::warn!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            timeout_secs = self.shutdown_timeout.as_secs(),
            "Shutdown timeout elapsed, dropping remaining connections"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn deadline_waits_for_signal_then_timeout() {
        let trigger = ShutdownTrigger::new(Duration::from_secs(5));
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        let signal = tokio::spawn(trigger.clone().signal(async move {
            let _ = rx.await;
        }));
        let deadline = tokio::spawn(trigger.deadline());

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert!(!deadline.is_finished());

        let _ = tx.send(());
        signal.await.unwrap();

        tokio::time::sleep(Duration::from_secs(6)).await;
        assert!(deadline.is_finished());
    }
}
