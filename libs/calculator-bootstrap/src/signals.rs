//! Process shutdown signals.

use std::fmt;

use tokio::signal;

/// Signal that ended [`wait_for_shutdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// Ctrl+C / SIGINT
    Interrupt,
    /// SIGTERM (Unix only)
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShutdownSignal::Interrupt => "SIGINT",
            ShutdownSignal::Terminate => "SIGTERM",
        })
    }
}

/// Resolve on the first Ctrl+C or SIGTERM.
///
/// A listener that cannot be installed is logged and never fires; the other
/// one keeps working.
pub async fn wait_for_shutdown() -> ShutdownSignal {
    tokio::select! {
        received = interrupt() => received,
        received = terminate() => received,
    }
}

async fn interrupt() -> ShutdownSignal {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    ShutdownSignal::Interrupt
}

#[cfg(unix)]
async fn terminate() -> ShutdownSignal {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to install SIGTERM handler");
            std::future::pending::<()>().await;
        }
    }
    ShutdownSignal::Terminate
}

#[cfg(not(unix))]
async fn terminate() -> ShutdownSignal {
    std::future::pending().await
}
