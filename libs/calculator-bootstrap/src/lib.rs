//! Host bootstrap shared by the calculator binaries
//!
//! - [`logging`]: `tracing` subscriber setup from config and `-v` flags
//! - [`signals`]: waiting for Ctrl+C / SIGTERM

pub mod logging;
pub mod signals;

pub use logging::{LogFormat, LoggingConfig, init_logging};
pub use signals::{ShutdownSignal, wait_for_shutdown};
