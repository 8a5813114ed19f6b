//! Domain layer for calculator module
//!
//! Contains the operation evaluator and the local client over it.

pub mod local_client;
pub mod service;

pub use local_client::CalculatorLocalClient;
pub use service::Service;
