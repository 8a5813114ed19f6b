//! Calculator Module
//!
//! Stateless scalar math behind a small REST API.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Operation evaluator
//! - `domain/local_client.rs` - `CalculatorClientV1` implementation over the service
//! - `api/rest/` - DTOs, handlers, error mapping and route registration
//! - `module.rs` - Wiring of config, service and routes
//!
//! External consumers should depend on `calculator-sdk` for the API trait and
//! operation model.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === MODULE DEFINITION ===
mod module;
pub use module::CalculatorModule;

pub mod config;
pub use config::CalculatorConfig;

// === PUBLIC EXPORTS ===
pub mod domain;
pub use domain::{CalculatorLocalClient, Service};

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
