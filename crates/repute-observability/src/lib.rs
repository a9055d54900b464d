//! # repute-observability
//!
//! Subscriber setup, span macros and structured events shared by every
//! Repute crate.

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_tracing, init_tracing_with_filter, LOG_ENV_VAR};
