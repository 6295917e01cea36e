//! # Lifecycle
//!
//! Process-level wiring around the [`LibraryManager`](crate::library_manager::LibraryManager):
//!
//! - [`setup_tracing`] / [`try_setup_tracing`] - structured logging, filtered by `RUST_LOG`
//! - [`demo::run_reference_scenario`] - the scripted session the binary runs
//!
//! There is nothing to shut down. The manager lives as long as its owner and
//! holds no external resources.

pub mod demo;
pub mod tracing;

pub use demo::{run_reference_scenario, ScenarioError, ScenarioReport};
pub use self::tracing::*;
