//! Process-level plumbing shared by the demo binary and anything embedding the crate.
//!
//! # Main Components
//!
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure
//! - [`Config`] - Settings read from the environment

pub mod config;
pub mod tracing;

pub use self::config::*;
pub use self::tracing::*;
