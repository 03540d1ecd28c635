//! # Observability & Tracing
//!
//! This module provides the tracing setup for the crate.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Decoding itself only emits events; nothing is printed unless a subscriber is installed.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`), and is filtered through the `RUST_LOG` environment variable.
//!
//! ## What Gets Traced
//!
//! - **Entities**: every decode, with the entity type and either its id or the error count (`debug`)
//! - **Relationships**: each relationship's cardinality and resulting state (`trace`)
//! - **Documents**: rejected documents (`warn`) and decoded collections (`debug`)
//! - **Sources**: fetches, with the document name recorded on the span
//!
//! ## Usage Examples
//!
//! ```bash
//! # Outcomes only
//! RUST_LOG=info cargo run
//!
//! # Every decoded entity
//! RUST_LOG=debug cargo run
//!
//! # Every relationship, field by field
//! RUST_LOG=trace cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=endpoints::framework=trace cargo run
//! ```
//!
//! With `RUST_LOG=trace` decoding the `FullStore` fixture shows:
//!
//! ```text
//! TRACE fetch_resource: Relationship decoded relationship="books" cardinality="many" state="unfetched"
//! DEBUG fetch_resource: Decoded entity_type="Store" id=2
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - events carry entity_type instead
        .compact()
        .init();
}
