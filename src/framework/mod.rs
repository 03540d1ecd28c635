//! Generic relationship and decoding framework.
//!
//! This module provides the building blocks every resource type is made of, and the decode
//! pipeline that fills them in from a JSON resource object.
//!
//! # Main Components
//!
//! - [`Head`] / [`Pointer`] - Resource identity and bare references
//! - [`Cardinality`] - The closed set of relationship shapes: [`One`], [`Many`], [`Maybe`]
//! - [`Related`] / [`To`] - A relationship's state (`Unknown`, `Unfetched`, `Fetched`) and the
//!   field type resources declare
//! - [`Resource`] / [`ResourceObject`] - The decode contract and the view it reads through
//! - [`DecodeError`] / [`DecodeErrors`] - Field-level failures and their aggregate
//!
//! # Combining Fields
//!
//! See [`accumulate!`](crate::accumulate) for the error-accumulating combinator used by every
//! `Resource::from_json`.

pub mod attribute;
pub mod cardinality;
pub mod decode;
pub mod error;
pub mod identity;
pub mod related;

// Re-export core types for convenience
pub use attribute::Attribute;
pub use cardinality::{Cardinality, Many, Maybe, One};
pub use decode::{Resource, ResourceObject};
pub use error::{DecodeError, DecodeErrors, ErrorKind, FieldPath, JsonKind};
pub use identity::{Head, Pointer};
pub use related::{Related, To};
