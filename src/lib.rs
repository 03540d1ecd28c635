//! # Endpoints
//!
//! > **Typed resources from JSON documents, with relationships that know how much they know.**
//!
//! A resource document carries an identity, attributes, and relationships to other resources.
//! A relationship may be missing from the document, present only as references, or present as
//! full data. This crate keeps that distinction in the type system and decodes documents into
//! typed resources, reporting *every* problem with a document rather than the first one.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Relationships as a Three-State Value
//! Every relationship field is a [`To<C>`](framework::To) holding a
//! [`Related<C>`](framework::Related):
//! - **Unknown**: the document did not mention it.
//! - **Unfetched**: we have the [`Pointer`](framework::Pointer)s.
//! - **Fetched**: we have the related resources themselves.
//!
//! ### Cardinality as a Type
//! `C` is one of [`One`](framework::One), [`Many`](framework::Many) or
//! [`Maybe`](framework::Maybe). It decides what the `Unfetched` and `Fetched` payloads look like,
//! so a to-many relationship can never hold a single pointer.
//!
//! ### Errors Accumulate
//! Decoding visits every field even after one fails, and returns a
//! [`DecodeErrors`](framework::DecodeErrors) listing each failure with its path
//! (`attributes.name`, `relationships.books.data[3].id`).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Identity types, cardinalities, relationship state and the decode pipeline.
//! - **Key items**: [`Resource`](framework::Resource), [`ResourceObject`](framework::ResourceObject),
//!   [`accumulate!`].
//!
//! ### 2. The Domain ([`model`])
//! The bookstore resources: [`Store`](model::Store), [`Book`](model::Book),
//! [`Author`](model::Author), [`Series`](model::Series), [`Chapter`](model::Chapter),
//! [`Photo`](model::Photo).
//!
//! ### 3. The Input Side ([`source`])
//! The [`Document`](source::Document) envelope and the
//! [`DocumentSource`](source::DocumentSource) seam documents are retrieved through.
//!
//! ### 4. The Plumbing ([`lifecycle`])
//! Tracing setup and environment configuration.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use endpoints::framework::Resource;
//! use endpoints::model::Store;
//! use serde_json::json;
//!
//! let json = json!({
//!     "id": "2",
//!     "type": "stores",
//!     "attributes": { "name": "full store" },
//!     "relationships": { "books": { "data": [{ "id": "1", "type": "books" }] } }
//! });
//!
//! let store = Store::decode(&json).unwrap();
//! assert_eq!(store.name, "full store");
//! assert_eq!(store.books.as_unfetched().unwrap()[0].id, "1");
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! # Decode the bundled fixtures with info logs
//! RUST_LOG=info cargo run
//! ```

pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod source;
