//! The bookstore domain: resource types implementing [`Resource`](crate::framework::Resource).
//!
//! Relationships between these types go through [`To`](crate::framework::To), so the
//! Book ↔ Author ↔ Book cycle never needs back-pointers: a resource either holds pointers to its
//! neighbours or its own copies of them.

pub mod author;
pub mod book;
pub mod chapter;
pub mod photo;
pub mod series;
pub mod store;

pub use author::*;
pub use book::*;
pub use chapter::*;
pub use photo::*;
pub use series::*;
pub use store::*;
