//! Core domain entities.
//!
//! - [`Link`] - A stored short id → URL mapping with its click counter
//! - [`NewLink`] - Input for creating a mapping

pub mod link;

pub use link::{Link, NewLink};
