//! Infrastructure layer for external integrations.
//!
//! Implements the storage contract defined by the domain layer.
//!
//! - [`persistence`] - memory, JSON file and PostgreSQL repositories

pub mod persistence;
