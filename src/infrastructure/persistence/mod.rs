//! Link repository implementations.
//!
//! - [`InMemoryLinkRepository`] - `HashMap` behind an async `RwLock`
//! - [`FileLinkRepository`] - whole-document JSON file with serialized writes
//! - [`PgLinkRepository`] - PostgreSQL via SQLx

pub mod file_link_repository;
pub mod memory_link_repository;
pub mod pg_link_repository;

pub use file_link_repository::FileLinkRepository;
pub use memory_link_repository::InMemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
