//! Application layer services implementing business logic.
//!
//! Services consume the repository trait and provide a clean API for HTTP
//! handlers.
//!
//! - [`services::link_service::LinkService`] - Short link creation, redirect resolution and stats

pub mod services;
