//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! - [`services::link_service::LinkService`] - Link creation, lookup, listing and deletion
//! - [`services::redirect_service::RedirectService`] - Redirect resolution and click counting

pub mod services;
