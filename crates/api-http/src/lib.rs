//! HTTP API Layer
//!
//! Exposes the user endpoints over HTTP (axum). Every user leaving this
//! layer is a `UserOut`; the internal record only appears on the debug route.

pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod types;

pub use router::build_router;
pub use server::{HttpServer, HttpServerConfig, HttpServerHandle};
