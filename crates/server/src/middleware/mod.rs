//! HTTP middleware stack.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. Session layer (tower-sessions, SQLite store when storage is
//!    configured, in-memory store otherwise)
//!
//! Authentication is enforced per-handler with the extractors in
//! [`auth`] rather than with a route-level guard, so public and admin
//! operations can share a router.

pub mod auth;
pub mod session;

pub use auth::{OptionalUser, RequireAdmin};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
