//! Parish Core - Shared types library.
//!
//! This crate provides common types used across all parish components:
//! - `server` - JSON API serving the public site and the admin dashboard
//! - `cli` - Command-line tools for migrations, seeding, and user management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for entity IDs, emails, donation amounts,
//!   status enums, and the `"yes"`/`"no"` wire flag

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
