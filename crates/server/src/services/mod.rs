//! External service clients.

pub mod notify;

pub use notify::{Notifier, NotifyError};
