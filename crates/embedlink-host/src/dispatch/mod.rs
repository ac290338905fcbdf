//! Event dispatcher module exports.
//!
//! Re-exports the dispatcher and the host hook interface so downstream
//! consumers can depend on this module directly.

pub mod dispatcher;

pub use dispatcher::{Dispatcher, HostHooks, ReadyAction};
