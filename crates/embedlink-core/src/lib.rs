//! embedlink core: transport-agnostic protocol primitives and error types.
//!
//! This crate defines the wire-level contracts shared by the host runtime
//! and any tooling that speaks the embed protocol: the inbound event
//! envelope, the outbound init message, the origin identity used for the
//! security check, and the normalized progress vocabulary the host's
//! callbacks consume. It intentionally carries no transport or runtime
//! dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `EmbedLinkError`/`Result` so a host
//! embedding untrusted third-party content never crashes on bad traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod progress;
pub mod protocol;

/// Shared result type.
pub use error::{EmbedLinkError, Result};
