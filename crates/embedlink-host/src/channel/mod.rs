//! Embed channel: per-slide session lifecycle and registry.
//!
//! One session per slide, arena-style, indexed by slide identifier. Open
//! and close are explicit, testable operations rather than "listener goes
//! out of scope".

pub mod registry;
pub mod session;

pub use registry::SessionRegistry;
pub use session::{EmbedSession, InitSender};
