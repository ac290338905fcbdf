//! embedlink host runtime.
//!
//! This crate wires the embed channel (session lifecycle + registry), the
//! event dispatcher, the outbound frame port, config, and metrics into the
//! host-side half of the embed protocol. It is intended to be consumed by
//! the host player (slide renderer) and by integration tests; the actual
//! cross-document messaging channel belongs to the host player, which
//! feeds this library raw `{origin, body}` messages.

pub mod bridge;
pub mod channel;
pub mod config;
pub mod dispatch;
pub mod obs;
pub mod transport;

pub use bridge::EmbedBridge;
pub use channel::{EmbedSession, InitSender};
pub use dispatch::{HostHooks, ReadyAction};
pub use transport::{FramePort, OutboundPost, QueuePort, RawMessage};
