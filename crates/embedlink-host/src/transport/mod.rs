//! Frame transport boundary.
//!
//! Exposes the raw inbound message shape and the write half of a frame's
//! messaging channel. The read half (the actual listener wiring) lives in
//! the host player; it hands each received message to the session via the
//! registry.

pub mod port;

pub use port::{FramePort, OutboundPost, QueuePort, RawMessage};
