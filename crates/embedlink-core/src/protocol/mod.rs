//! Embed protocol wire contracts.
//!
//! Two message shapes cross the frame boundary:
//! - Inbound: JSON event envelopes sent by the embedded content.
//! - Outbound: the one-time init message sent host -> embed after `ready`.
//!
//! All parsers are panic-free: malformed input is reported as
//! `EmbedLinkError` instead of panicking, keeping the host resilient to
//! hostile or merely buggy third-party senders.

pub mod inbound;
pub mod origin;
pub mod outbound;

/// `type` literal every inbound event envelope must carry.
pub const INBOUND_TYPE: &str = "lms-embed-event";

/// `type` literal of the outbound init message.
pub const OUTBOUND_TYPE: &str = "lms-init";

/// Protocol version the host speaks.
pub const PROTOCOL_VERSION: &str = "1.0";

/// Major version accepted under the strict version policy.
pub const SUPPORTED_MAJOR: &str = "1";
