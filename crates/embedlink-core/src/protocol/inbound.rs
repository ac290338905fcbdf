//! Inbound event envelope (embedded content -> host).
//!
//! The event set is a closed tagged union: adding or removing a kind is a
//! compile-time exhaustiveness concern for every consumer, not a string
//! switch with a default arm.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{EmbedLinkError, Result};

use super::INBOUND_TYPE;

/// Wire shape a third-party frame must send.
///
/// Unknown *extra* fields are tolerated (third-party senders are noisy);
/// unknown event kinds and missing event-specific fields are not.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    /// Protocol literal, must equal [`INBOUND_TYPE`].
    #[serde(rename = "type")]
    pub msg_type: String,
    /// Protocol version string, e.g. "1.0".
    pub version: String,
    /// The event itself.
    pub payload: EmbedEvent,
}

impl Envelope {
    /// Major component of the version string ("1.0" -> "1").
    pub fn major(&self) -> &str {
        self.version.split('.').next().unwrap_or("")
    }
}

/// Closed set of events an embed may emit.
#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum EmbedEvent {
    /// Embed finished booting and can receive the init message.
    Ready,
    /// Learner started interacting.
    Started,
    /// Partial progress, `percent` in `[0, 100]`.
    Progress { percent: f64 },
    /// Learner finished; an optional numeric score may be attached.
    Completed {
        #[serde(default)]
        score: Option<f64>,
    },
    /// Learner delivered an artifact.
    Submitted { submission: Submission },
    /// Embed-side failure report. Diagnostic only, no host callback.
    Error { message: String },
}

impl EmbedEvent {
    /// Wire name of the event kind (log fields, metric labels).
    pub fn kind(&self) -> &'static str {
        match self {
            EmbedEvent::Ready => "ready",
            EmbedEvent::Started => "started",
            EmbedEvent::Progress { .. } => "progress",
            EmbedEvent::Completed { .. } => "completed",
            EmbedEvent::Submitted { .. } => "submitted",
            EmbedEvent::Error { .. } => "error",
        }
    }
}

/// Artifact attached to a `submitted` event.
#[derive(Debug, Deserialize)]
pub struct Submission {
    /// Artifact type tag chosen by the embed (e.g. "text", "file-url").
    #[serde(rename = "type")]
    pub kind: String,
    /// Opaque artifact content; the host stores it untouched.
    pub content: Value,
}

/// Decode and validate one inbound message body.
///
/// Returns `Malformed` when the body is not JSON, the `type` literal is
/// wrong, the event kind is unknown, an event-specific field is absent or
/// wrong-typed, or `percent` falls outside `[0, 100]`.
pub fn decode_event(body: &str) -> Result<Envelope> {
    let env: Envelope = serde_json::from_str(body)
        .map_err(|e| EmbedLinkError::Malformed(format!("invalid event json: {e}")))?;

    if env.msg_type != INBOUND_TYPE {
        return Err(EmbedLinkError::Malformed(format!(
            "unexpected type literal: {}",
            env.msg_type
        )));
    }

    if let EmbedEvent::Progress { percent } = env.payload {
        if !(0.0..=100.0).contains(&percent) {
            return Err(EmbedLinkError::Malformed(format!(
                "percent out of range: {percent}"
            )));
        }
    }

    Ok(env)
}
