//! Outbound init message (host -> embedded content).
//!
//! Sent exactly once per session after the embed signals `ready`, scoped
//! to the session origin as the post target. Carries the context the
//! embed needs to namespace its own state and telemetry.

use serde::{Deserialize, Serialize};

use crate::error::{EmbedLinkError, Result};

use super::{OUTBOUND_TYPE, PROTOCOL_VERSION};

/// The init handshake message.
///
/// `Deserialize` is derived so a simulated embed side can decode it in
/// round-trip tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub version: String,
    pub payload: InitPayload,
}

/// Context handed to the embed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitPayload {
    pub slide_id: String,
    pub lesson_id: String,
}

impl InitMessage {
    pub fn new(slide_id: impl Into<String>, lesson_id: impl Into<String>) -> Self {
        Self {
            msg_type: OUTBOUND_TYPE.to_string(),
            version: PROTOCOL_VERSION.to_string(),
            payload: InitPayload {
                slide_id: slide_id.into(),
                lesson_id: lesson_id.into(),
            },
        }
    }

    /// Serialize to the wire body.
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| EmbedLinkError::Internal(format!("init encode failed: {e}")))
    }
}
