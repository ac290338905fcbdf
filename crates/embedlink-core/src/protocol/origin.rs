//! Sender/recipient origin identity (scheme + host + port).
//!
//! The origin is derived once from a slide's embed URL and compared with
//! exact string equality against the sender origin of every inbound
//! message. No subdomain or scheme fuzzing.

use url::Url;

use crate::error::{EmbedLinkError, Result};

/// ASCII serialization of a tuple origin, e.g. `https://content.example`
/// or `https://content.example:8443`. Default ports are omitted, matching
/// the serialization browsers report for message senders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin(String);

impl Origin {
    /// Derive the origin from an absolute embed URL.
    ///
    /// Fails with `InvalidUrl` for empty or relative URLs and for URLs
    /// whose origin is opaque (`data:`, `blob:` without authority): an
    /// opaque origin serializes to "null" and could never satisfy the
    /// exact-equality rule, so a session must not open on one.
    pub fn parse(embed_url: &str) -> Result<Origin> {
        let trimmed = embed_url.trim();
        if trimmed.is_empty() {
            return Err(EmbedLinkError::InvalidUrl("empty embed url".into()));
        }

        let url = Url::parse(trimmed)
            .map_err(|e| EmbedLinkError::InvalidUrl(format!("{trimmed}: {e}")))?;

        let origin = url.origin();
        if !origin.is_tuple() {
            return Err(EmbedLinkError::InvalidUrl(format!(
                "{trimmed}: opaque origin cannot be matched"
            )));
        }

        Ok(Origin(origin.ascii_serialization()))
    }

    /// Exact-equality check against a transport-reported sender origin.
    pub fn matches(&self, sender_origin: &str) -> bool {
        self.0 == sender_origin
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
