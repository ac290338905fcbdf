use serde::Deserialize;

use embedlink_core::error::{EmbedLinkError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeConfig {
    pub version: u32,

    #[serde(default)]
    pub bridge: BridgeSection,
}

impl BridgeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(EmbedLinkError::UnsupportedVersion(format!(
                "config version {}",
                self.version
            )));
        }

        self.bridge.validate()?;

        Ok(())
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            bridge: BridgeSection::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeSection {
    /// Cheap length gate applied before any JSON decode.
    #[serde(default = "default_max_message_bytes")]
    pub max_message_bytes: usize,

    /// Reject inbound envelopes whose major version is not the supported
    /// one. Disabling accepts any version string.
    #[serde(default = "default_strict_version")]
    pub strict_version: bool,

    /// Capacity of the per-frame outbound queue.
    #[serde(default = "default_outbound_queue")]
    pub outbound_queue: usize,
}

impl Default for BridgeSection {
    fn default() -> Self {
        Self {
            max_message_bytes: default_max_message_bytes(),
            strict_version: default_strict_version(),
            outbound_queue: default_outbound_queue(),
        }
    }
}

impl BridgeSection {
    pub fn validate(&self) -> Result<()> {
        if !(1024..=1_048_576).contains(&self.max_message_bytes) {
            return Err(EmbedLinkError::Malformed(
                "bridge.max_message_bytes must be between 1024 and 1048576".into(),
            ));
        }
        if !(1..=65536).contains(&self.outbound_queue) {
            return Err(EmbedLinkError::Malformed(
                "bridge.outbound_queue must be between 1 and 65536".into(),
            ));
        }
        Ok(())
    }
}

fn default_max_message_bytes() -> usize {
    65536
}
fn default_strict_version() -> bool {
    true
}
fn default_outbound_queue() -> usize {
    64
}
