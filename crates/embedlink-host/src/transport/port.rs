//! Outbound frame port (the frame's window reference).
//!
//! A port is exclusively owned by its session; no other component may
//! post into the frame. Posting is fire-and-forget: delivery is
//! best-effort and never awaited.

use tokio::sync::mpsc;

use embedlink_core::error::{EmbedLinkError, Result};

/// Raw inbound message as delivered by the host player's channel.
#[derive(Debug, Clone)]
pub struct RawMessage {
    /// Sender origin reported by the transport.
    pub origin: String,
    /// Unparsed JSON body.
    pub body: String,
}

impl RawMessage {
    pub fn new(origin: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            body: body.into(),
        }
    }
}

/// One outbound post into the embedded frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundPost {
    /// Exact target origin. The port must never widen this to a wildcard.
    pub target_origin: String,
    pub body: String,
}

/// Write half of one frame's messaging channel.
pub trait FramePort: Send + Sync {
    /// Post a message into the frame. Fire-and-forget; an error means the
    /// post could not even be queued, not that the embed rejected it.
    fn post(&self, post: OutboundPost) -> Result<()>;
}

/// Port backed by a bounded queue, drained by the host player's shell.
pub struct QueuePort {
    tx: mpsc::Sender<OutboundPost>,
}

impl QueuePort {
    /// Create the port and the receiver the shell drains.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<OutboundPost>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }
}

impl FramePort for QueuePort {
    fn post(&self, post: OutboundPost) -> Result<()> {
        self.tx
            .try_send(post)
            .map_err(|_| EmbedLinkError::InitSendFailed("frame queue closed or full".into()))
    }
}
