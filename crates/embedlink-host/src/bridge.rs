//! Shared bridge state for the host player.
//!
//! Owns the config, the host hook implementation, the metrics registry,
//! and the per-slide session arena. The host player drives the lifecycle:
//! open when a slide with an embed URL enters live display, close when
//! the slide leaves view or enters editing mode, close-then-open when the
//! embed URL changes.

use std::sync::Arc;

use tokio::sync::mpsc;

use embedlink_core::error::Result;

use crate::channel::{EmbedSession, SessionRegistry};
use crate::config::BridgeConfig;
use crate::dispatch::HostHooks;
use crate::obs::BridgeMetrics;
use crate::transport::{FramePort, OutboundPost, QueuePort, RawMessage};

pub struct EmbedBridge<H: HostHooks> {
    cfg: BridgeConfig,
    hooks: Arc<H>,
    metrics: Arc<BridgeMetrics>,
    sessions: SessionRegistry<H>,
}

impl<H: HostHooks> EmbedBridge<H> {
    pub fn new(cfg: BridgeConfig, hooks: Arc<H>) -> Self {
        Self {
            cfg,
            hooks,
            metrics: Arc::new(BridgeMetrics::default()),
            sessions: SessionRegistry::new(),
        }
    }

    /// Open a session for `slide_id` against the given frame port.
    ///
    /// Fails with `InvalidUrl` when the embed URL is empty or not an
    /// absolute URL; no listener is installed in that case and any
    /// previous session for the slide stays active. On success any
    /// previous session for the slide is detached first (one listener
    /// per slide).
    pub fn open(
        &self,
        slide_id: impl Into<String>,
        embed_url: impl Into<String>,
        lesson_id: impl Into<String>,
        port: Arc<dyn FramePort>,
    ) -> Result<Arc<EmbedSession<H>>> {
        let session = Arc::new(EmbedSession::open(
            self.cfg.bridge.clone(),
            slide_id.into(),
            embed_url.into(),
            lesson_id.into(),
            Arc::clone(&self.hooks),
            port,
            Arc::clone(&self.metrics),
        )?);

        self.sessions.install(Arc::clone(&session));
        Ok(session)
    }

    /// Open with a queue-backed port; the returned receiver is the
    /// outbound stream the host player's shell forwards into the frame.
    pub fn open_queued(
        &self,
        slide_id: impl Into<String>,
        embed_url: impl Into<String>,
        lesson_id: impl Into<String>,
    ) -> Result<(Arc<EmbedSession<H>>, mpsc::Receiver<OutboundPost>)> {
        let (port, rx) = QueuePort::new(self.cfg.bridge.outbound_queue);
        let session = self.open(slide_id, embed_url, lesson_id, Arc::new(port))?;
        Ok((session, rx))
    }

    /// Close the slide's session. Idempotent; returns whether a session
    /// was actually detached.
    pub fn close(&self, slide_id: &str) -> bool {
        self.sessions.remove(slide_id).is_some()
    }

    /// Route one raw inbound message to the slide's live session.
    /// Returns false when no session is open for the slide.
    pub fn deliver(&self, slide_id: &str, raw: &RawMessage) -> bool {
        self.sessions.deliver(slide_id, raw)
    }

    pub fn session(&self, slide_id: &str) -> Option<Arc<EmbedSession<H>>> {
        self.sessions.get(slide_id)
    }

    pub fn open_sessions(&self) -> usize {
        self.sessions.len()
    }

    pub fn cfg(&self) -> &BridgeConfig {
        &self.cfg
    }

    pub fn metrics(&self) -> &BridgeMetrics {
        &self.metrics
    }
}
