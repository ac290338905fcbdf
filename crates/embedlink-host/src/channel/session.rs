//! One slide's live binding to an embedded frame.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use embedlink_core::error::{DiagCode, EmbedLinkError, Result};
use embedlink_core::protocol::inbound::decode_event;
use embedlink_core::protocol::origin::Origin;
use embedlink_core::protocol::outbound::InitMessage;
use embedlink_core::protocol::SUPPORTED_MAJOR;

use crate::config::BridgeSection;
use crate::dispatch::{Dispatcher, HostHooks};
use crate::obs::BridgeMetrics;
use crate::transport::{FramePort, OutboundPost, RawMessage};

/// `sendInit` capability bound to one session's frame port.
///
/// Cloneable so a deferring ready hook can stash it and trigger the
/// handshake later. An explicit `send` from the host is allowed to
/// re-send; the default dispatch path is guarded by `handshake_sent`.
#[derive(Clone)]
pub struct InitSender {
    inner: Arc<InitInner>,
}

struct InitInner {
    slide_id: String,
    lesson_id: String,
    embed_url: String,
    port: Arc<dyn FramePort>,
    handshake_sent: AtomicBool,
    metrics: Arc<BridgeMetrics>,
}

impl InitSender {
    fn new(
        slide_id: String,
        lesson_id: String,
        embed_url: String,
        port: Arc<dyn FramePort>,
        metrics: Arc<BridgeMetrics>,
    ) -> Self {
        Self {
            inner: Arc::new(InitInner {
                slide_id,
                lesson_id,
                embed_url,
                port,
                handshake_sent: AtomicBool::new(false),
                metrics,
            }),
        }
    }

    /// True once an init message has been posted for this session.
    pub fn handshake_sent(&self) -> bool {
        self.inner.handshake_sent.load(Ordering::Acquire)
    }

    /// Post the init message, targeted at the origin derived from the
    /// embed URL at call time (never a wildcard target).
    ///
    /// Soft failure: if the URL no longer parses or the post cannot be
    /// queued, the attempt is logged as `INIT_SEND_FAILED` and
    /// `handshake_sent` stays false, so a host-driven retry on a later
    /// `ready` remains possible. Retries are callback-driven, never
    /// automatic.
    pub fn send(&self) -> Result<()> {
        let target = match Origin::parse(&self.inner.embed_url) {
            Ok(o) => o,
            Err(e) => {
                self.inner
                    .metrics
                    .init_sent
                    .inc(&[("result", DiagCode::InitSendFailed.as_str())]);
                tracing::warn!(
                    slide = %self.inner.slide_id,
                    error = %e,
                    "init send skipped: embed url no longer parses"
                );
                return Err(EmbedLinkError::InitSendFailed(e.to_string()));
            }
        };

        let body =
            InitMessage::new(self.inner.slide_id.as_str(), self.inner.lesson_id.as_str())
                .encode()?;

        if let Err(e) = self.inner.port.post(OutboundPost {
            target_origin: target.as_str().to_string(),
            body,
        }) {
            self.inner
                .metrics
                .init_sent
                .inc(&[("result", DiagCode::InitSendFailed.as_str())]);
            tracing::warn!(slide = %self.inner.slide_id, error = %e, "init post failed");
            return Err(e);
        }

        self.inner.handshake_sent.store(true, Ordering::Release);
        self.inner.metrics.init_sent.inc(&[("result", "ok")]);
        tracing::debug!(slide = %self.inner.slide_id, target = %target, "init sent");
        Ok(())
    }
}

/// Live binding between one slide and one embedded frame.
///
/// Created when a slide with a non-empty embed URL enters live display;
/// destroyed (via the registry) whenever the URL changes, editing mode
/// toggles on, or the slide leaves view. `embed_origin` is computed once
/// at open and immutable for the session's lifetime.
pub struct EmbedSession<H: HostHooks> {
    slide_id: String,
    embed_url: String,
    embed_origin: Origin,
    init: InitSender,
    dispatcher: Dispatcher<H>,
    limits: BridgeSection,
    metrics: Arc<BridgeMetrics>,
}

impl<H: HostHooks> std::fmt::Debug for EmbedSession<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbedSession")
            .field("slide_id", &self.slide_id)
            .field("embed_url", &self.embed_url)
            .field("embed_origin", &self.embed_origin)
            .finish_non_exhaustive()
    }
}

impl<H: HostHooks> EmbedSession<H> {
    /// Open the session: parse the URL, derive the origin, bind the port.
    ///
    /// Fails with `InvalidUrl` when the URL is empty or not absolute; the
    /// channel then stays closed and no listener exists.
    pub(crate) fn open(
        limits: BridgeSection,
        slide_id: String,
        embed_url: String,
        lesson_id: String,
        hooks: Arc<H>,
        port: Arc<dyn FramePort>,
        metrics: Arc<BridgeMetrics>,
    ) -> Result<Self> {
        let embed_origin = Origin::parse(&embed_url)?;

        let init = InitSender::new(
            slide_id.clone(),
            lesson_id,
            embed_url.clone(),
            port,
            Arc::clone(&metrics),
        );

        tracing::debug!(slide = %slide_id, origin = %embed_origin, "embed session opened");

        Ok(Self {
            slide_id,
            embed_url,
            embed_origin,
            init,
            dispatcher: Dispatcher::new(hooks, Arc::clone(&metrics)),
            limits,
            metrics,
        })
    }

    pub fn slide_id(&self) -> &str {
        &self.slide_id
    }

    pub fn embed_url(&self) -> &str {
        &self.embed_url
    }

    pub fn embed_origin(&self) -> &Origin {
        &self.embed_origin
    }

    /// The session's `sendInit` capability.
    pub fn init_sender(&self) -> &InitSender {
        &self.init
    }

    /// Listener body for one raw inbound message.
    ///
    /// Security boundary: the sender origin must equal the session origin
    /// exactly; anything else is dropped with no side effect. Schema
    /// failures and rejected versions are dropped with a diagnostic log,
    /// never surfaced to the user.
    pub fn handle_message(&self, raw: &RawMessage) {
        if !self.embed_origin.matches(&raw.origin) {
            // Expected background noise on a shared channel; not an error.
            self.metrics
                .inbound_dropped
                .inc(&[("reason", DiagCode::OriginMismatch.as_str())]);
            tracing::trace!(
                slide = %self.slide_id,
                sender = %raw.origin,
                "foreign-origin message dropped"
            );
            return;
        }

        // Cheap length gate before any JSON work.
        if raw.body.len() > self.limits.max_message_bytes {
            self.metrics
                .inbound_dropped
                .inc(&[("reason", DiagCode::Malformed.as_str())]);
            tracing::debug!(
                slide = %self.slide_id,
                bytes = raw.body.len(),
                "oversized message dropped"
            );
            return;
        }

        let env = match decode_event(&raw.body) {
            Ok(env) => env,
            Err(e) => {
                self.metrics
                    .inbound_dropped
                    .inc(&[("reason", e.diag_code().as_str())]);
                tracing::debug!(slide = %self.slide_id, error = %e, "malformed message dropped");
                return;
            }
        };

        if self.limits.strict_version && env.major() != SUPPORTED_MAJOR {
            self.metrics
                .inbound_dropped
                .inc(&[("reason", DiagCode::UnsupportedVersion.as_str())]);
            tracing::debug!(
                slide = %self.slide_id,
                version = %env.version,
                "unsupported protocol version dropped"
            );
            return;
        }

        self.dispatcher
            .dispatch(&self.slide_id, &self.embed_url, &self.init, env.payload);
    }
}
