//! Event dispatcher: validated envelope -> host callback.
//!
//! Pure mapping from the wire event vocabulary to the host's normalized
//! progress vocabulary. Dispatch never throws: a panicking hook is caught
//! at this boundary and logged, never propagated into the listener (an
//! unhandled failure there would silently disable all future message
//! handling for the session).

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use embedlink_core::progress::ProgressEvent;
use embedlink_core::protocol::inbound::EmbedEvent;

use crate::channel::InitSender;
use crate::obs::BridgeMetrics;

/// What the ready hook decided about the handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyAction {
    /// Send the init message now (default policy).
    SendInit,
    /// The host keeps the capability and triggers the handshake itself.
    Deferred,
}

/// Host player's callback surface.
///
/// Implementations must not block: dispatch runs inside the message
/// listener. Hooks may panic without destabilizing the session.
pub trait HostHooks: Send + Sync + 'static {
    /// Called on every `ready` event with the `sendInit` capability.
    ///
    /// The default implementation keeps handshake control in the channel
    /// (init is sent immediately, once per session). Override and return
    /// [`ReadyAction::Deferred`] to decide yourself when to handshake;
    /// the capability may be cloned and stored for a later trigger.
    fn on_ready(&self, slide_id: &str, embed_url: &str, init: &InitSender) -> ReadyAction {
        let _ = (slide_id, embed_url, init);
        ReadyAction::SendInit
    }

    /// Receives every normalized progress / completion / submission event.
    fn on_progress(&self, slide_id: &str, event: ProgressEvent);
}

/// Routes validated events for one session's hooks.
pub struct Dispatcher<H: HostHooks> {
    hooks: Arc<H>,
    metrics: Arc<BridgeMetrics>,
}

impl<H: HostHooks> Dispatcher<H> {
    pub fn new(hooks: Arc<H>, metrics: Arc<BridgeMetrics>) -> Self {
        Self { hooks, metrics }
    }

    /// One case per event kind; exhaustiveness is compiler-checked.
    pub fn dispatch(
        &self,
        slide_id: &str,
        embed_url: &str,
        init: &InitSender,
        event: EmbedEvent,
    ) {
        self.metrics.events_dispatched.inc(&[("event", event.kind())]);

        match event {
            EmbedEvent::Ready => {
                let action = self.guard(slide_id, "on_ready", || {
                    self.hooks.on_ready(slide_id, embed_url, init)
                });
                // A panicked ready hook leaves the handshake to the host,
                // same as an explicit Deferred.
                if action == Some(ReadyAction::SendInit) && !init.handshake_sent() {
                    let _ = init.send();
                }
            }
            EmbedEvent::Started => {
                self.forward(slide_id, ProgressEvent::started());
            }
            EmbedEvent::Progress { percent } => {
                self.forward(slide_id, ProgressEvent::in_progress(percent));
            }
            EmbedEvent::Completed { score } => {
                self.forward(slide_id, ProgressEvent::completed(score));
            }
            EmbedEvent::Submitted { submission } => {
                self.forward(
                    slide_id,
                    ProgressEvent::submission(submission.kind, submission.content),
                );
            }
            EmbedEvent::Error { message } => {
                // Diagnostic only; no host callback is invoked.
                tracing::warn!(slide = %slide_id, %message, "embed reported an error");
            }
        }
    }

    fn forward(&self, slide_id: &str, event: ProgressEvent) {
        self.guard(slide_id, "on_progress", move || {
            self.hooks.on_progress(slide_id, event)
        });
    }

    /// Run a hook inside a panic boundary. Returns None if it panicked.
    fn guard<T>(&self, slide_id: &str, hook: &'static str, f: impl FnOnce() -> T) -> Option<T> {
        match catch_unwind(AssertUnwindSafe(f)) {
            Ok(v) => Some(v),
            Err(_) => {
                self.metrics.callback_failures.inc(&[("hook", hook)]);
                tracing::warn!(slide = %slide_id, hook, "host callback panicked; event ignored");
                None
            }
        }
    }
}
