//! Session registry: `slide_id -> EmbedSession`.
//!
//! Only one listener may be active per slide at a time; opening over an
//! existing slide replaces its session. Close is idempotent. A message
//! delivered after close finds no session at all, so post-close drops are
//! structural and race-free rather than a flag check.

use std::sync::Arc;

use dashmap::DashMap;

use crate::channel::session::EmbedSession;
use crate::dispatch::HostHooks;
use crate::transport::RawMessage;

pub struct SessionRegistry<H: HostHooks> {
    sessions: DashMap<String, Arc<EmbedSession<H>>>,
}

impl<H: HostHooks> SessionRegistry<H> {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Install a freshly opened session, detaching any predecessor for
    /// the same slide. Returns the replaced session, if any.
    pub fn install(&self, session: Arc<EmbedSession<H>>) -> Option<Arc<EmbedSession<H>>> {
        self.sessions
            .insert(session.slide_id().to_string(), session)
            .map(|old| {
                tracing::debug!(slide = %old.slide_id(), "previous session detached");
                old
            })
    }

    /// Detach the slide's session. Safe to call repeatedly.
    pub fn remove(&self, slide_id: &str) -> Option<Arc<EmbedSession<H>>> {
        self.sessions.remove(slide_id).map(|(_, s)| s)
    }

    pub fn get(&self, slide_id: &str) -> Option<Arc<EmbedSession<H>>> {
        self.sessions.get(slide_id).map(|r| Arc::clone(r.value()))
    }

    /// Route one raw inbound message to the slide's live session.
    /// Returns false when no session is open (message dropped).
    pub fn deliver(&self, slide_id: &str, raw: &RawMessage) -> bool {
        match self.get(slide_id) {
            Some(session) => {
                session.handle_message(raw);
                true
            }
            None => {
                tracing::trace!(slide = %slide_id, "message for closed session dropped");
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl<H: HostHooks> Default for SessionRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
