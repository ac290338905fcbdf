//! Shared fixtures for host integration tests.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::{Arc, Mutex};

use embedlink_core::error::Result;
use embedlink_core::progress::ProgressEvent;
use embedlink_host::channel::InitSender;
use embedlink_host::dispatch::{HostHooks, ReadyAction};
use embedlink_host::transport::{FramePort, OutboundPost, RawMessage};

pub const EMBED_URL: &str = "https://trusted.example/activities/7";
pub const EMBED_ORIGIN: &str = "https://trusted.example";
pub const EVIL_ORIGIN: &str = "https://evil.example";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Wire body for an inbound event with the standard envelope.
pub fn event_body(payload: &str) -> String {
    format!(r#"{{"type":"lms-embed-event","version":"1.0","payload":{payload}}}"#)
}

pub fn msg(origin: &str, payload: &str) -> RawMessage {
    RawMessage::new(origin, event_body(payload))
}

/// Port that records every post for assertions.
#[derive(Default)]
pub struct CollectPort {
    pub posts: Mutex<Vec<OutboundPost>>,
}

impl CollectPort {
    pub fn posted(&self) -> Vec<OutboundPost> {
        self.posts.lock().unwrap().clone()
    }
}

impl FramePort for CollectPort {
    fn post(&self, post: OutboundPost) -> Result<()> {
        self.posts.lock().unwrap().push(post);
        Ok(())
    }
}

/// Hooks with the default ready policy; records every progress event.
#[derive(Default)]
pub struct RecordingHooks {
    pub events: Mutex<Vec<(String, ProgressEvent)>>,
}

impl RecordingHooks {
    pub fn recorded(&self) -> Vec<(String, ProgressEvent)> {
        self.events.lock().unwrap().clone()
    }
}

impl HostHooks for RecordingHooks {
    fn on_progress(&self, slide_id: &str, event: ProgressEvent) {
        self.events.lock().unwrap().push((slide_id.to_string(), event));
    }
}

/// Hooks that keep handshake control: stashes the capability, never
/// auto-sends.
#[derive(Default)]
pub struct DeferringHooks {
    pub stashed: Mutex<Option<InitSender>>,
    pub events: Mutex<Vec<(String, ProgressEvent)>>,
}

impl HostHooks for DeferringHooks {
    fn on_ready(&self, _slide_id: &str, _embed_url: &str, init: &InitSender) -> ReadyAction {
        *self.stashed.lock().unwrap() = Some(init.clone());
        ReadyAction::Deferred
    }

    fn on_progress(&self, slide_id: &str, event: ProgressEvent) {
        self.events.lock().unwrap().push((slide_id.to_string(), event));
    }
}

/// Hooks whose progress callback always panics.
#[derive(Default)]
pub struct PanickingHooks;

impl HostHooks for PanickingHooks {
    fn on_progress(&self, _slide_id: &str, _event: ProgressEvent) {
        panic!("host callback exploded");
    }
}

pub fn arc<T>(v: T) -> Arc<T> {
    Arc::new(v)
}
