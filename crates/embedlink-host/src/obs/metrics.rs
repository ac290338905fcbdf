//! Minimal metrics registry for the bridge.
//!
//! No external metrics crates; labeled counters backed by `DashMap` with
//! labels flattened into sorted key vectors for deterministic ordering.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for a label set (0 if never incremented).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} counter", name);
        for r in self.map.iter() {
            let key = r.key();
            let val = r.value().load(Ordering::Relaxed);
            let label_str = key
                .iter()
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                .collect::<Vec<_>>()
                .join(",");
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
        }
    }
}

/// Counters the bridge maintains for one host process.
#[derive(Default)]
pub struct BridgeMetrics {
    /// Inbound messages dropped before dispatch, by reason code.
    pub inbound_dropped: CounterVec,
    /// Validated events routed to the dispatcher, by event kind.
    pub events_dispatched: CounterVec,
    /// Init send attempts, by result.
    pub init_sent: CounterVec,
    /// Host callbacks that panicked inside dispatch, by hook.
    pub callback_failures: CounterVec,
}

impl BridgeMetrics {
    /// Render all registered metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.inbound_dropped
            .render("embedlink_inbound_dropped_total", &mut out);
        self.events_dispatched
            .render("embedlink_events_dispatched_total", &mut out);
        self.init_sent.render("embedlink_init_sent_total", &mut out);
        self.callback_failures
            .render("embedlink_callback_failures_total", &mut out);
        out
    }
}
