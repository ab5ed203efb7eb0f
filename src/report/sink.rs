//! Destinations for report lines.

use std::sync::{Arc, Mutex};

use tracing::{error, info};

use super::ReportEvent;

/// `tracing` target of every report line. Always enabled by
/// [`setup_tracing`](crate::lifecycle::setup_tracing).
pub const REPORT_TARGET: &str = "report";

/// Receives every event, one at a time, from the report actor.
pub trait EventSink: Send + 'static {
    fn record(&mut self, event: &ReportEvent);
}

/// Writes each event as one console line through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&mut self, event: &ReportEvent) {
        if event.is_error() {
            error!(target: REPORT_TARGET, "{event}");
        } else {
            info!(target: REPORT_TARGET, "{event}");
        }
    }
}

/// Keeps events in memory so callers can inspect a finished run.
///
/// # Example
/// ```ignore
/// let sink = MemorySink::new();
/// let system = OrderSystem::with_sink(config, sink.clone());
/// system.run_batch(ids).await;
/// system.shutdown().await?;
/// assert!(sink.lines().contains(&"Order 1: Finalizado.".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<ReportEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.events().iter().map(ToString::to_string).collect()
    }
}

impl EventSink for MemorySink {
    fn record(&mut self, event: &ReportEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
