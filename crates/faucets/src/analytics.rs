use faucets_core::analytics::AnalyticsEvent;

/// Destination for analytics events.
///
/// Sending never fails from the caller's point of view.
pub trait AnalyticsSink {
    fn send(&self, event: &AnalyticsEvent);
}

/// Writes each event as one JSON line through `log`, target `analytics`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn send(&self, event: &AnalyticsEvent) {
        match serde_json::to_string(event) {
            Ok(json) => log::info!(target: "analytics", "{json}"),
            Err(e) => log::debug!(target: "analytics", "Dropping {} event: {e}", event.name()),
        }
    }
}

/// Keeps events in memory, for tests and for `--events` summaries.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: std::sync::Mutex<Vec<AnalyticsEvent>>,
}

impl MemorySink {
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl AnalyticsSink for MemorySink {
    fn send(&self, event: &AnalyticsEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

impl<A: AnalyticsSink, B: AnalyticsSink> AnalyticsSink for (A, B) {
    fn send(&self, event: &AnalyticsEvent) {
        self.0.send(event);
        self.1.send(event);
    }
}

/// A sink that may be switched off.
impl<A: AnalyticsSink> AnalyticsSink for Option<A> {
    fn send(&self, event: &AnalyticsEvent) {
        if let Some(sink) = self {
            sink.send(event);
        }
    }
}

/// Send through the default sink.
pub fn emit(event: &AnalyticsEvent) {
    LogSink.send(event);
}

pub fn emit_all<S: AnalyticsSink + ?Sized>(sink: &S, events: &[AnalyticsEvent]) {
    for event in events {
        sink.send(event);
    }
}
