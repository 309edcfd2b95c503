//! Tracing layer that forwards each event as one formatted line to a [`LogSink`].
//!
//! The CLI uses it to mirror resolver logs into its JSON output stream.

use std::fmt::Write;

use tracing::field::Visit;
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;

const MAX_LEN: usize = 32_000;

/// Builds a single line from an event: "[LEVEL] target: message key=value ..."
struct LineVisitor {
    buf: String,
}

impl LineVisitor {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(256),
        }
    }

    fn separate(&mut self) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
    }

    fn finish(self) -> String {
        self.buf
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.separate();
        if field.name() == "message" {
            self.buf.push_str(value);
        } else {
            write!(self.buf, "{}={:?}", field.name(), value).ok();
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.separate();
        if field.name() == "message" {
            write!(self.buf, "{:?}", value).ok();
        } else {
            write!(self.buf, "{}={:?}", field.name(), value).ok();
        }
    }
}

/// Layer that sends each formatted event to `sink` when present. The sink must not block.
pub fn sink_layer(sink: Option<LogSink>) -> SinkLayer {
    SinkLayer { sink }
}

#[derive(Clone)]
pub struct SinkLayer {
    sink: Option<LogSink>,
}

impl<S> Layer<S> for SinkLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let Some(sink) = self.sink.as_ref() else {
            return;
        };
        let level = *event.metadata().level();
        let target = event.metadata().target();
        let mut visitor = LineVisitor::new();
        event.record(&mut visitor);
        let rest = visitor.finish();
        let line = if rest.is_empty() {
            format!("[{}] {}", level, target)
        } else {
            format!("[{}] {}: {}", level, target, rest)
        };
        let line = if line.len() > MAX_LEN {
            let trunc: String = line.chars().take(MAX_LEN).collect();
            format!("{}… ({} chars)", trunc, line.len())
        } else {
            line
        };
        sink(line);
    }
}
