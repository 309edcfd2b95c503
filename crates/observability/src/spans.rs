//! Span helpers for the store client and the resolver.

/// Create a span for a backing store operation.
///
/// Declares `duration_ms`, `error` and `error.message` so that
/// [`record_duration`] and [`record_error`] can fill them in later.
///
/// # Example
///
/// ```rust
/// use tema_observability::store_span;
///
/// let span = store_span!("fetch_primary", "configuracoes");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! store_span {
    ($operation:expr, $table:expr) => {
        tracing::info_span!(
            "store.operation",
            store.operation = $operation,
            store.table = $table,
            duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Create the span a theme change listener runs in.
///
/// # Example
///
/// ```rust
/// use tema_observability::subscription_span;
///
/// let span = subscription_span!("0b7c6f2e");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! subscription_span {
    ($subscription_id:expr) => {
        tracing::info_span!(
            "resolver.listen",
            subscription.id = tracing::field::display($subscription_id),
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Record an error on the current span.
///
/// Only the span fields are filled in. Whoever handles the error decides
/// whether it is worth a log line.
pub fn record_error<E: std::error::Error>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::debug!(error = %error, "Operation failed");
}

/// Record latency on the current span under `key`.
///
/// ```rust
/// use tema_observability::record_duration;
/// use std::time::Instant;
///
/// let start = Instant::now();
/// record_duration("duration_ms", start.elapsed());
/// ```
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
