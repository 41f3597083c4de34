//! Span helpers for sync operations

/// Span around one orchestrator operation
///
/// # Example
///
/// ```rust
/// use todosync_observability::sync_span;
///
/// let span = sync_span!("list.delete", "L1");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! sync_span {
    ($operation:expr) => {
        tracing::info_span!(
            "sync.operation",
            operation = $operation,
            entity.id = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
    ($operation:expr, $entity_id:expr) => {
        tracing::info_span!(
            "sync.operation",
            operation = $operation,
            entity.id = %$entity_id,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Record an error on the current span
///
/// Records the message on the current active span and logs it at `warn`.
///
/// # Example
///
/// ```rust
/// use todosync_observability::record_error;
///
/// let err = std::io::Error::other("offline");
/// record_error(&err);
/// ```
pub fn record_error<E: std::error::Error>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::warn!(error = %error, "Operation failed");
}
