//! Request-scoped trace id, readable from any code running inside a request.
//!
//! `TraceSpan` opens the scope; error rendering and logs read it.

use std::sync::Arc;

use tokio::task_local;

/// Placeholder when no request scope is active (startup, background work).
pub const NO_TRACE_ID: &str = "unknown";

task_local! {
    static TRACE_ID: Arc<str>;
}

/// Trace id of the current request, if any.
pub fn current() -> Option<String> {
    TRACE_ID.try_with(|id| id.to_string()).ok()
}

/// Trace id of the current request, or [`NO_TRACE_ID`].
pub fn trace_id() -> String {
    current().unwrap_or_else(|| NO_TRACE_ID.to_string())
}

/// Runs `future` with `trace_id` visible to [`trace_id`].
pub async fn with_trace_id<F, R>(trace_id: impl Into<Arc<str>>, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id.into(), future).await
}
