//! Task-local trace id for the request being served.
//!
//! `RequestTrace` opens the scope; error rendering and security logs read
//! from it. Service and repo code never touch it.

use std::future::Future;

use tokio::task_local;

/// Reported when no request scope is active (startup, background tasks).
pub const UNKNOWN_TRACE_ID: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the enclosing request scope, if any.
pub fn current() -> Option<String> {
    TRACE_ID.try_with(Clone::clone).ok()
}

pub fn trace_id() -> String {
    current().unwrap_or_else(|| UNKNOWN_TRACE_ID.to_string())
}

/// Poll `future` with `trace_id` as the current trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
