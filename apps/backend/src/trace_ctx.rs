//! Task-local trace id for the request being served.
//!
//! `RequestTrace` scopes each request future with its trace id so that
//! error responses built deep inside a handler can echo it back without
//! threading the request through.

use std::future::Future;

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current request, or `"unknown"` outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(String::clone)
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run `future` with `trace_id` as the current trace id.
pub async fn with_trace_id<F>(trace_id: String, future: F) -> F::Output
where
    F: Future,
{
    TRACE_ID.scope(trace_id, future).await
}
