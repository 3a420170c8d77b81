//! Request/response logging middleware.
//!
//! Requests are logged against their route template (`/api/users/{id}`)
//! rather than the concrete path, so user ids and member numbers stay out
//! of the `route` field. Rejected requests log at `warn`, failures at
//! `error`.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info, warn};

/// Route label used when no route matched.
const UNMATCHED_ROUTE: &str = "<unmatched>";

/// How a request ended, as recorded in the `outcome` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// 1xx-3xx.
    Served,
    /// 4xx: bad input, unknown member, or a refused token.
    Rejected,
    /// 5xx.
    Failed,
}

impl RequestOutcome {
    /// Classifies a response status.
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_server_error() {
            Self::Failed
        } else if status.is_client_error() {
            Self::Rejected
        } else {
            Self::Served
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Served => "served",
            Self::Rejected => "rejected",
            Self::Failed => "failed",
        }
    }
}

/// Logs method, route template, status, outcome, and duration.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_owned());
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let outcome = RequestOutcome::from_status(status);
    let duration_ms = start.elapsed().as_millis();

    match outcome {
        RequestOutcome::Served => info!(
            method = %method,
            route = %route,
            status = status.as_u16(),
            outcome = outcome.as_str(),
            duration_ms,
            "Registry request"
        ),
        RequestOutcome::Rejected => warn!(
            method = %method,
            route = %route,
            status = status.as_u16(),
            outcome = outcome.as_str(),
            duration_ms,
            "Registry request rejected"
        ),
        RequestOutcome::Failed => error!(
            method = %method,
            route = %route,
            status = status.as_u16(),
            outcome = outcome.as_str(),
            duration_ms,
            "Registry request failed"
        ),
    }

    response
}
