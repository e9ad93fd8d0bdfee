use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::Level;

use crate::{
    middleware::{CapturedBody, RequestId},
    state::AppState,
};

/// HTTP logger middleware that emits one structured access-log record per
/// completed request (target: http).
///
/// - INFO for 2xx/3xx responses
/// - WARN for 4xx responses
/// - ERROR for 5xx responses
///
/// Each record carries `method`, `url`, the correlation `id`, `status`
/// and `duration_ms`. Outside production, and only when
/// `SRA_LOG_RESPONSE_BODIES` is enabled, the captured response body is
/// attached as `body`.
pub async fn http_logger_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(|q| format!("?{}", q));
    let id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.as_str().to_string())
        .unwrap_or_default();
    let start = Instant::now();

    // Process the request
    let response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    let status = response.status();

    // Construct full url with query string if present
    let url = match query {
        Some(q) => format!("{}{}", path, q),
        None => path,
    };

    let message = completion_message(&method, &url, status);

    let body = if !state.config.is_production() && state.config.log.response_bodies {
        response
            .extensions()
            .get::<CapturedBody>()
            .map(|captured| captured.as_text().into_owned())
    } else {
        None
    };

    // Emit tracing event based on status code; event macro levels are
    // static, so dispatch over the classified level
    let level = level_for_status(status);
    if level == Level::ERROR {
        tracing::error!(
            target: "http",
            method = %method,
            url = %url,
            id = %id,
            status = status.as_u16(),
            duration_ms = duration_ms,
            body = body.as_deref(),
            "{message}"
        );
    } else if level == Level::WARN {
        tracing::warn!(
            target: "http",
            method = %method,
            url = %url,
            id = %id,
            status = status.as_u16(),
            duration_ms = duration_ms,
            body = body.as_deref(),
            "{message}"
        );
    } else {
        tracing::info!(
            target: "http",
            method = %method,
            url = %url,
            id = %id,
            status = status.as_u16(),
            duration_ms = duration_ms,
            body = body.as_deref(),
            "{message}"
        );
    }

    response
}

/// Severity of the access-log record for a final status code.
fn level_for_status(status: StatusCode) -> Level {
    match status.as_u16() {
        500.. => Level::ERROR,
        400..=499 => Level::WARN,
        _ => Level::INFO,
    }
}

/// Human-readable record message for a completed request.
fn completion_message(method: &Method, url: &str, status: StatusCode) -> String {
    match status.as_u16() {
        500.. => format!("Request failed with status code: {}", status.as_u16()),
        404 => "resource not found".to_string(),
        _ => format!("{} {} completed", method, url),
    }
}
