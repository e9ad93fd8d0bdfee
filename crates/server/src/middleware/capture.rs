use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;
use std::borrow::Cow;

use crate::state::AppState;

/// Response body copied aside for inspection by outer middleware, most
/// notably the access logger.
#[derive(Clone, Debug)]
pub struct CapturedBody(Bytes);

impl CapturedBody {
    pub fn bytes(&self) -> &Bytes {
        &self.0
    }

    /// Lossy text view for log records.
    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

/// Copies the outgoing response body into the response extensions.
///
/// Runs only outside production: the body is buffered, an owned copy is
/// attached as [`CapturedBody`], and the response is rebuilt from the
/// same bytes so the client receives an identical payload. In production
/// the response passes through untouched.
pub async fn capture_response_body(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    if state.config.is_production() {
        return next.run(req).await;
    }

    let response = next.run(req).await;
    let (mut parts, body) = response.into_parts();

    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => return Response::from_parts(parts, Body::empty()),
    };

    parts.extensions.insert(CapturedBody(bytes.clone()));
    Response::from_parts(parts, Body::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        http::{HeaderValue, StatusCode},
        middleware,
        routing::get,
    };
    use config::{Environment, ServiceConfig};
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    fn state(environment: Environment) -> AppState {
        AppState {
            config: ServiceConfig {
                environment,
                ..Default::default()
            },
        }
    }

    /// Sits outside the capture layer and surfaces what it observed in a
    /// response header, so assertions can see the side channel.
    async fn probe(req: Request, next: Next) -> Response {
        let mut response = next.run(req).await;
        if let Some(captured) = response.extensions().get::<CapturedBody>() {
            let value = HeaderValue::from_str(&captured.as_text()).unwrap();
            response.headers_mut().insert("x-observed-body", value);
        }
        response
    }

    fn app(environment: Environment) -> Router {
        async fn handler() -> Json<serde_json::Value> {
            Json(json!({ "ok": true }))
        }

        Router::new()
            .route("/test", get(handler))
            .layer(middleware::from_fn_with_state(
                state(environment),
                capture_response_body,
            ))
            .layer(middleware::from_fn(probe))
    }

    #[tokio::test]
    async fn test_development_captures_identical_copy() {
        let response = app(Environment::Development)
            .oneshot(
                axum::http::Request::builder()
                    .uri("/test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let observed = response
            .headers()
            .get("x-observed-body")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let sent = String::from_utf8(bytes.to_vec()).unwrap();

        assert_eq!(sent, r#"{"ok":true}"#);
        assert_eq!(observed.as_deref(), Some(sent.as_str()));
    }

    #[tokio::test]
    async fn test_production_makes_no_copy() {
        let response = app(Environment::Production)
            .oneshot(
                axum::http::Request::builder()
                    .uri("/test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get("x-observed-body").is_none());

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(bytes.as_ref(), br#"{"ok":true}"#);
    }
}
