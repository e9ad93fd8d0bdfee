use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::fmt;
use uuid::Uuid;

/// Header carrying the correlation id, inbound and outbound.
pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Correlation id stored in request extensions so downstream layers and
/// handlers can attribute work to the request without re-parsing headers.
#[derive(Clone, Debug)]
pub struct RequestId(String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Assigns a correlation id to every request.
///
/// An inbound `x-request-id` header is reused unchanged so the id
/// survives hops between services; otherwise a fresh UUID is generated.
/// The resolved id is set on the request (header and extensions) for
/// downstream use and echoed back in the `X-Request-Id` response header.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let header_value = match req.headers().get(&X_REQUEST_ID) {
        Some(existing) => existing.clone(),
        None => {
            let generated = Uuid::new_v4().to_string();
            let value = HeaderValue::from_str(&generated)
                .expect("generated uuid is a valid header value");
            req.headers_mut().insert(X_REQUEST_ID.clone(), value.clone());
            value
        }
    };

    req.extensions_mut().insert(RequestId(
        header_value.to_str().unwrap_or_default().to_string(),
    ));

    let mut response = next.run(req).await;
    response
        .headers_mut()
        .insert(X_REQUEST_ID.clone(), header_value);
    response
}
