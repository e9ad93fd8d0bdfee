use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
};

use crate::{
    handlers::not_found::not_found,
    logging::http_logger_middleware,
    middleware::{capture_response_body, request_id_middleware},
    routes,
    state::AppState,
};

/// Assemble the router with the request-logging pipeline.
///
/// Layer order, outermost first: correlation id assignment, access
/// logging, response body capture. The capture layer sits closest to the
/// handlers so the logger above it can read the captured body off the
/// response on its way out.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .fallback(not_found)
        .layer(from_fn_with_state(state.clone(), capture_response_body))
        .layer(from_fn_with_state(state.clone(), http_logger_middleware))
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
