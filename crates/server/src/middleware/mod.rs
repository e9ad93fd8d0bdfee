pub mod capture;
pub mod request_id;

pub use capture::{CapturedBody, capture_response_body};
pub use request_id::{RequestId, X_REQUEST_ID, request_id_middleware};
