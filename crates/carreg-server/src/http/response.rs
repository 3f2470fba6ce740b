use hyper::{header, Body, Response, StatusCode};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorResponse<'a> {
    error: ErrorBody<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: &'a str,
}

pub(super) fn json(status: StatusCode, value: &impl Serialize) -> Response<Body> {
    match serde_json::to_vec(value) {
        Ok(body) => with_body(status, body),
        Err(error) => {
            tracing::error!(%error, "failed to encode response");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "encode_error",
                "encode error",
            )
        }
    }
}

pub(super) fn error_response(status: StatusCode, code: &str, message: &str) -> Response<Body> {
    let body = serde_json::to_vec(&ErrorResponse {
        error: ErrorBody { code, message },
    })
    .unwrap_or_else(|_| b"{\"error\":{\"code\":\"internal\",\"message\":\"internal\"}}".to_vec());
    with_body(status, body)
}

fn with_body(status: StatusCode, body: Vec<u8>) -> Response<Body> {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    response
}

/// HTTP status and error code for a failed operation.
pub(super) fn status_for(err: &carreg::Error) -> (StatusCode, &'static str) {
    if err.is_filter_error() {
        (StatusCode::BAD_REQUEST, "invalid_filter")
    } else if err.is_validation() {
        (StatusCode::BAD_REQUEST, "invalid_input")
    } else if err.is_no_fields_to_update() {
        (StatusCode::BAD_REQUEST, "no_fields_to_update")
    } else if err.is_registry_lookup() {
        (StatusCode::BAD_REQUEST, "registry_lookup_failed")
    } else if err.is_record_not_found() {
        (StatusCode::NOT_FOUND, "not_found")
    } else if err.is_already_exists() {
        (StatusCode::CONFLICT, "already_exists")
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "internal")
    }
}
