//! JSON response formatting.
//!
//! Bodies are encoded fully before anything is sent, so an encoding failure
//! can still become a clean `500`.

use axum::{
    http::{
        HeaderValue, StatusCode,
        header::{ALLOW, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use log::error;
use serde::Serialize;

/// Message returned when an exact-title lookup finds nothing.
pub const NOT_FOUND_MESSAGE: &str = "Data element not found";
/// Message returned for methods other than `GET` and `HEAD`.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
/// Body sent when a response cannot be encoded.
pub const ENCODE_FAILURE_BODY: &str = r#"{"error":"Failed to encode JSON"}"#;

const APPLICATION_JSON: &str = "application/json";
const ALLOWED_METHODS: &str = "GET,HEAD";

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Encode `body` with `status`, degrading to a `500` if encoding fails.
pub(crate) fn json<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => raw_json(status, bytes),
        Err(err) => {
            error!("failed to encode response body: {err}");
            raw_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                ENCODE_FAILURE_BODY.as_bytes().to_vec(),
            )
        }
    }
}

pub(crate) fn not_found() -> Response {
    json(
        StatusCode::NOT_FOUND,
        &ErrorBody {
            error: NOT_FOUND_MESSAGE,
        },
    )
}

pub(crate) fn method_not_allowed() -> Response {
    let mut response = json(
        StatusCode::METHOD_NOT_ALLOWED,
        &ErrorBody {
            error: METHOD_NOT_ALLOWED_MESSAGE,
        },
    );
    response
        .headers_mut()
        .insert(ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
    response
}

fn raw_json(status: StatusCode, bytes: Vec<u8>) -> Response {
    (status, [(CONTENT_TYPE, APPLICATION_JSON)], bytes).into_response()
}

#[cfg(test)]
mod tests {
    #![expect(clippy::expect_used, reason = "in-memory bodies are always readable")]

    use super::*;
    use axum::body::to_bytes;
    use serde::Serializer;

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refusing to encode"))
        }
    }

    async fn body_of(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    #[tokio::test]
    async fn encode_failures_become_server_errors() {
        let response = json(StatusCode::OK, &Unencodable);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some(APPLICATION_JSON)
        );
        assert_eq!(body_of(response).await, ENCODE_FAILURE_BODY);
    }

    #[tokio::test]
    async fn not_found_carries_an_error_message() {
        let response = not_found();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_of(response).await,
            r#"{"error":"Data element not found"}"#
        );
    }

    #[tokio::test]
    async fn method_not_allowed_lists_the_allowed_methods() {
        let response = method_not_allowed();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response
                .headers()
                .get(ALLOW)
                .and_then(|value| value.to_str().ok()),
            Some(ALLOWED_METHODS)
        );
        assert_eq!(body_of(response).await, r#"{"error":"Method not allowed"}"#);
    }
}
