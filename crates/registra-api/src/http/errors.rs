//! API error wrapper mapped onto the service's wire contract.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use registra_store::StoreError;

/// Structured API error carrying the exact response body for its branch.
///
/// The student surface answers with bare JSON strings; the auth surface with
/// `{status, message}` envelopes. Constructors pick the right shape so
/// handlers only name the branch they hit.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: Value,
}

impl ApiError {
    fn message(status: StatusCode, text: impl Into<String>) -> Self {
        Self {
            status,
            body: Value::String(text.into()),
        }
    }

    fn envelope(status: StatusCode, outcome: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({"status": outcome, "message": message.into()}),
        }
    }

    /// 400 with the given plain message.
    pub fn bad_request(text: impl Into<String>) -> Self {
        Self::message(StatusCode::BAD_REQUEST, text)
    }

    /// 404 with the given plain message.
    pub fn not_found(text: impl Into<String>) -> Self {
        Self::message(StatusCode::NOT_FOUND, text)
    }

    /// 405 for any unmapped method/path pair.
    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self::message(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
    }

    /// 500 carrying the store failure detail behind an operation prefix.
    #[must_use]
    pub fn store_failure(context: &'static str, err: &StoreError) -> Self {
        Self::message(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("{context}: {err}"),
        )
    }

    /// 404 login branch: no record matched the email lookup.
    #[must_use]
    pub fn user_not_found() -> Self {
        Self::envelope(StatusCode::NOT_FOUND, "fail", "User not found")
    }

    /// 401 login branch: the password comparison failed.
    #[must_use]
    pub fn incorrect_password() -> Self {
        Self::envelope(StatusCode::UNAUTHORIZED, "fail", "Incorrect password")
    }

    /// 500 auth branch carrying the store failure detail.
    #[must_use]
    pub fn auth_failure(err: &StoreError) -> Self {
        Self::envelope(
            StatusCode::INTERNAL_SERVER_ERROR,
            "error",
            format!("Error: {err}"),
        )
    }

    /// Status this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
