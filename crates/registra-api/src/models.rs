//! Request and response DTOs for both handler surfaces.
//!
//! The wire contract is fixed: auth responses use `{status, message}`
//! envelopes, student responses use bare JSON payloads, and field names are
//! camel-cased where existing clients expect them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Credentials posted to the login endpoint.
///
/// Missing fields deserialize to empty strings; an absent email matches no
/// index entry and an absent password fails the comparison, so both take the
/// regular failure branches rather than a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Email address used for the index lookup.
    #[serde(default)]
    pub email: String,
    /// Plaintext password compared against the stored attribute.
    #[serde(default)]
    pub password: String,
}

/// Body of the profile update endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdateRequest {
    /// Replacement display name; stored as `null` when the caller omits it.
    #[serde(default)]
    pub name: Option<String>,
}

/// Success envelope returned by the login endpoint.
#[derive(Debug, Serialize)]
pub struct LoginSuccess {
    /// Fixed `"success"` marker.
    pub status: &'static str,
    /// The authenticated user's full record.
    pub user: Value,
}

/// Success envelope returned by the profile update endpoint.
#[derive(Debug, Serialize)]
pub struct ProfileUpdated {
    /// Fixed `"success"` marker.
    pub status: &'static str,
    /// Human-readable confirmation.
    pub message: &'static str,
    /// Attributes the store reported as changed.
    #[serde(rename = "updatedAttributes")]
    pub updated_attributes: Value,
}

/// Query parameters accepted by the student fetch endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentKeyQuery {
    /// Primary key of the requested student.
    #[serde(rename = "studentId", default)]
    pub student_id: Option<String>,
}

/// Body of the student delete endpoint.
///
/// Only the key attribute is read; any other fields the caller sends are
/// ignored. A non-string key is treated as absent.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteStudentRequest {
    /// Primary key of the student to delete.
    #[serde(rename = "studentId", default)]
    pub student_id: Option<Value>,
}
