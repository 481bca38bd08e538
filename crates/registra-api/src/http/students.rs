//! Student CRUD handlers.
//!
//! Add and update share the same full-overwrite primitive: a second add with
//! an existing `studentId` silently replaces the stored record, and neither
//! operation merges attributes.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::Value;
use tracing::error;

use registra_store::StudentRecord;

use crate::http::errors::ApiError;
use crate::http::render::collapse_integral_floats;
use crate::models::{DeleteStudentRequest, StudentKeyQuery};
use crate::state::ApiState;

/// `GET /students?studentId=ID`: fetch one record by primary key.
pub(crate) async fn get_student(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<StudentKeyQuery>,
) -> Result<Json<Value>, ApiError> {
    let Some(student_id) = query.student_id else {
        return Err(ApiError::bad_request(
            "Missing studentId in query parameters",
        ));
    };

    let record = state.store.get(&student_id).await.map_err(|err| {
        error!(error = %err, student_id = %student_id, "student fetch failed");
        ApiError::store_failure("Error retrieving student", &err)
    })?;

    record.map_or_else(
        || {
            Err(ApiError::not_found(format!(
                "Student with ID {student_id} not found."
            )))
        },
        |record| Ok(Json(collapse_integral_floats(record.into()))),
    )
}

/// `POST /students`: write a full record.
pub(crate) async fn add_student(
    State(state): State<Arc<ApiState>>,
    Json(record): Json<StudentRecord>,
) -> Result<Json<String>, ApiError> {
    let student_id = record.student_id().map(str::to_owned);
    state.store.put(record).await.map_err(|err| {
        error!(error = %err, "student insert failed");
        ApiError::store_failure("Error adding student", &err)
    })?;

    // A put without the key attribute fails above, so the id is present here.
    let student_id = student_id.unwrap_or_default();
    Ok(Json(format!("Student {student_id} added successfully.")))
}

/// `PUT /students`: replace a full record.
///
/// Same overwrite primitive as [`add_student`]; only the confirmation text
/// differs.
pub(crate) async fn update_student(
    State(state): State<Arc<ApiState>>,
    Json(record): Json<StudentRecord>,
) -> Result<Json<String>, ApiError> {
    let student_id = record.student_id().map(str::to_owned);
    state.store.put(record).await.map_err(|err| {
        error!(error = %err, "student overwrite failed");
        ApiError::store_failure("Error updating student", &err)
    })?;

    let student_id = student_id.unwrap_or_default();
    Ok(Json(format!("Student {student_id} updated successfully.")))
}

/// `DELETE /students`: remove a record by the key carried in the body.
pub(crate) async fn delete_student(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<DeleteStudentRequest>,
) -> Result<Json<String>, ApiError> {
    let Some(student_id) = request.student_id.as_ref().and_then(Value::as_str) else {
        return Err(ApiError::bad_request("Missing studentId in request body"));
    };

    state.store.delete(student_id).await.map_err(|err| {
        error!(error = %err, student_id = %student_id, "student delete failed");
        ApiError::store_failure("Error deleting student", &err)
    })?;

    Ok(Json(format!(
        "Student with ID {student_id} deleted successfully."
    )))
}
