//! Login and profile handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;
use tracing::error;

use crate::http::errors::ApiError;
use crate::http::render::collapse_integral_floats;
use crate::models::{LoginRequest, LoginSuccess, ProfileUpdateRequest, ProfileUpdated};
use crate::state::ApiState;

/// Attribute matched by the login lookup.
const FIELD_EMAIL: &str = "email";
/// Attribute holding the stored password.
const FIELD_PASSWORD: &str = "password";
/// Attribute written by the profile update.
const FIELD_NAME: &str = "name";

/// `POST /users/login`: authenticate by email and password.
///
/// Credentials are compared in plaintext against the stored attribute; a
/// record without a password attribute never matches.
pub(crate) async fn authenticate(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginSuccess>, ApiError> {
    let matches = state
        .store
        .query_by_index(&state.email_index, FIELD_EMAIL, &request.email)
        .await
        .map_err(|err| {
            error!(error = %err, "login lookup failed");
            ApiError::auth_failure(&err)
        })?;

    let Some(user) = matches.into_iter().next() else {
        return Err(ApiError::user_not_found());
    };
    if user.get_str(FIELD_PASSWORD) != Some(request.password.as_str()) {
        return Err(ApiError::incorrect_password());
    }

    Ok(Json(LoginSuccess {
        status: "success",
        user: collapse_integral_floats(user.into()),
    }))
}

/// `PUT /users/profile/{userId}`: set the display name, leaving every other
/// attribute untouched.
pub(crate) async fn update_profile(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<String>,
    Json(request): Json<ProfileUpdateRequest>,
) -> Result<Json<ProfileUpdated>, ApiError> {
    let name = request.name.map_or(Value::Null, Value::String);
    let changed = state
        .store
        .update_field(&user_id, FIELD_NAME, name)
        .await
        .map_err(|err| {
            error!(error = %err, user_id = %user_id, "profile update failed");
            ApiError::auth_failure(&err)
        })?;

    Ok(Json(ProfileUpdated {
        status: "success",
        message: "Profile updated successfully",
        updated_attributes: changed.into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use registra_store::{MemoryRecordStore, RecordStore, SharedStore};
    use serde_json::json;

    fn seeded_state() -> (Arc<ApiState>, SharedStore) {
        let store = Arc::new(MemoryRecordStore::new(
            "students",
            vec![("email-index".to_string(), "email".to_string())],
        ));
        let shared: SharedStore = store;
        (
            Arc::new(ApiState::new(shared.clone(), "email-index")),
            shared,
        )
    }

    async fn seed(store: &SharedStore, record: Value) {
        store
            .put(serde_json::from_value(record).expect("record"))
            .await
            .expect("seed");
    }

    #[tokio::test]
    async fn authenticate_returns_the_full_record() {
        let (state, store) = seeded_state();
        seed(
            &store,
            json!({
                "studentId": "s-1",
                "email": "ada@example.com",
                "password": "pw",
                "gpa": 4.0,
            }),
        )
        .await;

        let response = authenticate(
            State(state),
            Json(LoginRequest {
                email: "ada@example.com".to_string(),
                password: "pw".to_string(),
            }),
        )
        .await
        .expect("authenticated");

        assert_eq!(response.0.status, "success");
        assert_eq!(
            response.0.user,
            json!({
                "studentId": "s-1",
                "email": "ada@example.com",
                "password": "pw",
                "gpa": 4,
            })
        );
    }

    #[tokio::test]
    async fn authenticate_distinguishes_unknown_and_mismatched() {
        let (state, store) = seeded_state();
        seed(
            &store,
            json!({"studentId": "s-1", "email": "ada@example.com", "password": "pw"}),
        )
        .await;

        let unknown = authenticate(
            State(state.clone()),
            Json(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "pw".to_string(),
            }),
        )
        .await
        .expect_err("unknown user");
        assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

        let mismatched = authenticate(
            State(state),
            Json(LoginRequest {
                email: "ada@example.com".to_string(),
                password: "wrong".to_string(),
            }),
        )
        .await
        .expect_err("wrong password");
        assert_eq!(mismatched.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn update_profile_reports_the_changed_attributes() {
        let (state, store) = seeded_state();
        seed(
            &store,
            json!({
                "studentId": "s-1",
                "email": "ada@example.com",
                "password": "pw",
                "name": "old",
            }),
        )
        .await;

        let response = update_profile(
            State(state),
            Path("s-1".to_string()),
            Json(ProfileUpdateRequest {
                name: Some("new".to_string()),
            }),
        )
        .await
        .expect("updated");

        assert_eq!(
            response.0.updated_attributes,
            json!({"name": "new"})
        );

        let stored = store.get("s-1").await.expect("get").expect("record");
        assert_eq!(stored.get_str("name"), Some("new"));
        assert_eq!(stored.get_str("email"), Some("ada@example.com"));
        assert_eq!(stored.get_str("password"), Some("pw"));
    }
}
