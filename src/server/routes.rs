//! Signup and signin route handlers.
//!
//! The contract mirrors the PHP endpoints this service replaces:
//! form-encoded POST bodies, a JSON `status`/`message` envelope, and the
//! same response messages. Success messages contain "successfully" on
//! purpose - deployed clients substring-match the body for "success".

use axum::extract::State;
use axum::{Form, Json};
use serde::Deserialize;
use tokio::task;
use tracing::error;

use super::error::ApiError;
use super::{db, ApiResponse, AppState};
use crate::validation::is_valid_email;

pub const SIGNUP_SUCCESS: &str =
    "Welcome to Saltmere Cove! Your account has been created successfully.";
pub const SIGNIN_SUCCESS: &str = "Welcome back! You have signed in successfully.";

const REQUIRED_FIELDS: &str = "Please fill in all required fields.";
const INVALID_EMAIL: &str = "Invalid email address.";
const DUPLICATE_EMAIL: &str = "Email already registered!";
const STORAGE_FAILED: &str =
    "Something went wrong while saving your account. Please try again.";
const BAD_CREDENTIALS: &str = "Invalid email or password.";

#[derive(Debug, Deserialize)]
pub struct SignupPayload {
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SigninPayload {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn signup(
    State(state): State<AppState>,
    Form(payload): Form<SignupPayload>,
) -> Result<Json<ApiResponse>, ApiError> {
    let fullname = payload.fullname.trim().to_string();
    let email = payload.email.trim().to_lowercase();
    let password = payload.password;

    if fullname.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(REQUIRED_FIELDS.to_string()));
    }
    if !is_valid_email(&email) {
        return Err(ApiError::Validation(INVALID_EMAIL.to_string()));
    }

    // Checked before insert so a duplicate answers 409, not 500
    if db::email_exists(&state.pool, &email).await? {
        return Err(ApiError::Conflict(DUPLICATE_EMAIL.to_string()));
    }

    let hash = task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST)).await??;

    db::insert_user(&state.pool, &fullname, &email, &hash)
        .await
        .map_err(|e| {
            error!("user insert failed: {}", e);
            ApiError::Storage(STORAGE_FAILED.to_string())
        })?;

    Ok(Json(ApiResponse::success(SIGNUP_SUCCESS)))
}

pub async fn signin(
    State(state): State<AppState>,
    Form(payload): Form<SigninPayload>,
) -> Result<Json<ApiResponse>, ApiError> {
    let email = payload.email.trim().to_lowercase();
    let password = payload.password;

    if email.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(REQUIRED_FIELDS.to_string()));
    }
    if !is_valid_email(&email) {
        return Err(ApiError::Validation(INVALID_EMAIL.to_string()));
    }

    let Some(user) = db::find_by_email(&state.pool, &email).await? else {
        return Err(ApiError::Unauthorized(BAD_CREDENTIALS.to_string()));
    };

    let verified =
        task::spawn_blocking(move || bcrypt::verify(password, &user.password)).await??;
    if !verified {
        return Err(ApiError::Unauthorized(BAD_CREDENTIALS.to_string()));
    }

    Ok(Json(ApiResponse::success(SIGNIN_SUCCESS)))
}
