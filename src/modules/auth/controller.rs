use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{AuthResponse, LoginRequest, LogoutResponse, RegisterRequest};
use super::service::AuthService;

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Register a new student using a class invitation code
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Student registered successfully", body = AuthResponse),
        (status = 401, description = "Missing or invalid invitation code", body = ErrorResponse),
        (status = 404, description = "Class code incorrect", body = ErrorResponse),
        (status = 400, description = "Bad request - name already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let response = AuthService::register_student(&state.db, dto, &state.jwt_config).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with name and password
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Wrong password", body = ErrorResponse),
        (status = 404, description = "User doesn't exist", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let response = AuthService::login_user(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Logout (stateless - the client discards its token)
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Logged out", body = LogoutResponse)
    ),
    tag = "Authentication"
)]
#[instrument]
pub async fn logout_user() -> Json<LogoutResponse> {
    Json(LogoutResponse {
        logout: "yes".to_string(),
    })
}
