use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::{TokenQuery, authorize_token};
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::Student;
use super::service::StudentService;

/// List registered students
#[utoipa::path(
    get,
    path = "/api/students",
    params(TokenQuery),
    responses(
        (status = 200, description = "List of students", body = [Student]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, query))]
pub async fn get_students(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<Vec<Student>>, AppError> {
    authorize_token(query.token.as_deref(), &state.jwt_config)?;
    let students = StudentService::get_students(&state.db).await?;
    Ok(Json(students))
}

/// Get a student by id
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(
        ("id" = Uuid, Path, description = "Student ID"),
        TokenQuery
    ),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, query))]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<Student>, AppError> {
    authorize_token(query.token.as_deref(), &state.jwt_config)?;
    let student = StudentService::get_student_by_id(&state.db, id).await?;
    Ok(Json(student))
}
