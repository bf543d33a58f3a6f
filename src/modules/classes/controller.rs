use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::{TokenQuery, authorize_token};
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{Class, CreateClassDto, UpdateClassDto};
use super::service::ClassService;

/// Create a class
#[utoipa::path(
    post,
    path = "/api/classes",
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class created successfully", body = Class),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 400, description = "Class name already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state, dto))]
pub async fn create_class(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateClassDto>,
) -> Result<(StatusCode, Json<Class>), AppError> {
    let author_id = authorize_token(dto.token.as_deref(), &state.jwt_config)?;
    let class = ClassService::create_class(&state.db, dto, author_id).await?;
    Ok((StatusCode::CREATED, Json(class)))
}

/// List classes
#[utoipa::path(
    get,
    path = "/api/classes",
    params(TokenQuery),
    responses(
        (status = 200, description = "List of classes", body = [Class]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state, query))]
pub async fn get_classes(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<Vec<Class>>, AppError> {
    authorize_token(query.token.as_deref(), &state.jwt_config)?;
    let classes = ClassService::get_classes(&state.db).await?;
    Ok(Json(classes))
}

/// Get a class by id
#[utoipa::path(
    get,
    path = "/api/classes/{id}",
    params(
        ("id" = Uuid, Path, description = "Class ID"),
        TokenQuery
    ),
    responses(
        (status = 200, description = "Class details", body = Class),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Class not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state, query))]
pub async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<Class>, AppError> {
    authorize_token(query.token.as_deref(), &state.jwt_config)?;
    let class = ClassService::get_class_by_id(&state.db, id).await?;
    Ok(Json(class))
}

/// Update a class
#[utoipa::path(
    put,
    path = "/api/classes/{id}",
    params(
        ("id" = Uuid, Path, description = "Class ID")
    ),
    request_body = UpdateClassDto,
    responses(
        (status = 200, description = "Class updated successfully", body = Class),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Class not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state, dto))]
pub async fn update_class(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateClassDto>,
) -> Result<Json<Class>, AppError> {
    authorize_token(dto.token.as_deref(), &state.jwt_config)?;
    let class = ClassService::update_class(&state.db, id, dto).await?;
    Ok(Json(class))
}

/// Delete a class
#[utoipa::path(
    delete,
    path = "/api/classes/{id}",
    params(
        ("id" = Uuid, Path, description = "Class ID"),
        TokenQuery
    ),
    responses(
        (status = 200, description = "Class deleted successfully"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Class not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state, query))]
pub async fn delete_class(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    authorize_token(query.token.as_deref(), &state.jwt_config)?;
    ClassService::delete_class(&state.db, id).await?;
    Ok(Json(json!({"message": "Class deleted successfully"})))
}
