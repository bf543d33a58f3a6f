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

use super::model::{CreateGroupDto, Group, UpdateGroupDto};
use super::service::GroupService;

/// Create a group
#[utoipa::path(
    post,
    path = "/api/groups",
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Group created successfully", body = Group),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Class not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Groups"
)]
#[instrument(skip(state, dto))]
pub async fn create_group(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateGroupDto>,
) -> Result<(StatusCode, Json<Group>), AppError> {
    let author_id = authorize_token(dto.token.as_deref(), &state.jwt_config)?;
    let group = GroupService::create_group(&state.db, dto, author_id).await?;
    Ok((StatusCode::CREATED, Json(group)))
}

/// List groups
#[utoipa::path(
    get,
    path = "/api/groups",
    params(TokenQuery),
    responses(
        (status = 200, description = "List of groups", body = [Group]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Groups"
)]
#[instrument(skip(state, query))]
pub async fn get_groups(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<Vec<Group>>, AppError> {
    authorize_token(query.token.as_deref(), &state.jwt_config)?;
    let groups = GroupService::get_groups(&state.db).await?;
    Ok(Json(groups))
}

/// Get a group by id
#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    params(
        ("id" = Uuid, Path, description = "Group ID"),
        TokenQuery
    ),
    responses(
        (status = 200, description = "Group details", body = Group),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Groups"
)]
#[instrument(skip(state, query))]
pub async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<Group>, AppError> {
    authorize_token(query.token.as_deref(), &state.jwt_config)?;
    let group = GroupService::get_group_by_id(&state.db, id).await?;
    Ok(Json(group))
}

/// Update a group
#[utoipa::path(
    put,
    path = "/api/groups/{id}",
    params(
        ("id" = Uuid, Path, description = "Group ID")
    ),
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Group updated successfully", body = Group),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Groups"
)]
#[instrument(skip(state, dto))]
pub async fn update_group(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateGroupDto>,
) -> Result<Json<Group>, AppError> {
    authorize_token(dto.token.as_deref(), &state.jwt_config)?;
    let group = GroupService::update_group(&state.db, id, dto).await?;
    Ok(Json(group))
}

/// Delete a group
#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    params(
        ("id" = Uuid, Path, description = "Group ID"),
        TokenQuery
    ),
    responses(
        (status = 200, description = "Group deleted successfully"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Groups"
)]
#[instrument(skip(state, query))]
pub async fn delete_group(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    authorize_token(query.token.as_deref(), &state.jwt_config)?;
    GroupService::delete_group(&state.db, id).await?;
    Ok(Json(json!({"message": "Group deleted successfully"})))
}
