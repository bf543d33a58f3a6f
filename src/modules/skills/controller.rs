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

use super::model::{CreateSkillDto, Skill, UpdateSkillDto};
use super::service::SkillService;

/// Create a skill
#[utoipa::path(
    post,
    path = "/api/skills",
    request_body = CreateSkillDto,
    responses(
        (status = 201, description = "Skill created successfully", body = Skill),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Skills"
)]
#[instrument(skip(state, dto))]
pub async fn create_skill(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateSkillDto>,
) -> Result<(StatusCode, Json<Skill>), AppError> {
    let author_id = authorize_token(dto.token.as_deref(), &state.jwt_config)?;
    let skill = SkillService::create_skill(&state.db, dto, author_id).await?;
    Ok((StatusCode::CREATED, Json(skill)))
}

/// List skills
#[utoipa::path(
    get,
    path = "/api/skills",
    params(TokenQuery),
    responses(
        (status = 200, description = "List of skills", body = [Skill]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Skills"
)]
#[instrument(skip(state, query))]
pub async fn get_skills(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<Vec<Skill>>, AppError> {
    authorize_token(query.token.as_deref(), &state.jwt_config)?;
    let skills = SkillService::get_skills(&state.db).await?;
    Ok(Json(skills))
}

/// Get a skill by id
#[utoipa::path(
    get,
    path = "/api/skills/{id}",
    params(
        ("id" = Uuid, Path, description = "Skill ID"),
        TokenQuery
    ),
    responses(
        (status = 200, description = "Skill details", body = Skill),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Skill not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Skills"
)]
#[instrument(skip(state, query))]
pub async fn get_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<Skill>, AppError> {
    authorize_token(query.token.as_deref(), &state.jwt_config)?;
    let skill = SkillService::get_skill_by_id(&state.db, id).await?;
    Ok(Json(skill))
}

/// Update a skill
#[utoipa::path(
    put,
    path = "/api/skills/{id}",
    params(
        ("id" = Uuid, Path, description = "Skill ID")
    ),
    request_body = UpdateSkillDto,
    responses(
        (status = 200, description = "Skill updated successfully", body = Skill),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Skill not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Skills"
)]
#[instrument(skip(state, dto))]
pub async fn update_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateSkillDto>,
) -> Result<Json<Skill>, AppError> {
    authorize_token(dto.token.as_deref(), &state.jwt_config)?;
    let skill = SkillService::update_skill(&state.db, id, dto).await?;
    Ok(Json(skill))
}

/// Delete a skill
#[utoipa::path(
    delete,
    path = "/api/skills/{id}",
    params(
        ("id" = Uuid, Path, description = "Skill ID"),
        TokenQuery
    ),
    responses(
        (status = 200, description = "Skill deleted successfully"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Skill not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Skills"
)]
#[instrument(skip(state, query))]
pub async fn delete_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    authorize_token(query.token.as_deref(), &state.jwt_config)?;
    SkillService::delete_skill(&state.db, id).await?;
    Ok(Json(json!({"message": "Skill deleted successfully"})))
}
