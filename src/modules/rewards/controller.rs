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

use super::model::{CreateRewardDto, Reward, UpdateRewardDto};
use super::service::RewardService;

/// Create a reward or punishment
#[utoipa::path(
    post,
    path = "/api/rewards",
    request_body = CreateRewardDto,
    responses(
        (status = 201, description = "Reward created successfully", body = Reward),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 400, description = "Invalid reward_type", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Rewards"
)]
#[instrument(skip(state, dto))]
pub async fn create_reward(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateRewardDto>,
) -> Result<(StatusCode, Json<Reward>), AppError> {
    let author_id = authorize_token(dto.token.as_deref(), &state.jwt_config)?;
    let reward = RewardService::create_reward(&state.db, dto, author_id).await?;
    Ok((StatusCode::CREATED, Json(reward)))
}

/// List rewards and punishments
#[utoipa::path(
    get,
    path = "/api/rewards",
    params(TokenQuery),
    responses(
        (status = 200, description = "List of rewards", body = [Reward]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Rewards"
)]
#[instrument(skip(state, query))]
pub async fn get_rewards(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<Vec<Reward>>, AppError> {
    authorize_token(query.token.as_deref(), &state.jwt_config)?;
    let rewards = RewardService::get_rewards(&state.db).await?;
    Ok(Json(rewards))
}

/// Get a reward by id
#[utoipa::path(
    get,
    path = "/api/rewards/{id}",
    params(
        ("id" = Uuid, Path, description = "Reward ID"),
        TokenQuery
    ),
    responses(
        (status = 200, description = "Reward details", body = Reward),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Reward not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Rewards"
)]
#[instrument(skip(state, query))]
pub async fn get_reward(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<Reward>, AppError> {
    authorize_token(query.token.as_deref(), &state.jwt_config)?;
    let reward = RewardService::get_reward_by_id(&state.db, id).await?;
    Ok(Json(reward))
}

/// Update a reward
#[utoipa::path(
    put,
    path = "/api/rewards/{id}",
    params(
        ("id" = Uuid, Path, description = "Reward ID")
    ),
    request_body = UpdateRewardDto,
    responses(
        (status = 200, description = "Reward updated successfully", body = Reward),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Reward not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Rewards"
)]
#[instrument(skip(state, dto))]
pub async fn update_reward(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateRewardDto>,
) -> Result<Json<Reward>, AppError> {
    authorize_token(dto.token.as_deref(), &state.jwt_config)?;
    let reward = RewardService::update_reward(&state.db, id, dto).await?;
    Ok(Json(reward))
}

/// Delete a reward
#[utoipa::path(
    delete,
    path = "/api/rewards/{id}",
    params(
        ("id" = Uuid, Path, description = "Reward ID"),
        TokenQuery
    ),
    responses(
        (status = 200, description = "Reward deleted successfully"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Reward not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Rewards"
)]
#[instrument(skip(state, query))]
pub async fn delete_reward(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    authorize_token(query.token.as_deref(), &state.jwt_config)?;
    RewardService::delete_reward(&state.db, id).await?;
    Ok(Json(json!({"message": "Reward deleted successfully"})))
}
