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

use super::model::{Cosmetic, CreateCosmeticDto, UpdateCosmeticDto};
use super::service::CosmeticService;

/// Create a cosmetic
#[utoipa::path(
    post,
    path = "/api/cosmetics",
    request_body = CreateCosmeticDto,
    responses(
        (status = 201, description = "Cosmetic created successfully", body = Cosmetic),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Cosmetics"
)]
#[instrument(skip(state, dto))]
pub async fn create_cosmetic(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateCosmeticDto>,
) -> Result<(StatusCode, Json<Cosmetic>), AppError> {
    let author_id = authorize_token(dto.token.as_deref(), &state.jwt_config)?;
    let cosmetic = CosmeticService::create_cosmetic(&state.db, dto, author_id).await?;
    Ok((StatusCode::CREATED, Json(cosmetic)))
}

/// List cosmetics
#[utoipa::path(
    get,
    path = "/api/cosmetics",
    params(TokenQuery),
    responses(
        (status = 200, description = "List of cosmetics", body = [Cosmetic]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Cosmetics"
)]
#[instrument(skip(state, query))]
pub async fn get_cosmetics(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<Vec<Cosmetic>>, AppError> {
    authorize_token(query.token.as_deref(), &state.jwt_config)?;
    let cosmetics = CosmeticService::get_cosmetics(&state.db).await?;
    Ok(Json(cosmetics))
}

/// Get a cosmetic by id
#[utoipa::path(
    get,
    path = "/api/cosmetics/{id}",
    params(
        ("id" = Uuid, Path, description = "Cosmetic ID"),
        TokenQuery
    ),
    responses(
        (status = 200, description = "Cosmetic details", body = Cosmetic),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Cosmetic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Cosmetics"
)]
#[instrument(skip(state, query))]
pub async fn get_cosmetic(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<Cosmetic>, AppError> {
    authorize_token(query.token.as_deref(), &state.jwt_config)?;
    let cosmetic = CosmeticService::get_cosmetic_by_id(&state.db, id).await?;
    Ok(Json(cosmetic))
}

/// Update a cosmetic
#[utoipa::path(
    put,
    path = "/api/cosmetics/{id}",
    params(
        ("id" = Uuid, Path, description = "Cosmetic ID")
    ),
    request_body = UpdateCosmeticDto,
    responses(
        (status = 200, description = "Cosmetic updated successfully", body = Cosmetic),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Cosmetic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Cosmetics"
)]
#[instrument(skip(state, dto))]
pub async fn update_cosmetic(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateCosmeticDto>,
) -> Result<Json<Cosmetic>, AppError> {
    authorize_token(dto.token.as_deref(), &state.jwt_config)?;
    let cosmetic = CosmeticService::update_cosmetic(&state.db, id, dto).await?;
    Ok(Json(cosmetic))
}

/// Delete a cosmetic
#[utoipa::path(
    delete,
    path = "/api/cosmetics/{id}",
    params(
        ("id" = Uuid, Path, description = "Cosmetic ID"),
        TokenQuery
    ),
    responses(
        (status = 200, description = "Cosmetic deleted successfully"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Cosmetic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Cosmetics"
)]
#[instrument(skip(state, query))]
pub async fn delete_cosmetic(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    authorize_token(query.token.as_deref(), &state.jwt_config)?;
    CosmeticService::delete_cosmetic(&state.db, id).await?;
    Ok(Json(json!({"message": "Cosmetic deleted successfully"})))
}
