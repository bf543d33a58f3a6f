use axum::{Json, extract::State};
use tracing::instrument;

use crate::middleware::auth::authorize_token;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{InviteRequest, InviteResponse};
use super::service::InviteService;

/// Invite students into a class by email
#[utoipa::path(
    post,
    path = "/api/invites",
    request_body = InviteRequest,
    responses(
        (status = 200, description = "Invitation code issued", body = InviteResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Class code incorrect", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Invites"
)]
#[instrument(skip(state, dto))]
pub async fn send_invites(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<InviteRequest>,
) -> Result<Json<InviteResponse>, AppError> {
    authorize_token(dto.token.as_deref(), &state.jwt_config)?;
    let response =
        InviteService::send_invites(&state.db, dto, &state.jwt_config, &state.email_config).await?;
    Ok(Json(response))
}
