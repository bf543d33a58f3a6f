use sqlx::PgPool;
use tracing::instrument;

use crate::config::email::EmailConfig;
use crate::config::jwt::JwtConfig;
use crate::modules::classes::model::Class;
use crate::utils::email::EmailService;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_invite_token;

use super::model::{InviteRequest, InviteResponse};

pub struct InviteService;

impl InviteService {
    /// Sign an invitation token for a class and email register links.
    ///
    /// The class must exist before a code is signed, so a typo'd class name
    /// fails here rather than at every student's registration attempt.
    #[instrument(skip(db, dto, jwt_config, email_config))]
    pub async fn send_invites(
        db: &PgPool,
        dto: InviteRequest,
        jwt_config: &JwtConfig,
        email_config: &EmailConfig,
    ) -> Result<InviteResponse, AppError> {
        let class = sqlx::query_as::<_, Class>(
            "SELECT id, name, author_id, created_at, updated_at FROM classes WHERE name = $1 LIMIT 1",
        )
        .bind(&dto.class)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("Class code incorrect"))?;

        let code = create_invite_token(&class.name, jwt_config)?;
        let register_link = format!("{}/register?code={}", email_config.frontend_url, code);

        let email_service = EmailService::new(email_config.clone());
        let mut sent = 0;
        for email in &dto.emails {
            email_service
                .send_invite_email(email, &class.name, &register_link)
                .await?;
            sent += 1;
        }

        Ok(InviteResponse { code, sent })
    }
}
