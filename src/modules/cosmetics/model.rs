use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A cosmetic item students can purchase with in-game currency.
#[derive(Serialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Cosmetic {
    pub id: Uuid,
    pub name: String,
    /// Image URL.
    pub image: String,
    #[serde(skip_serializing)]
    pub author_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCosmeticDto {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(url)]
    pub image: String,
    pub token: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCosmeticDto {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(url)]
    pub image: Option<String>,
    pub token: Option<String>,
}
