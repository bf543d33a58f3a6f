use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A class. Its name doubles as the invitation class code.
#[derive(Serialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Class {
    pub id: Uuid,
    pub name: String,
    // Authorship is recorded on the row but never echoed through the API.
    #[serde(skip_serializing)]
    pub author_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClassDto {
    #[validate(length(min = 1))]
    pub name: String,
    pub token: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateClassDto {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub token: Option<String>,
}
