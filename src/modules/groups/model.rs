use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A working group of students inside a class.
#[derive(Serialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub class_id: Uuid,
    #[serde(skip_serializing)]
    pub author_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGroupDto {
    #[validate(length(min = 1))]
    pub name: String,
    pub class_id: Uuid,
    pub token: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGroupDto {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub class_id: Option<Uuid>,
    pub token: Option<String>,
}
