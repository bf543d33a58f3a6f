use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A skill students can exercise; effects apply to the energy and growth
/// counters.
#[derive(Serialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub effect_energy: i32,
    pub effect_growth: i32,
    #[serde(skip_serializing)]
    pub author_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSkillDto {
    #[validate(length(min = 1))]
    pub name: String,
    pub effect_energy: i32,
    pub effect_growth: i32,
    pub token: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSkillDto {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub effect_energy: Option<i32>,
    pub effect_growth: Option<i32>,
    pub token: Option<String>,
}
