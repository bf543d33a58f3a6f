use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A student profile with gamification counters. Students are only ever
/// created through the registration flow, so this module exposes reads.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub currency: i32,
    pub energy: i32,
    pub growth: i32,
    pub teacher_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
