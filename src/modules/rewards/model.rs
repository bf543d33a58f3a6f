use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Discriminants stored in the `rewards.reward_type` column.
pub mod reward_types {
    pub const REWARD: &str = "reward";
    pub const PUNISHMENT: &str = "punishment";

    pub fn is_valid(value: &str) -> bool {
        value == REWARD || value == PUNISHMENT
    }
}

/// A reward or punishment event type teachers hand out; effects apply to the
/// energy and growth counters.
#[derive(Serialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Reward {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub effect_energy: i32,
    pub effect_growth: i32,
    pub reward_type: String,
    #[serde(skip_serializing)]
    pub author_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRewardDto {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub effect_energy: i32,
    pub effect_growth: i32,
    /// Either "reward" or "punishment".
    pub reward_type: String,
    pub token: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRewardDto {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub effect_energy: Option<i32>,
    pub effect_growth: Option<i32>,
    pub reward_type: Option<String>,
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_type_discriminants() {
        assert!(reward_types::is_valid("reward"));
        assert!(reward_types::is_valid("punishment"));
        assert!(!reward_types::is_valid("Reward"));
        assert!(!reward_types::is_valid("bonus"));
    }
}
