use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{CreateRewardDto, Reward, UpdateRewardDto, reward_types};

const REWARD_COLUMNS: &str =
    "id, name, description, effect_energy, effect_growth, reward_type, author_id, created_at, updated_at";

pub struct RewardService;

impl RewardService {
    #[instrument(skip(db, dto))]
    pub async fn create_reward(
        db: &PgPool,
        dto: CreateRewardDto,
        author_id: Uuid,
    ) -> Result<Reward, AppError> {
        if !reward_types::is_valid(&dto.reward_type) {
            return Err(AppError::bad_request(
                "reward_type must be 'reward' or 'punishment'",
            ));
        }

        let reward = sqlx::query_as::<_, Reward>(&format!(
            "INSERT INTO rewards (name, description, effect_energy, effect_growth, reward_type, author_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {REWARD_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.effect_energy)
        .bind(dto.effect_growth)
        .bind(&dto.reward_type)
        .bind(author_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(reward)
    }

    #[instrument(skip(db))]
    pub async fn get_rewards(db: &PgPool) -> Result<Vec<Reward>, AppError> {
        let rewards = sqlx::query_as::<_, Reward>(&format!(
            "SELECT {REWARD_COLUMNS} FROM rewards ORDER BY name"
        ))
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(rewards)
    }

    #[instrument(skip(db))]
    pub async fn get_reward_by_id(db: &PgPool, id: Uuid) -> Result<Reward, AppError> {
        let reward = sqlx::query_as::<_, Reward>(&format!(
            "SELECT {REWARD_COLUMNS} FROM rewards WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("Reward not found"))?;

        Ok(reward)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_reward(
        db: &PgPool,
        id: Uuid,
        dto: UpdateRewardDto,
    ) -> Result<Reward, AppError> {
        if let Some(ref reward_type) = dto.reward_type {
            if !reward_types::is_valid(reward_type) {
                return Err(AppError::bad_request(
                    "reward_type must be 'reward' or 'punishment'",
                ));
            }
        }

        let existing = Self::get_reward_by_id(db, id).await?;
        let name = dto.name.unwrap_or(existing.name);
        let description = dto.description.unwrap_or(existing.description);
        let effect_energy = dto.effect_energy.unwrap_or(existing.effect_energy);
        let effect_growth = dto.effect_growth.unwrap_or(existing.effect_growth);
        let reward_type = dto.reward_type.unwrap_or(existing.reward_type);

        let reward = sqlx::query_as::<_, Reward>(&format!(
            "UPDATE rewards
             SET name = $1, description = $2, effect_energy = $3, effect_growth = $4,
                 reward_type = $5, updated_at = NOW()
             WHERE id = $6
             RETURNING {REWARD_COLUMNS}"
        ))
        .bind(&name)
        .bind(&description)
        .bind(effect_energy)
        .bind(effect_growth)
        .bind(&reward_type)
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(reward)
    }

    #[instrument(skip(db))]
    pub async fn delete_reward(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM rewards WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Reward not found"));
        }

        Ok(())
    }
}
