use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{CreateSkillDto, Skill, UpdateSkillDto};

const SKILL_COLUMNS: &str =
    "id, name, effect_energy, effect_growth, author_id, created_at, updated_at";

pub struct SkillService;

impl SkillService {
    #[instrument(skip(db, dto))]
    pub async fn create_skill(
        db: &PgPool,
        dto: CreateSkillDto,
        author_id: Uuid,
    ) -> Result<Skill, AppError> {
        let skill = sqlx::query_as::<_, Skill>(&format!(
            "INSERT INTO skills (name, effect_energy, effect_growth, author_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {SKILL_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(dto.effect_energy)
        .bind(dto.effect_growth)
        .bind(author_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(skill)
    }

    #[instrument(skip(db))]
    pub async fn get_skills(db: &PgPool) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(&format!(
            "SELECT {SKILL_COLUMNS} FROM skills ORDER BY name"
        ))
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(skills)
    }

    #[instrument(skip(db))]
    pub async fn get_skill_by_id(db: &PgPool, id: Uuid) -> Result<Skill, AppError> {
        let skill = sqlx::query_as::<_, Skill>(&format!(
            "SELECT {SKILL_COLUMNS} FROM skills WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("Skill not found"))?;

        Ok(skill)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_skill(
        db: &PgPool,
        id: Uuid,
        dto: UpdateSkillDto,
    ) -> Result<Skill, AppError> {
        let existing = Self::get_skill_by_id(db, id).await?;
        let name = dto.name.unwrap_or(existing.name);
        let effect_energy = dto.effect_energy.unwrap_or(existing.effect_energy);
        let effect_growth = dto.effect_growth.unwrap_or(existing.effect_growth);

        let skill = sqlx::query_as::<_, Skill>(&format!(
            "UPDATE skills
             SET name = $1, effect_energy = $2, effect_growth = $3, updated_at = NOW()
             WHERE id = $4
             RETURNING {SKILL_COLUMNS}"
        ))
        .bind(&name)
        .bind(effect_energy)
        .bind(effect_growth)
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(skill)
    }

    #[instrument(skip(db))]
    pub async fn delete_skill(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Skill not found"));
        }

        Ok(())
    }
}
