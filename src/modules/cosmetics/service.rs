use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{Cosmetic, CreateCosmeticDto, UpdateCosmeticDto};

const COSMETIC_COLUMNS: &str = "id, name, image, author_id, created_at, updated_at";

pub struct CosmeticService;

impl CosmeticService {
    #[instrument(skip(db, dto))]
    pub async fn create_cosmetic(
        db: &PgPool,
        dto: CreateCosmeticDto,
        author_id: Uuid,
    ) -> Result<Cosmetic, AppError> {
        let cosmetic = sqlx::query_as::<_, Cosmetic>(&format!(
            "INSERT INTO cosmetics (name, image, author_id)
             VALUES ($1, $2, $3)
             RETURNING {COSMETIC_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.image)
        .bind(author_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(cosmetic)
    }

    #[instrument(skip(db))]
    pub async fn get_cosmetics(db: &PgPool) -> Result<Vec<Cosmetic>, AppError> {
        let cosmetics = sqlx::query_as::<_, Cosmetic>(&format!(
            "SELECT {COSMETIC_COLUMNS} FROM cosmetics ORDER BY name"
        ))
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(cosmetics)
    }

    #[instrument(skip(db))]
    pub async fn get_cosmetic_by_id(db: &PgPool, id: Uuid) -> Result<Cosmetic, AppError> {
        let cosmetic = sqlx::query_as::<_, Cosmetic>(&format!(
            "SELECT {COSMETIC_COLUMNS} FROM cosmetics WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("Cosmetic not found"))?;

        Ok(cosmetic)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_cosmetic(
        db: &PgPool,
        id: Uuid,
        dto: UpdateCosmeticDto,
    ) -> Result<Cosmetic, AppError> {
        let existing = Self::get_cosmetic_by_id(db, id).await?;
        let name = dto.name.unwrap_or(existing.name);
        let image = dto.image.unwrap_or(existing.image);

        let cosmetic = sqlx::query_as::<_, Cosmetic>(&format!(
            "UPDATE cosmetics SET name = $1, image = $2, updated_at = NOW()
             WHERE id = $3
             RETURNING {COSMETIC_COLUMNS}"
        ))
        .bind(&name)
        .bind(&image)
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(cosmetic)
    }

    #[instrument(skip(db))]
    pub async fn delete_cosmetic(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM cosmetics WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Cosmetic not found"));
        }

        Ok(())
    }
}
