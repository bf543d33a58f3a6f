use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{CreateGroupDto, Group, UpdateGroupDto};

const GROUP_COLUMNS: &str = "id, name, class_id, author_id, created_at, updated_at";

pub struct GroupService;

impl GroupService {
    #[instrument(skip(db, dto))]
    pub async fn create_group(
        db: &PgPool,
        dto: CreateGroupDto,
        author_id: Uuid,
    ) -> Result<Group, AppError> {
        let group = sqlx::query_as::<_, Group>(&format!(
            "INSERT INTO groups (name, class_id, author_id)
             VALUES ($1, $2, $3)
             RETURNING {GROUP_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(dto.class_id)
        .bind(author_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_foreign_key_violation() {
                    return AppError::not_found("Class not found");
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(group)
    }

    #[instrument(skip(db))]
    pub async fn get_groups(db: &PgPool) -> Result<Vec<Group>, AppError> {
        let groups = sqlx::query_as::<_, Group>(&format!(
            "SELECT {GROUP_COLUMNS} FROM groups ORDER BY name"
        ))
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(groups)
    }

    #[instrument(skip(db))]
    pub async fn get_group_by_id(db: &PgPool, id: Uuid) -> Result<Group, AppError> {
        let group = sqlx::query_as::<_, Group>(&format!(
            "SELECT {GROUP_COLUMNS} FROM groups WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("Group not found"))?;

        Ok(group)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_group(
        db: &PgPool,
        id: Uuid,
        dto: UpdateGroupDto,
    ) -> Result<Group, AppError> {
        let existing = Self::get_group_by_id(db, id).await?;
        let name = dto.name.unwrap_or(existing.name);
        let class_id = dto.class_id.unwrap_or(existing.class_id);

        let group = sqlx::query_as::<_, Group>(&format!(
            "UPDATE groups SET name = $1, class_id = $2, updated_at = NOW()
             WHERE id = $3
             RETURNING {GROUP_COLUMNS}"
        ))
        .bind(&name)
        .bind(class_id)
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_foreign_key_violation() {
                    return AppError::not_found("Class not found");
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(group)
    }

    #[instrument(skip(db))]
    pub async fn delete_group(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM groups WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Group not found"));
        }

        Ok(())
    }
}
