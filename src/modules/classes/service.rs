use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{Class, CreateClassDto, UpdateClassDto};

const CLASS_COLUMNS: &str = "id, name, author_id, created_at, updated_at";

pub struct ClassService;

impl ClassService {
    #[instrument(skip(db, dto))]
    pub async fn create_class(
        db: &PgPool,
        dto: CreateClassDto,
        author_id: Uuid,
    ) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(&format!(
            "INSERT INTO classes (name, author_id) VALUES ($1, $2) RETURNING {CLASS_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(author_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::bad_request(format!(
                        "Class with name {} already exists",
                        dto.name
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(class)
    }

    #[instrument(skip(db))]
    pub async fn get_classes(db: &PgPool) -> Result<Vec<Class>, AppError> {
        let classes = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes ORDER BY name"
        ))
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(classes)
    }

    #[instrument(skip(db))]
    pub async fn get_class_by_id(db: &PgPool, id: Uuid) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("Class not found"))?;

        Ok(class)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_class(
        db: &PgPool,
        id: Uuid,
        dto: UpdateClassDto,
    ) -> Result<Class, AppError> {
        let existing = Self::get_class_by_id(db, id).await?;
        let name = dto.name.unwrap_or(existing.name);

        let class = sqlx::query_as::<_, Class>(&format!(
            "UPDATE classes SET name = $1, updated_at = NOW() WHERE id = $2 RETURNING {CLASS_COLUMNS}"
        ))
        .bind(&name)
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::bad_request(format!(
                        "Class with name {} already exists",
                        name
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(class)
    }

    #[instrument(skip(db))]
    pub async fn delete_class(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Class not found"));
        }

        Ok(())
    }
}
