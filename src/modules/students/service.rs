use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::model::roles;
use crate::utils::errors::AppError;

use super::model::Student;

const STUDENT_COLUMNS: &str =
    "id, name, email, currency, energy, growth, teacher_id, group_id, created_at, updated_at";

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db))]
    pub async fn get_students(db: &PgPool) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM users WHERE role = $1 ORDER BY name"
        ))
        .bind(roles::STUDENT)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(students)
    }

    #[instrument(skip(db))]
    pub async fn get_student_by_id(db: &PgPool, id: Uuid) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM users WHERE id = $1 AND role = $2"
        ))
        .bind(id)
        .bind(roles::STUDENT)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("Student not found"))?;

        Ok(student)
    }
}
