use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::classes::model::Class;
use crate::utils::errors::AppError;
use crate::utils::jwt::{create_access_token, verify_invite_token};
use crate::utils::password::{hash_new_password, verify_password};

use super::model::{AuthResponse, LoginRequest, RegisterRequest, User, roles};

const USER_COLUMNS: &str =
    "id, name, email, role, currency, energy, growth, teacher_id, group_id, created_at, updated_at";

pub struct AuthService;

impl AuthService {
    /// Register a student through a signed class invitation.
    ///
    /// The invitation's `class_code` claim is resolved to a class by exact
    /// name; the student row and the class enrollment are written in one
    /// transaction, and the session token is only issued after the commit
    /// succeeds.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn register_student(
        db: &PgPool,
        dto: RegisterRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let code = dto
            .code
            .as_deref()
            .ok_or_else(|| AppError::missing_credential("No token"))?;
        let invite = verify_invite_token(code, jwt_config)?;

        let class = sqlx::query_as::<_, Class>(
            "SELECT id, name, author_id, created_at, updated_at FROM classes WHERE name = $1 LIMIT 1",
        )
        .bind(&invite.class_code)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("Class code incorrect"))?;

        let encoded_password = hash_new_password(&dto.password);

        let mut tx = db.begin().await.map_err(AppError::database)?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, email, password, role, teacher_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&encoded_password)
        .bind(roles::STUDENT)
        .bind(class.author_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::bad_request(format!(
                        "User with name {} already exists",
                        dto.name
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        sqlx::query("INSERT INTO class_students (class_id, student_id) VALUES ($1, $2)")
            .bind(class.id)
            .bind(user.id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?;

        tx.commit().await.map_err(AppError::database)?;

        let token = create_access_token(user.id, jwt_config)?;

        Ok(AuthResponse { user, token })
    }

    /// Authenticate a user by name and password.
    ///
    /// An account whose password column is NULL gets the same "Wrong
    /// password" answer as a mismatch so callers can't probe account state;
    /// a corrupt stored hash surfaces as a distinct integrity error instead.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            name: String,
            email: String,
            role: String,
            currency: i32,
            energy: i32,
            growth: i32,
            teacher_id: Option<Uuid>,
            group_id: Option<Uuid>,
            created_at: chrono::DateTime<chrono::Utc>,
            updated_at: chrono::DateTime<chrono::Utc>,
            password: Option<String>,
        }

        let row = sqlx::query_as::<_, UserWithPassword>(&format!(
            "SELECT {USER_COLUMNS}, password FROM users WHERE name = $1 LIMIT 1"
        ))
        .bind(&dto.name)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("User doesn't exist"))?;

        let stored = match row.password {
            Some(ref stored) => stored,
            None => return Err(AppError::authentication("Wrong password")),
        };

        if !verify_password(stored, &dto.password)? {
            return Err(AppError::authentication("Wrong password"));
        }

        let token = create_access_token(row.id, jwt_config)?;

        let user = User {
            id: row.id,
            name: row.name,
            email: row.email,
            role: row.role,
            currency: row.currency,
            energy: row.energy,
            growth: row.growth,
            teacher_id: row.teacher_id,
            group_id: row.group_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        };

        Ok(AuthResponse { user, token })
    }
}
