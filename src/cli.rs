use sqlx::PgPool;

use crate::modules::auth::model::roles;
use crate::utils::password::hash_new_password;

/// Bootstrap a teacher account. Teachers are never created through the API,
/// so a fresh deployment needs this before any class can be authored.
pub async fn create_teacher(
    db: &PgPool,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoded_password = hash_new_password(password);

    let result = sqlx::query(
        "INSERT INTO users (name, email, password, role)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (name) DO NOTHING",
    )
    .bind(name)
    .bind(email)
    .bind(encoded_password)
    .bind(roles::TEACHER)
    .execute(db)
    .await?;

    if result.rows_affected() == 0 {
        return Err("User with this name already exists".into());
    }

    Ok(())
}
