use sqlx::PgPool;
use std::env;

/// Initialize the PostgreSQL connection pool from `DATABASE_URL`.
///
/// Called once during startup; the returned pool is cheaply cloneable and
/// shared through [`crate::state::AppState`].
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set or the connection fails.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
