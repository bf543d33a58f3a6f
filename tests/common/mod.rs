use classquest::config::cors::CorsConfig;
use classquest::config::email::EmailConfig;
use classquest::config::jwt::JwtConfig;
use classquest::router::init_router;
use classquest::state::AppState;
use classquest::utils::password::hash_new_password;
use sqlx::PgPool;
use uuid::Uuid;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
        invite_token_expiry: 604800,
    }
}

/// Build the app against an isolated test database. The JWT secret is fixed
/// so tests can mint their own tokens with [`test_jwt_config`].
pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        email_config: EmailConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub password: String,
}

#[allow(dead_code)]
pub struct TestClass {
    pub id: Uuid,
    pub name: String,
}

/// Insert a credentialed teacher row directly.
#[allow(dead_code)]
pub async fn create_test_teacher(pool: &PgPool, name: &str, password: &str) -> TestUser {
    let encoded = hash_new_password(password);

    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO users (name, email, password, role)
         VALUES ($1, $2, $3, 'teacher')
         RETURNING id",
    )
    .bind(name)
    .bind(format!("{}@test.com", name))
    .bind(&encoded)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        name: name.to_string(),
        password: password.to_string(),
    }
}

/// Insert a credentialed student row directly, bypassing registration.
#[allow(dead_code)]
pub async fn create_test_student(pool: &PgPool, name: &str, password: &str) -> TestUser {
    let encoded = hash_new_password(password);

    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO users (name, email, password, role)
         VALUES ($1, $2, $3, 'student')
         RETURNING id",
    )
    .bind(name)
    .bind(format!("{}@test.com", name))
    .bind(&encoded)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        name: name.to_string(),
        password: password.to_string(),
    }
}

#[allow(dead_code)]
pub async fn create_test_class(pool: &PgPool, name: &str, author_id: Uuid) -> TestClass {
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO classes (name, author_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(author_id)
    .fetch_one(pool)
    .await
    .unwrap();

    TestClass {
        id,
        name: name.to_string(),
    }
}

#[allow(dead_code)]
pub async fn count_users_named(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn count_classes_named(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM classes WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub fn generate_unique_name(prefix: &str) -> String {
    format!("{} {}", prefix, Uuid::new_v4())
}
