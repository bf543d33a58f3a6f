mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use classquest::utils::jwt::{create_invite_token, verify_token};
use common::{
    count_users_named, create_test_class, create_test_student, create_test_teacher,
    generate_unique_name, setup_test_app, test_jwt_config,
};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_success(pool: PgPool) {
    let teacher = create_test_teacher(&pool, &generate_unique_name("teacher"), "teacherpass").await;
    let class = create_test_class(&pool, &generate_unique_name("Math"), teacher.id).await;

    let code = create_invite_token(&class.name, &test_jwt_config()).unwrap();
    let student_name = generate_unique_name("student");

    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(post_json(
            "/auth/register",
            json!({
                "code": code,
                "name": student_name,
                "email": "student@test.com",
                "password": "studentpass123"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["user"]["name"], student_name);
    assert_eq!(body["user"]["role"], "student");
    assert_eq!(body["user"]["energy"], 100);
    assert!(body["user"].get("password").is_none());

    // The session token's subject is the newly created student id.
    let token = body["token"].as_str().unwrap();
    let claims = verify_token(token, &test_jwt_config()).unwrap();
    assert_eq!(claims.sub, body["user"]["id"].as_str().unwrap());

    assert_eq!(count_users_named(&pool, &student_name).await, 1);

    // Registration enrolls the student in the invited class.
    let enrolled: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM class_students WHERE class_id = $1",
    )
    .bind(class.id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(enrolled, 1);

    // The invited-by teacher is carried onto the student.
    let teacher_id: Option<uuid::Uuid> =
        sqlx::query_scalar("SELECT teacher_id FROM users WHERE name = $1")
            .bind(&student_name)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(teacher_id, Some(teacher.id));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_missing_code(pool: PgPool) {
    let student_name = generate_unique_name("student");

    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(post_json(
            "/auth/register",
            json!({
                "name": student_name,
                "email": "student@test.com",
                "password": "studentpass123"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "No token");

    assert_eq!(count_users_named(&pool, &student_name).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_invalid_code(pool: PgPool) {
    let student_name = generate_unique_name("student");

    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(post_json(
            "/auth/register",
            json!({
                "code": "definitely.not.valid",
                "name": student_name,
                "email": "student@test.com",
                "password": "studentpass123"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid token");

    assert_eq!(count_users_named(&pool, &student_name).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_code_signed_with_wrong_secret(pool: PgPool) {
    let other_config = classquest::config::jwt::JwtConfig {
        secret: "some_other_secret".to_string(),
        access_token_expiry: 3600,
        invite_token_expiry: 604800,
    };
    let code = create_invite_token("Math 101", &other_config).unwrap();
    let student_name = generate_unique_name("student");

    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(post_json(
            "/auth/register",
            json!({
                "code": code,
                "name": student_name,
                "email": "student@test.com",
                "password": "studentpass123"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid token");

    assert_eq!(count_users_named(&pool, &student_name).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_class_code_incorrect(pool: PgPool) {
    // Valid signature, but no class by this name exists.
    let code = create_invite_token("No Such Class", &test_jwt_config()).unwrap();
    let student_name = generate_unique_name("student");

    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(post_json(
            "/auth/register",
            json!({
                "code": code,
                "name": student_name,
                "email": "student@test.com",
                "password": "studentpass123"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Class code incorrect");

    assert_eq!(count_users_named(&pool, &student_name).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_short_password_fails_validation(pool: PgPool) {
    let teacher = create_test_teacher(&pool, &generate_unique_name("teacher"), "teacherpass").await;
    let class = create_test_class(&pool, &generate_unique_name("Math"), teacher.id).await;
    let code = create_invite_token(&class.name, &test_jwt_config()).unwrap();

    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(post_json(
            "/auth/register",
            json!({
                "code": code,
                "name": generate_unique_name("student"),
                "email": "student@test.com",
                "password": "short"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_success(pool: PgPool) {
    let name = generate_unique_name("student");
    let student = create_test_student(&pool, &name, "studentpass123").await;

    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(post_json(
            "/auth/login",
            json!({
                "name": name,
                "password": "studentpass123"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["user"]["id"], student.id.to_string());
    assert!(body["user"].get("password").is_none());

    let claims = verify_token(body["token"].as_str().unwrap(), &test_jwt_config()).unwrap();
    assert_eq!(claims.sub, student.id.to_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_user_doesnt_exist(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(post_json(
            "/auth/login",
            json!({
                "name": "nobody-here",
                "password": "whatever123"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "User doesn't exist");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let name = generate_unique_name("student");
    create_test_student(&pool, &name, "correct-password").await;

    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(post_json(
            "/auth/login",
            json!({
                "name": name,
                "password": "wrong-password"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Wrong password");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_unset_password_reads_as_wrong_password(pool: PgPool) {
    let name = generate_unique_name("student");
    sqlx::query("INSERT INTO users (name, email, role) VALUES ($1, $2, 'student')")
        .bind(&name)
        .bind("nopass@test.com")
        .execute(&pool)
        .await
        .unwrap();

    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(post_json(
            "/auth/login",
            json!({
                "name": name,
                "password": "anything123"
            }),
        ))
        .await
        .unwrap();

    // Deliberately indistinguishable from a plain mismatch.
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Wrong password");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_logout(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["logout"], "yes");
}
