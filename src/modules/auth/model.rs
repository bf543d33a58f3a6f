use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Session token claims: the subject is the user's id.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

/// Invitation token claims: grants registration into one class.
#[derive(Debug, Serialize, Deserialize)]
pub struct InviteClaims {
    pub class_code: String,
    pub iat: usize,
    pub exp: usize,
}

/// Role discriminants stored in the `users.role` column.
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const TEACHER: &str = "teacher";
    pub const STUDENT: &str = "student";
}

/// A user account. The password column is deliberately absent; flows that
/// need the stored hash use their own row struct and never serialize it.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub currency: i32,
    pub energy: i32,
    pub growth: i32,
    pub teacher_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Signed class-invitation code. Absent and invalid codes are distinct
    /// failures.
    pub code: Option<String>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Successful registration/login payload: the profile plus a session token.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LogoutResponse {
    pub logout: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let dto = RegisterRequest {
            code: Some("some.invite.token".to_string()),
            name: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(dto.validate().is_ok());

        let dto_short_password = RegisterRequest {
            code: None,
            name: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(dto_short_password.validate().is_err());

        let dto_bad_email = RegisterRequest {
            code: None,
            name: "ada".to_string(),
            email: "not-an-email".to_string(),
            password: "password123".to_string(),
        };
        assert!(dto_bad_email.validate().is_err());
    }

    #[test]
    fn test_user_serialization_has_no_password_field() {
        let user = User {
            id: Uuid::new_v4(),
            name: "ada".to_string(),
            email: "ada@example.com".to_string(),
            role: roles::STUDENT.to_string(),
            currency: 0,
            energy: 100,
            growth: 0,
            teacher_id: None,
            group_id: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let serialized = serde_json::to_string(&user).unwrap();
        assert!(serialized.contains("ada@example.com"));
        assert!(!serialized.contains("password"));
    }
}
