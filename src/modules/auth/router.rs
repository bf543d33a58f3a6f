use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{login_user, logout_user, register_student};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_student))
        .route("/login", post(login_user))
        .route("/logout", post(logout_user))
}
