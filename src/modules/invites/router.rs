use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::send_invites;

pub fn init_invites_router() -> Router<AppState> {
    Router::new().route("/", post(send_invites))
}
