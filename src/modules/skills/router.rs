use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_skill, delete_skill, get_skill, get_skills, update_skill};

pub fn init_skills_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_skill).get(get_skills))
        .route(
            "/{id}",
            get(get_skill).put(update_skill).delete(delete_skill),
        )
}
