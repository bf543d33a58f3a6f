use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_reward, delete_reward, get_reward, get_rewards, update_reward};

pub fn init_rewards_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_reward).get(get_rewards))
        .route(
            "/{id}",
            get(get_reward).put(update_reward).delete(delete_reward),
        )
}
