use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_cosmetic, delete_cosmetic, get_cosmetic, get_cosmetics, update_cosmetic,
};

pub fn init_cosmetics_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cosmetic).get(get_cosmetics))
        .route(
            "/{id}",
            get(get_cosmetic).put(update_cosmetic).delete(delete_cosmetic),
        )
}
