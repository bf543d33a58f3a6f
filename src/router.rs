use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::auth::router::init_auth_router;
use crate::modules::classes::router::init_classes_router;
use crate::modules::cosmetics::router::init_cosmetics_router;
use crate::modules::groups::router::init_groups_router;
use crate::modules::invites::router::init_invites_router;
use crate::modules::rewards::router::init_rewards_router;
use crate::modules::skills::router::init_skills_router;
use crate::modules::students::router::init_students_router;
use crate::state::AppState;

/// Build the application router. Every resource router is declared and
/// merged here, once, at startup.
pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest("/auth", init_auth_router())
        .nest(
            "/api",
            Router::new()
                .nest("/classes", init_classes_router())
                .nest("/groups", init_groups_router())
                .nest("/skills", init_skills_router())
                .nest("/cosmetics", init_cosmetics_router())
                .nest("/rewards", init_rewards_router())
                .nest("/students", init_students_router())
                .nest("/invites", init_invites_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
