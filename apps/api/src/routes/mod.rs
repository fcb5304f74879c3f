pub mod health;
pub mod landing;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::categorization::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing::landing_handler))
        .route("/health", get(health::health_handler))
        // Categorization API
        .route(
            "/mentor_categorize",
            post(handlers::handle_mentor_categorize),
        )
        .route("/coach_categorize", post(handlers::handle_coach_categorize))
        // Descriptions have no length cap.
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
