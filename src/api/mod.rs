mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::db::Database;

pub fn create_router(db: Database) -> Router {
    let api = Router::new()
        // Characters
        .route("/characters", get(handlers::list_characters))
        .route("/characters", post(handlers::create_character))
        .route("/characters/{id}", get(handlers::get_character))
        // Breathing techniques
        .route("/breathing-techniques", get(handlers::list_techniques))
        .route("/breathing-techniques", post(handlers::create_technique))
        .route("/breathing-techniques/{id}", get(handlers::get_technique))
        // Story arcs
        .route("/story-arcs", get(handlers::list_story_arcs))
        .route("/story-arcs", post(handlers::create_story_arc))
        .route("/story-arcs/{id}", get(handlers::get_story_arc))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}
