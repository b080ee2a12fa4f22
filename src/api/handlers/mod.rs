use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::db::Database;
use crate::models::*;

// ============================================================
// Error Handling
// ============================================================

/// Log an internal error and return a sanitized response to the client.
/// The full error is logged server-side for debugging, but clients only
/// see a generic message to avoid leaking internal details.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

// ============================================================
// Health
// ============================================================

/// Report server liveness and whether the database answers a probe query.
pub async fn health(State(db): State<Database>) -> impl IntoResponse {
    match db.probe() {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "status": "ok", "database": "reachable" })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "status": "unavailable", "database": "unreachable" })),
            )
        }
    }
}

// ============================================================
// Characters
// ============================================================

pub async fn list_characters(
    State(db): State<Database>,
) -> Result<Json<Vec<Character>>, (StatusCode, String)> {
    db.get_all_characters().map(Json).map_err(internal_error)
}

pub async fn get_character(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Json<Character>, (StatusCode, String)> {
    db.get_character(id)
        .map_err(internal_error)?
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Character not found".to_string()))
}

pub async fn create_character(
    State(db): State<Database>,
    Json(input): Json<CreateCharacterInput>,
) -> Result<(StatusCode, Json<Character>), (StatusCode, String)> {
    db.create_character(input)
        .map(|c| (StatusCode::CREATED, Json(c)))
        .map_err(internal_error)
}

// ============================================================
// Breathing Techniques
// ============================================================

pub async fn list_techniques(
    State(db): State<Database>,
) -> Result<Json<Vec<BreathingTechnique>>, (StatusCode, String)> {
    db.get_all_techniques().map(Json).map_err(internal_error)
}

pub async fn get_technique(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Json<BreathingTechnique>, (StatusCode, String)> {
    db.get_technique(id)
        .map_err(internal_error)?
        .map(Json)
        .ok_or((
            StatusCode::NOT_FOUND,
            "Breathing technique not found".to_string(),
        ))
}

pub async fn create_technique(
    State(db): State<Database>,
    Json(input): Json<CreateTechniqueInput>,
) -> Result<(StatusCode, Json<BreathingTechnique>), (StatusCode, String)> {
    db.create_technique(input)
        .map(|t| (StatusCode::CREATED, Json(t)))
        .map_err(internal_error)
}

// ============================================================
// Story Arcs
// ============================================================

pub async fn list_story_arcs(
    State(db): State<Database>,
) -> Result<Json<Vec<StoryArc>>, (StatusCode, String)> {
    db.get_all_story_arcs().map(Json).map_err(internal_error)
}

pub async fn get_story_arc(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Json<StoryArc>, (StatusCode, String)> {
    db.get_story_arc(id)
        .map_err(internal_error)?
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Story arc not found".to_string()))
}

pub async fn create_story_arc(
    State(db): State<Database>,
    Json(input): Json<CreateStoryArcInput>,
) -> Result<(StatusCode, Json<StoryArc>), (StatusCode, String)> {
    db.create_story_arc(input)
        .map(|a| (StatusCode::CREATED, Json(a)))
        .map_err(internal_error)
}
