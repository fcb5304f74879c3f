//! Axum route handlers for the Categorization API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::categorization::classifier::{classify, Classification};
use crate::categorization::directory::Directory;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Free-text problem description. Empty text is accepted and classified.
#[derive(Debug, Deserialize)]
pub struct ProblemRequest {
    pub description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /mentor_categorize
///
/// Categorizes a problem and assigns a mentor: `{"category", "mentor"}`.
pub async fn handle_mentor_categorize(
    State(state): State<AppState>,
    payload: Result<Json<ProblemRequest>, JsonRejection>,
) -> Result<Json<Classification>, AppError> {
    categorize(state, payload, Directory::Mentor).await
}

/// POST /coach_categorize
///
/// Categorizes a problem and assigns a coach: `{"category", "coach"}`.
pub async fn handle_coach_categorize(
    State(state): State<AppState>,
    payload: Result<Json<ProblemRequest>, JsonRejection>,
) -> Result<Json<Classification>, AppError> {
    categorize(state, payload, Directory::Coach).await
}

async fn categorize(
    state: AppState,
    payload: Result<Json<ProblemRequest>, JsonRejection>,
    directory: Directory,
) -> Result<Json<Classification>, AppError> {
    let Json(request) = payload?;
    let classification = classify(state.inference.as_ref(), &request.description, directory).await?;
    Ok(Json(classification))
}
