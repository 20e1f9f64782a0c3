//! Handlers for follow-up question generation.

use autopath_core::followup::FollowupsPayload;
use autopath_core::intake::Intake;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateFollowupsRequest {
    #[validate(nested)]
    pub intake: Intake,
}

// ---------------------------------------------------------------------------
// POST /followups
// ---------------------------------------------------------------------------

/// Generate clarifying questions for a learner's intake.
pub async fn generate_followups(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<GenerateFollowupsRequest>,
) -> AppResult<Json<FollowupsPayload>> {
    let payload = state.provider.generate_followups(&body.intake).await?;

    tracing::info!(
        provider = state.provider.name(),
        skill = %body.intake.skill,
        questions = payload.questions.len(),
        "Generated follow-up questions",
    );

    Ok(Json(payload))
}

// ---------------------------------------------------------------------------
// GET /followups
// ---------------------------------------------------------------------------

pub async fn followups_usage() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        Json(json!({ "message": "Use POST to generate follow-up questions" })),
    )
}
