//! Handlers for plan generation and export.

use autopath_core::export::PlanExport;
use autopath_core::followup::FollowupAnswers;
use autopath_core::intake::Intake;
use autopath_core::plan::Plan;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
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
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanRequest {
    #[validate(nested)]
    pub intake: Intake,
    /// Answers keyed by question id. Absent and `null` both mean none.
    #[serde(default)]
    pub followup_answers: Option<FollowupAnswers>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ExportPlanRequest {
    #[validate(nested)]
    pub intake: Intake,
    pub plan: Plan,
}

// ---------------------------------------------------------------------------
// POST /plan
// ---------------------------------------------------------------------------

/// Generate a week-by-week study plan.
pub async fn generate_plan(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<GeneratePlanRequest>,
) -> AppResult<Json<Plan>> {
    let answers = body.followup_answers.unwrap_or_default();
    let plan = state.provider.generate_plan(&body.intake, &answers).await?;

    tracing::info!(
        provider = state.provider.name(),
        skill = %body.intake.skill,
        answers = answers.len(),
        weeks = plan.weeks.len(),
        total_hours = plan.total_hours(),
        "Generated learning plan",
    );

    Ok(Json(plan))
}

// ---------------------------------------------------------------------------
// GET /plan
// ---------------------------------------------------------------------------

pub async fn plan_usage() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        Json(json!({ "message": "Use POST to generate a learning plan" })),
    )
}

// ---------------------------------------------------------------------------
// POST /plan/export
// ---------------------------------------------------------------------------

/// Stamp a plan with its intake and generation time for download.
pub async fn export_plan(
    ValidatedJson(body): ValidatedJson<ExportPlanRequest>,
) -> AppResult<Json<PlanExport>> {
    let weeks = body.plan.weeks.len();
    let export = PlanExport::new(body.intake, body.plan, Utc::now())?;

    tracing::debug!(weeks, "Exported learning plan");

    Ok(Json(export))
}
