use axum::routing::{get, post};
use axum::Router;

use crate::handlers::plan;
use crate::state::AppState;

/// Plan routes.
///
/// ```text
/// POST /plan              -> generate_plan
/// GET  /plan              -> plan_usage
/// POST /plan/export       -> export_plan
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/plan", get(plan::plan_usage).post(plan::generate_plan))
        .route("/plan/export", post(plan::export_plan))
}
