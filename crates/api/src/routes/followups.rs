use axum::routing::get;
use axum::Router;

use crate::handlers::followups;
use crate::state::AppState;

/// Follow-up routes.
///
/// ```text
/// POST /followups         -> generate_followups
/// GET  /followups         -> followups_usage
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/followups",
        get(followups::followups_usage).post(followups::generate_followups),
    )
}
