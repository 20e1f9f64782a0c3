pub mod followups;
pub mod health;
pub mod plan;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /followups              POST generate, GET usage (405)
/// /plan                   POST generate, GET usage (405)
/// /plan/export            POST export
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(followups::router())
        .merge(plan::router())
}
