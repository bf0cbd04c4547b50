use axum::{routing::post, Router};

use crate::{
    controller::{agent, execute},
    state::AppState,
};

/// Internal API routes.
///
/// `/execute` is only routed when a bearer token is configured for it.
pub fn router(execute_enabled: bool) -> Router<AppState> {
    let router = Router::new().route("/agent/query", post(agent::query));

    if execute_enabled {
        router.route("/execute", post(execute::execute))
    } else {
        router
    }
}
