use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::meta::root))
        .route("/health", get(handlers::meta::health))
        .merge(scenario_routes())
}

fn scenario_routes() -> Router<AppState> {
    let collection =
        get(handlers::scenario::list_scenarios).post(handlers::scenario::create_scenario);

    // Served with and without the trailing slash.
    Router::new()
        .route("/scenarios", collection.clone())
        .route("/scenarios/", collection)
        .route(
            "/scenarios/{id}",
            get(handlers::scenario::get_scenario).delete(handlers::scenario::delete_scenario),
        )
}
