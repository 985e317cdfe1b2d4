pub mod config;
pub mod cors;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Today's Detective Scenario API",
        version = "1.0.0",
        description = "Storage API for detective scenarios"
    ),
    paths(
        handlers::meta::root,
        handlers::meta::health,
        handlers::scenario::create_scenario,
        handlers::scenario::list_scenarios,
        handlers::scenario::get_scenario,
        handlers::scenario::delete_scenario,
    ),
    components(schemas(
        error::ErrorBody,
        models::meta::MessageResponse,
        models::meta::HealthResponse,
        models::scenario::CreateScenarioRequest,
        models::scenario::ScenarioSummary,
        models::scenario::ScenarioDetail,
    )),
    tags(
        (name = "Scenarios", description = "Scenario create, list, read and delete"),
        (name = "Meta", description = "Liveness endpoints"),
    ),
)]
pub struct ApiDoc;

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let cors = cors::cors_layer(&state.config.server.cors);
    let api = ApiDoc::openapi();

    routes::routes()
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api))
        .layer(cors)
}
