use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::entity::scenario;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::object_id::ObjectIdPath;
use crate::extractors::query::AppQuery;
use crate::models::meta::MessageResponse;
use crate::models::scenario::*;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/scenarios/",
    tag = "Scenarios",
    operation_id = "createScenario",
    summary = "Create a new scenario",
    description = "Stores a scenario. The server assigns `id` and `created_at`. `case_data` is stored verbatim and echoed back.",
    request_body = CreateScenarioRequest,
    responses(
        (status = 200, description = "Scenario created", body = ScenarioDetail),
        (status = 422, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(crime_type = %payload.crime_type))]
pub async fn create_scenario(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateScenarioRequest>,
) -> Result<Json<ScenarioDetail>, AppError> {
    validate_create_scenario(&payload)?;

    let new_scenario = scenario::NewModel {
        title: payload.title,
        summary: payload.summary,
        crime_type: payload.crime_type,
        case_data: payload.case_data,
        created_at: scenario::now_millis(),
    };

    let id = state.store.insert(&new_scenario).await?;
    tracing::info!(%id, "Scenario created");

    Ok(Json(new_scenario.into_model(id).into()))
}

#[utoipa::path(
    get,
    path = "/scenarios/",
    tag = "Scenarios",
    operation_id = "listScenarios",
    summary = "List scenarios",
    description = "Returns scenarios newest first, without `case_data`. Supports 1-based pagination and an exact-match `crime_type` filter. A page past the end yields an empty array.",
    params(ScenarioListQuery),
    responses(
        (status = 200, description = "Scenario summaries", body = Vec<ScenarioSummary>),
        (status = 422, description = "Invalid page or limit (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_scenarios(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ScenarioListQuery>,
) -> Result<Json<Vec<ScenarioSummary>>, AppError> {
    let (skip, limit) = query.window()?;

    let data = state
        .store
        .list(&query.filter(), skip, limit)
        .await?
        .into_iter()
        .map(ScenarioSummary::from)
        .collect();

    Ok(Json(data))
}

#[utoipa::path(
    get,
    path = "/scenarios/{id}",
    tag = "Scenarios",
    operation_id = "getScenario",
    summary = "Get a scenario by ID",
    description = "Returns the full scenario, including `case_data`.",
    params(("id" = String, Path, description = "Scenario ID (24 hex characters)")),
    responses(
        (status = 200, description = "Scenario details", body = ScenarioDetail),
        (status = 400, description = "Malformed ID (INVALID_ID)", body = ErrorBody),
        (status = 404, description = "Scenario not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_scenario(
    State(state): State<AppState>,
    ObjectIdPath(id): ObjectIdPath,
) -> Result<Json<ScenarioDetail>, AppError> {
    let model = state
        .store
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Scenario not found".into()))?;

    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/scenarios/{id}",
    tag = "Scenarios",
    operation_id = "deleteScenario",
    summary = "Delete a scenario by ID",
    description = "Permanently deletes a scenario. Deleting an already deleted scenario returns 404.",
    params(("id" = String, Path, description = "Scenario ID (24 hex characters)")),
    responses(
        (status = 200, description = "Scenario deleted", body = MessageResponse),
        (status = 400, description = "Malformed ID (INVALID_ID)", body = ErrorBody),
        (status = 404, description = "Scenario not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_scenario(
    State(state): State<AppState>,
    ObjectIdPath(id): ObjectIdPath,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound("Scenario not found".into()));
    }

    tracing::info!(%id, "Scenario deleted");
    Ok(Json(MessageResponse::new("Scenario deleted successfully")))
}
