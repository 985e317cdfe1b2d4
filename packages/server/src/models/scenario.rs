use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entity::scenario;
use crate::error::AppError;
use crate::store::ScenarioFilter;

use super::shared::{page_window, validate_title};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateScenarioRequest {
    #[schema(example = "The Locked Door")]
    pub title: String,
    #[schema(example = "A body found in a sealed room")]
    pub summary: String,
    /// Free-form category label, e.g. `homicide` or `arson`.
    #[schema(example = "homicide")]
    pub crime_type: String,
    /// Full case content. Stored and returned verbatim.
    #[schema(value_type = Object)]
    pub case_data: Map<String, Value>,
}

/// Scenario view used in listings. Never carries `case_data`.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ScenarioSummary {
    /// 24-character hex object id.
    #[serde(alias = "_id")]
    #[schema(example = "65a1b2c3d4e5f60718293a4b")]
    pub id: String,
    pub title: String,
    pub summary: String,
    pub crime_type: String,
    pub created_at: DateTime<Utc>,
}

/// Full scenario view, including `case_data`.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ScenarioDetail {
    #[serde(alias = "_id")]
    #[schema(example = "65a1b2c3d4e5f60718293a4b")]
    pub id: String,
    pub title: String,
    pub summary: String,
    pub crime_type: String,
    pub created_at: DateTime<Utc>,
    #[schema(value_type = Object)]
    pub case_data: Map<String, Value>,
}

#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScenarioListQuery {
    /// 1-based page number. Defaults to 1.
    #[param(minimum = 1, example = 1)]
    pub page: Option<i64>,
    /// Page size, 1-50. Defaults to 10.
    #[param(minimum = 1, maximum = 50, example = 10)]
    pub limit: Option<i64>,
    /// Exact-match crime type filter.
    pub crime_type: Option<String>,
}

impl ScenarioListQuery {
    /// Validated `(skip, limit)` window for this query.
    pub fn window(&self) -> Result<(u64, i64), AppError> {
        page_window(self.page, self.limit)
    }

    /// Exact match, including an empty `crime_type`.
    pub fn filter(&self) -> ScenarioFilter {
        ScenarioFilter {
            crime_type: self.crime_type.clone(),
        }
    }
}

impl From<scenario::SummaryModel> for ScenarioSummary {
    fn from(m: scenario::SummaryModel) -> Self {
        Self {
            id: m.id.to_hex(),
            title: m.title,
            summary: m.summary,
            crime_type: m.crime_type,
            created_at: m.created_at,
        }
    }
}

impl From<scenario::Model> for ScenarioDetail {
    fn from(m: scenario::Model) -> Self {
        Self {
            id: m.id.to_hex(),
            title: m.title,
            summary: m.summary,
            crime_type: m.crime_type,
            created_at: m.created_at,
            case_data: m.case_data,
        }
    }
}

pub fn validate_create_scenario(req: &CreateScenarioRequest) -> Result<(), AppError> {
    validate_title(&req.title)
}
