use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Collection holding every scenario document.
pub const COLLECTION: &str = "scenarios";

/// A scenario as stored in MongoDB.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub title: String,
    pub summary: String,
    pub crime_type: String,
    /// Full case content (clues, suspects, ...). Stored verbatim.
    pub case_data: Map<String, Value>,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// List projection of [`Model`]: everything except `case_data`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryModel {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub title: String,
    pub summary: String,
    pub crime_type: String,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// A scenario about to be inserted. The `_id` is left for the storage layer to assign.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewModel {
    pub title: String,
    pub summary: String,
    pub crime_type: String,
    pub case_data: Map<String, Value>,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl NewModel {
    /// Attach the identifier assigned on insert.
    pub fn into_model(self, id: ObjectId) -> Model {
        Model {
            id,
            title: self.title,
            summary: self.summary,
            crime_type: self.crime_type,
            case_data: self.case_data,
            created_at: self.created_at,
        }
    }
}

impl From<Model> for SummaryModel {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            summary: m.summary,
            crime_type: m.crime_type,
            created_at: m.created_at,
        }
    }
}

/// Current UTC time truncated to the millisecond precision of BSON datetimes,
/// so a locally held timestamp equals the stored one.
pub fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}
