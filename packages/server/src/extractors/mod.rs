pub mod json;
pub mod object_id;
pub mod query;
