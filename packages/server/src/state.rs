use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::ScenarioStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ScenarioStore>,
    pub config: AppConfig,
}
