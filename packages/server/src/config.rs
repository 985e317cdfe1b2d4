use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE_NAME: &str = "todays_detective";

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Allowed origins. A `"*"` entry permits every origin.
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// MongoDB connection string.
    pub url: String,
    /// Database holding the `scenarios` collection.
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("server.cors.allow_origins", vec!["*"])?
            .set_default("server.cors.max_age", 3600)?
            .set_default("database.url", DEFAULT_DATABASE_URL)?
            .set_default("database.name", DEFAULT_DATABASE_NAME)?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., DETECTIVE__SERVER__PORT)
            .add_source(
                Environment::with_prefix("DETECTIVE")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors.allow_origins")
                    .try_parsing(true),
            )
            // Plain MONGODB_URL / DB_NAME take precedence when set
            .set_override_option("database.url", std::env::var("MONGODB_URL").ok())?
            .set_override_option("database.name", std::env::var("DB_NAME").ok())?
            .build()?;

        s.try_deserialize()
    }
}
