use bson::{Document, doc};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Database, IndexModel};
use tracing::{info, warn};

use crate::config::DatabaseConfig;
use crate::entity::scenario;

pub async fn init_db(config: &DatabaseConfig) -> Result<Database, mongodb::error::Error> {
    let mut opt = ClientOptions::parse(&config.url).await?;
    opt.app_name = Some("scenario-server".to_string());

    // The driver owns pooling, retries and reconnection.
    let client = Client::with_options(opt)?;
    Ok(client.database(&config.name))
}

/// Create the indexes backing the list query. Failures are logged, not fatal.
pub async fn ensure_indexes(db: &Database) {
    let collection = db.collection::<Document>(scenario::COLLECTION);

    // Default listing: newest first
    ensure_index(
        &collection,
        "idx_scenario_created",
        doc! { "created_at": -1, "_id": -1 },
    )
    .await;

    // Filtered listing: crime_type equality, newest first
    ensure_index(
        &collection,
        "idx_scenario_crime_type_created",
        doc! { "crime_type": 1, "created_at": -1, "_id": -1 },
    )
    .await;
}

async fn ensure_index(collection: &mongodb::Collection<Document>, name: &str, keys: Document) {
    let model = IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder().name(name.to_string()).build())
        .build();

    match collection.create_index(model).await {
        Ok(_) => info!("Ensured index {} exists", name),
        Err(e) => warn!("Failed to create index {}: {}", name, e),
    }
}
