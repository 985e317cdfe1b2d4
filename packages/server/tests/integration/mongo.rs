//! The listing and lifecycle cases again, this time against a real MongoDB
//! started once per test binary. When no Docker daemon is reachable the
//! cases print a notice and return.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, OnceLock};

use serde_json::json;
use testcontainers::ContainerAsync;
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::mongo::Mongo;
use tokio::sync::OnceCell;

use scenario_server::config::DatabaseConfig;
use scenario_server::database;
use scenario_server::store::MongoScenarioStore;

use crate::common::{TestApp, routes};
use crate::scenario::{
    assert_case_data_key_order_kept, assert_empty_crime_type_matches_literally,
    assert_filter_excludes_other_crime_types, assert_paging_is_newest_first,
};

/// MongoDB container shared across all tests in this binary, or `None` without Docker.
static SHARED_MONGO: OnceCell<Option<(ContainerAsync<Mongo>, u16)>> = OnceCell::const_new();

/// Monotonic counter for unique database names.
static DB_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Container ID for atexit cleanup.
static CONTAINER_ID: OnceLock<String> = OnceLock::new();

extern "C" fn cleanup_container() {
    if let Some(id) = CONTAINER_ID.get() {
        let _ = std::process::Command::new("docker")
            .args(["rm", "-f", "-v", id])
            .output();
    }
}

async fn shared_mongo_port() -> Option<u16> {
    let shared = SHARED_MONGO
        .get_or_init(|| async {
            let container = match Mongo::default().start().await {
                Ok(container) => container,
                Err(e) => {
                    eprintln!("MongoDB container unavailable, skipping Mongo-backed cases: {e}");
                    return None;
                }
            };
            let port = container
                .get_host_port_ipv4(27017)
                .await
                .expect("Failed to get MongoDB port");

            let _ = CONTAINER_ID.set(container.id().to_string());
            // Statics are never dropped, so remove the container at process exit.
            unsafe { libc::atexit(cleanup_container) };

            Some((container, port))
        })
        .await;
    shared.as_ref().map(|(_, port)| *port)
}

/// Spawn a server backed by a fresh database on the shared MongoDB container.
async fn spawn_with_mongo() -> Option<TestApp> {
    let port = shared_mongo_port().await?;
    let db_name = format!(
        "scenario_test_{}",
        DB_COUNTER.fetch_add(1, Ordering::Relaxed)
    );

    let db = database::init_db(&DatabaseConfig {
        url: format!("mongodb://127.0.0.1:{port}"),
        name: db_name,
    })
    .await
    .expect("Failed to initialize MongoDB client");
    database::ensure_indexes(&db).await;

    Some(TestApp::spawn_with_store(Arc::new(MongoScenarioStore::new(&db))).await)
}

mod mongo_listing {
    use super::*;

    #[tokio::test]
    async fn pages_are_newest_first_across_crime_types() {
        let Some(app) = spawn_with_mongo().await else {
            return;
        };
        assert_paging_is_newest_first(&app).await;
    }

    #[tokio::test]
    async fn filter_excludes_other_crime_types() {
        let Some(app) = spawn_with_mongo().await else {
            return;
        };
        assert_filter_excludes_other_crime_types(&app).await;
    }

    #[tokio::test]
    async fn empty_crime_type_filter_matches_only_empty() {
        let Some(app) = spawn_with_mongo().await else {
            return;
        };
        assert_empty_crime_type_matches_literally(&app).await;
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let Some(app) = spawn_with_mongo().await else {
            return;
        };
        app.create_scenario("Only", "arson").await;

        let res = app.get(&routes::scenarios_page(3, 10)).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!([]));
    }
}

mod mongo_lifecycle {
    use super::*;

    #[tokio::test]
    async fn locked_door_lifecycle() {
        let Some(app) = spawn_with_mongo().await else {
            return;
        };

        let created = app
            .post(
                routes::SCENARIOS,
                &json!({
                    "title": "The Locked Door",
                    "summary": "A body found in a sealed room",
                    "crime_type": "살인",
                    "case_data": {"clues": ["knife"], "suspects": [{"name": "Butler", "age": 54}]},
                }),
            )
            .await;
        assert_eq!(created.status, 200, "{}", created.text);
        let id = created.id();
        assert_eq!(id.len(), 24);

        let detail = app.get(&routes::scenario(&id)).await;
        assert_eq!(detail.status, 200);
        assert_eq!(
            detail.body["case_data"],
            json!({"clues": ["knife"], "suspects": [{"name": "Butler", "age": 54}]})
        );
        assert_eq!(detail.body["created_at"], created.body["created_at"]);

        let listed = app.get("/scenarios/?crime_type=%EC%82%B4%EC%9D%B8").await;
        assert_eq!(listed.status, 200);
        assert_eq!(listed.ids(), vec![id.clone()]);
        assert!(listed.body[0].get("case_data").is_none());

        assert_eq!(app.delete(&routes::scenario(&id)).await.status, 200);
        assert_eq!(app.get(&routes::scenario(&id)).await.status, 404);
        assert_eq!(app.delete(&routes::scenario(&id)).await.status, 404);
    }

    #[tokio::test]
    async fn case_data_key_order_is_kept() {
        let Some(app) = spawn_with_mongo().await else {
            return;
        };
        assert_case_data_key_order_kept(&app).await;
    }
}
