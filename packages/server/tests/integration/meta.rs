use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn root_reports_running() {
    let app = TestApp::spawn().await;
    let res = app.get(routes::ROOT).await;

    assert_eq!(res.status, 200);
    assert_eq!(
        res.body,
        json!({"message": "Today's Detective Backend is Running"})
    );
}

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::spawn().await;
    let res = app.get(routes::HEALTH).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body, json!({"status": "ok"}));
}

#[tokio::test]
async fn openapi_document_lists_scenario_paths() {
    let app = TestApp::spawn().await;
    let res = app.get("/api-docs/openapi.json").await;

    assert_eq!(res.status, 200);
    let paths = &res.body["paths"];
    assert!(paths["/scenarios/"]["get"].is_object());
    assert!(paths["/scenarios/"]["post"].is_object());
    assert!(paths["/scenarios/{id}"]["get"].is_object());
    assert!(paths["/scenarios/{id}"]["delete"].is_object());
    assert!(paths["/health"]["get"].is_object());
}

mod cors {
    use super::*;

    #[tokio::test]
    async fn any_origin_is_mirrored_with_credentials() {
        let app = TestApp::spawn().await;
        let res = app
            .client
            .get(app.url(routes::HEALTH))
            .header("Origin", "http://localhost:3000")
            .send()
            .await
            .expect("Failed to send GET request");

        assert_eq!(res.status(), 200);
        let headers = res.headers();
        assert_eq!(
            headers["access-control-allow-origin"],
            "http://localhost:3000"
        );
        assert_eq!(headers["access-control-allow-credentials"], "true");
    }

    #[tokio::test]
    async fn preflight_allows_requested_method_and_headers() {
        let app = TestApp::spawn().await;
        let res = app
            .client
            .request(
                reqwest::Method::OPTIONS,
                app.url(&routes::scenario("65a1b2c3d4e5f60718293a4b")),
            )
            .header("Origin", "https://detective.example")
            .header("Access-Control-Request-Method", "DELETE")
            .header("Access-Control-Request-Headers", "x-custom-header")
            .send()
            .await
            .expect("Failed to send OPTIONS request");

        assert_eq!(res.status(), 200);
        let headers = res.headers();
        assert_eq!(
            headers["access-control-allow-origin"],
            "https://detective.example"
        );
        assert_eq!(headers["access-control-allow-methods"], "DELETE");
        assert_eq!(headers["access-control-allow-headers"], "x-custom-header");
    }
}
