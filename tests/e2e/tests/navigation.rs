use e2e::test_server::TestServer;

#[tokio::test]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("DOCTYPE") || body.contains("<html"), "Should contain HTML");
    assert!(
        body.contains("Permaguanacaste"),
        "Server-rendered gate should show the brand"
    );
}

#[tokio::test]
async fn test_health_endpoints() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.path("/api/health"))
        .await
        .expect("Failed to fetch health");
    assert!(response.status().is_success());

    let detailed: serde_json::Value = reqwest::get(server.path("/api/health/detailed"))
        .await
        .expect("Failed to fetch detailed health")
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str(&body).ok())
        .expect("detailed health should be JSON");
    assert_eq!(detailed["status"], "healthy");
    assert_eq!(detailed["checks"]["contact_transport"], "console");
}

#[tokio::test]
async fn test_service_page_renders_without_gate() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let body = reqwest::get(server.path("/services/food-systems"))
        .await
        .expect("Failed to fetch service page")
        .text()
        .await
        .expect("Failed to read body");

    assert!(body.contains("Food System Designs"));
    assert!(body.contains("Seed to Table Planning"));
}

#[tokio::test]
async fn test_unknown_routes_render_not_found() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    for path in ["/services/orchards", "/does/not/exist"] {
        let body = reqwest::get(server.path(path))
            .await
            .expect("Failed to fetch page")
            .text()
            .await
            .expect("Failed to read body");
        assert!(body.contains("Page not found"), "{path} should render not-found");
    }
}
