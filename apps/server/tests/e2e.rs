use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::AnyPool;
use tempfile::TempDir;
use tower::ServiceExt;
use userbase_config::AppConfig;
use userbase_gateway::{create_router, GatewayState};
use userbase_runtime::BackendServices;

struct TestApp {
    router: Router,
    services: BackendServices,
    _db_dir: TempDir,
}

struct TestResponse {
    status: StatusCode,
    text: String,
    json: Value,
}

impl TestApp {
    async fn new() -> Self {
        let db_dir = TempDir::new().expect("create temp dir");
        let db_path = db_dir.path().join("userbase-test.db");

        let mut config = AppConfig::default();
        config.database.url = format!("sqlite://{}", db_path.to_string_lossy());
        config.database.max_connections = 5;

        let services = BackendServices::initialise(&config)
            .await
            .expect("initialise backend services");

        let router = create_router(GatewayState::from_pool(services.pool().clone()));

        Self {
            router,
            services,
            _db_dir: db_dir,
        }
    }

    async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let body = body.map(|json_body| json_body.to_string());
        self.raw_request(method, uri, body.as_deref()).await
    }

    async fn raw_request(&self, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
        let app = self.router.clone();
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(raw) = body {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(raw.to_string())
        } else {
            Body::empty()
        };

        let response = app
            .oneshot(builder.body(body).expect("build request"))
            .await
            .expect("dispatch request");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("collect response body")
            .to_bytes();
        let text = String::from_utf8(bytes.to_vec()).unwrap_or_default();
        let json = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::Null)
        };

        TestResponse { status, text, json }
    }

    fn pool(&self) -> &AnyPool {
        self.services.pool()
    }

    async fn stored_row(&self, id: &str) -> Option<(String, String, String)> {
        sqlx::query_as("SELECT id, name, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .expect("query users table")
    }
}

#[tokio::test]
async fn user_lifecycle() {
    let app = TestApp::new().await;

    let created = app
        .request(
            Method::POST,
            "/users",
            Some(json!({"id": "1", "name": "Ana", "email": "ana@test.com"})),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert!(created.text.is_empty());

    let fetched = app.request(Method::GET, "/users/1", None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(
        fetched.json,
        json!({"id": "1", "name": "Ana", "email": "ana@test.com"})
    );

    let updated = app
        .request(
            Method::PUT,
            "/users/1",
            Some(json!({"name": "Nuevo", "email": "nuevo@test.com"})),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert!(updated.text.is_empty());

    let fetched = app.request(Method::GET, "/users/1", None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(
        fetched.json,
        json!({"id": "1", "name": "Nuevo", "email": "nuevo@test.com"})
    );

    let deleted = app.request(Method::DELETE, "/users/1", None).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let missing = app.request(Method::GET, "/users/1", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.json, json!({"error": "not found"}));
}

#[tokio::test]
async fn duplicate_create_is_internal_error_and_keeps_original() {
    let app = TestApp::new().await;
    let user = json!({"id": "1", "name": "Ana", "email": "ana@test.com"});

    let first = app.request(Method::POST, "/users", Some(user)).await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request(
            Method::POST,
            "/users",
            Some(json!({"id": "1", "name": "Other", "email": "other@test.com"})),
        )
        .await;
    assert_eq!(second.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(second.json["error"].is_string());

    assert_eq!(
        app.stored_row("1").await,
        Some((
            "1".to_string(),
            "Ana".to_string(),
            "ana@test.com".to_string()
        ))
    );
}

#[tokio::test]
async fn update_uses_path_id_over_body_id() {
    let app = TestApp::new().await;

    for (id, name) in [("1", "Ana"), ("2", "Bruno")] {
        let response = app
            .request(
                Method::POST,
                "/users",
                Some(json!({"id": id, "name": name, "email": format!("{id}@test.com")})),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let updated = app
        .request(
            Method::PUT,
            "/users/1",
            Some(json!({"id": "2", "name": "Nuevo", "email": "nuevo@test.com"})),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);

    assert_eq!(
        app.stored_row("1").await,
        Some((
            "1".to_string(),
            "Nuevo".to_string(),
            "nuevo@test.com".to_string()
        ))
    );
    assert_eq!(
        app.stored_row("2").await,
        Some((
            "2".to_string(),
            "Bruno".to_string(),
            "2@test.com".to_string()
        ))
    );
}

#[tokio::test]
async fn update_and_delete_missing_user_are_not_found() {
    let app = TestApp::new().await;

    let updated = app
        .request(
            Method::PUT,
            "/users/ghost",
            Some(json!({"name": "x", "email": "x@test.com"})),
        )
        .await;
    assert_eq!(updated.status, StatusCode::NOT_FOUND);
    assert_eq!(updated.json, json!({"error": "not found"}));
    assert_eq!(app.stored_row("ghost").await, None);

    let deleted = app.request(Method::DELETE, "/users/ghost", None).await;
    assert_eq!(deleted.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn second_delete_is_not_found() {
    let app = TestApp::new().await;

    app.request(
        Method::POST,
        "/users",
        Some(json!({"id": "1", "name": "Ana", "email": "ana@test.com"})),
    )
    .await;

    let first = app.request(Method::DELETE, "/users/1", None).await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app.request(Method::DELETE, "/users/1", None).await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);
    assert_eq!(second.json, json!({"error": "not found"}));
}

#[tokio::test]
async fn malformed_bodies_are_rejected_without_writes() {
    let app = TestApp::new().await;

    let created = app
        .raw_request(Method::POST, "/users", Some("{bad json"))
        .await;
    assert_eq!(created.status, StatusCode::BAD_REQUEST);
    assert_eq!(created.json, json!({"error": "invalid body"}));

    let updated = app
        .raw_request(Method::PUT, "/users/1", Some("not json at all"))
        .await;
    assert_eq!(updated.status, StatusCode::BAD_REQUEST);
    assert_eq!(updated.json, json!({"error": "invalid body"}));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(app.pool())
        .await
        .expect("count users");
    assert_eq!(count, 0);
}

#[tokio::test]
async fn health_and_openapi_document() {
    let app = TestApp::new().await;

    let health = app.request(Method::GET, "/health", None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.json["status"], "ok");
    assert!(health.json["timestamp"].is_string());

    let docs = app.request(Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(docs.status, StatusCode::OK);
    assert!(docs.json["paths"]["/users"]["post"].is_object());
    assert!(docs.json["paths"]["/users/{id}"]["delete"].is_object());
}
