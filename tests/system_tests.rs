use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use tower::ServiceExt;

use careerd::config::Config;
use careerd::db::{Store, UserProfile};
use careerd::state::SharedState;

async fn spawn_app() -> Router {
    let mut config = Config::default();
    config.general.database_url = "sqlite::memory:".to_string();

    let store = Store::with_pool_options(&config.general.database_url, 1, 1)
        .await
        .expect("Failed to create store");

    let shared =
        SharedState::with_store(config, store).expect("Failed to create shared state");
    let state = careerd::api::create_app_state(Arc::new(shared), None);
    careerd::api::router(state).await
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn db_health_lists_all_tables() {
    let app = spawn_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/system/health/db")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["database"], "connected");
    assert!(json["data"]["timestamp"].as_str().unwrap().contains('T'));

    let tables: Vec<&str> = json["data"]["tables"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    for expected in [
        "assessments",
        "cover_letters",
        "industry_insights",
        "resumes",
        "users",
    ] {
        assert!(tables.contains(&expected), "missing table: {expected}");
    }
}

#[tokio::test]
async fn setup_is_idempotent() {
    let app = spawn_app().await;

    // The store migrates on connect, so the first call already finds
    // every table in place.
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/system/setup")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["status"], "ok");
        assert_eq!(json["data"]["tables_created"], false);
        assert!(json["data"]["tables"].as_array().unwrap().len() >= 5);
        assert!(json["data"]["timestamp"].as_str().unwrap().contains('T'));
    }
}

#[tokio::test]
async fn schema_bootstrap_creates_missing_tables_once() {
    // Bare single connection, no migrations yet.
    let mut opt = ConnectOptions::new("sqlite::memory:".to_string());
    opt.max_connections(1).min_connections(1);
    let conn = Database::connect(opt).await.expect("Failed to connect");
    let store = Store { conn };

    assert!(store.bootstrap_schema().await.expect("First bootstrap failed"));
    assert!(!store.bootstrap_schema().await.expect("Second bootstrap failed"));

    let tables = store.table_names().await.expect("Failed to list tables");
    assert!(tables.iter().any(|t| t == "resumes"));
}

#[tokio::test]
async fn status_reports_version_and_counts() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/system/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["data"]["counts"]["users"], 0);
}

#[tokio::test]
async fn status_counts_reflect_rows() {
    let mut config = Config::default();
    config.general.database_url = "sqlite::memory:".to_string();

    let store = Store::with_pool_options(&config.general.database_url, 1, 1)
        .await
        .expect("Failed to create store");

    store
        .upsert_user_mirror(&UserProfile {
            clerk_user_id: "user_1".to_string(),
            name: "Counted".to_string(),
            email: "counted@example.com".to_string(),
            image_url: None,
        })
        .await
        .expect("Failed to seed user");

    let shared = SharedState::with_store(config, store)
        .expect("Failed to create shared state");
    let state = careerd::api::create_app_state(Arc::new(shared), None);
    let app = careerd::api::router(state).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/system/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = body_json(response).await;
    assert_eq!(json["data"]["counts"]["users"], 1);
    assert_eq!(json["data"]["counts"]["resumes"], 0);
}
