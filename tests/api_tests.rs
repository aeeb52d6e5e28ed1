use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use careerd::config::Config;
use careerd::db::{Store, UserProfile};
use careerd::entities::users;
use careerd::services::{IdentityError, IdentityService};
use careerd::state::SharedState;

/// Identity stub that maps fixed session tokens to pre-seeded users,
/// bypassing the real provider.
struct StubIdentity {
    sessions: HashMap<String, users::Model>,
}

#[async_trait::async_trait]
impl IdentityService for StubIdentity {
    async fn resolve(&self, token: &str) -> Result<users::Model, IdentityError> {
        self.sessions
            .get(token)
            .cloned()
            .ok_or(IdentityError::Unauthorized)
    }

    async fn current(&self, token: &str) -> Result<users::Model, IdentityError> {
        self.resolve(token).await
    }
}

async fn seed_user(store: &Store, clerk_id: &str, email: &str) -> users::Model {
    store
        .upsert_user_mirror(&UserProfile {
            clerk_user_id: clerk_id.to_string(),
            name: "Test User".to_string(),
            email: email.to_string(),
            image_url: None,
        })
        .await
        .expect("Failed to seed user")
}

/// Router over an in-memory database with two authenticated sessions:
/// `sess_a` and `sess_b`, each bound to its own user.
async fn spawn_app() -> Router {
    let mut config = Config::default();
    config.general.database_url = "sqlite::memory:".to_string();

    // Single connection: each :memory: connection is its own database.
    let store = Store::with_pool_options(&config.general.database_url, 1, 1)
        .await
        .expect("Failed to create store");

    let user_a = seed_user(&store, "user_a", "a@example.com").await;
    let user_b = seed_user(&store, "user_b", "b@example.com").await;

    let mut sessions = HashMap::new();
    sessions.insert("sess_a".to_string(), user_a);
    sessions.insert("sess_b".to_string(), user_b);

    let mut shared =
        SharedState::with_store(config, store).expect("Failed to create shared state");
    shared.identity = Arc::new(StubIdentity { sessions });

    let state = careerd::api::create_app_state(Arc::new(shared), None);
    careerd::api::router(state).await
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, token: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn protected_routes_require_a_session() {
    let app = spawn_app().await;

    for uri in [
        "/api/resume",
        "/api/cover-letters",
        "/api/assessments",
        "/api/insights",
        "/api/users/me",
    ] {
        let response = app.clone().oneshot(get(uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "uri: {uri}");
    }

    let response = app
        .clone()
        .oneshot(get("/api/resume", Some("bogus_token")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_is_public() {
    let app = spawn_app().await;

    let response = app
        .oneshot(get("/api/system/health", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "ok");
    assert!(json["data"]["environment"]["has_database_url"].is_boolean());
    assert!(json["data"]["message"].is_string());
    assert!(json["data"]["timestamp"].as_str().unwrap().contains('T'));
}

#[tokio::test]
async fn resume_is_absent_until_saved() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(get("/api/resume", Some("sess_a")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn saving_a_resume_twice_updates_the_same_row() {
    let app = spawn_app().await;

    let first = serde_json::json!({ "content": r#"{"summary":"v1"}"# });
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/resume", "sess_a", first))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let first_id = body_json(response).await["data"]["id"].clone();

    let second = serde_json::json!({ "content": r#"{"summary":"v2"}"# });
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/resume", "sess_a", second))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["data"]["id"], first_id);
    assert_eq!(json["data"]["content"], r#"{"summary":"v2"}"#);
}

#[tokio::test]
async fn resume_content_must_be_json() {
    let app = spawn_app().await;

    let payload = serde_json::json!({ "content": "not json at all" });
    let response = app
        .oneshot(json_request("PUT", "/api/resume", "sess_a", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn improve_rejects_empty_content() {
    let app = spawn_app().await;

    let payload = serde_json::json!({ "type": "summary", "current": "   " });
    let response = app
        .oneshot(json_request("POST", "/api/resume/improve", "sess_a", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cover_letters_are_scoped_to_their_owner() {
    let app = spawn_app().await;

    let payload = serde_json::json!({
        "job_title": "Staff Engineer",
        "company_name": "Acme",
        "content": "Dear hiring manager,"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/cover-letters", "sess_a", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    // Owner can fetch it.
    let response = app
        .clone()
        .oneshot(get(&format!("/api/cover-letters/{id}"), Some("sess_a")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Another user cannot.
    let response = app
        .clone()
        .oneshot(get(&format!("/api/cover-letters/{id}"), Some("sess_b")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Nor delete it.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/cover-letters/{id}"))
                .header("Authorization", "Bearer sess_b")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The letter is still there for its owner.
    let response = app
        .clone()
        .oneshot(get("/api/cover-letters", Some("sess_a")))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_a_cover_letter_removes_it() {
    let app = spawn_app().await;

    let payload = serde_json::json!({ "job_title": "Engineer" });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/cover-letters", "sess_a", payload))
        .await
        .unwrap();
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/cover-letters/{id}"))
                .header("Authorization", "Bearer sess_a")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get(&format!("/api/cover-letters/{id}"), Some("sess_a")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn assessments_validate_score_range() {
    let app = spawn_app().await;

    let payload = serde_json::json!({
        "category": "technical",
        "questions": [{"q": "What is ownership?"}],
        "answers": [{"a": "Move semantics"}],
        "score": 150
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/assessments", "sess_a", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let payload = serde_json::json!({
        "category": "technical",
        "questions": [{"q": "What is ownership?"}],
        "answers": [{"a": "Move semantics"}],
        "score": 85
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/assessments", "sess_a", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get("/api/assessments", Some("sess_a")))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["score"], 85);
}

#[tokio::test]
async fn onboarding_completes_when_industry_is_set() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(get("/api/users/me/onboarding", Some("sess_a")))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_onboarded"], false);

    let payload = serde_json::json!({ "industry": "tech-software-development" });
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/users/me/industry",
            "sess_a",
            payload,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get("/api/users/me/onboarding", Some("sess_a")))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_onboarded"], true);
    assert_eq!(json["data"]["industry"], "tech-software-development");

    // Picking an industry seeds the insight row.
    let response = app
        .oneshot(get("/api/insights", Some("sess_a")))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"]["industry"], "tech-software-development");
}

#[tokio::test]
async fn me_returns_the_local_mirror() {
    let app = spawn_app().await;

    let response = app.oneshot(get("/api/users/me", Some("sess_a"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["clerk_user_id"], "user_a");
    assert_eq!(json["data"]["email"], "a@example.com");
}

#[tokio::test]
async fn insights_upsert_into_a_single_row() {
    let app = spawn_app().await;

    let payload = serde_json::json!({
        "industry": "finance",
        "insights": {"growth_rate": 4.2}
    });
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/insights", "sess_a", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let first_id = body_json(response).await["data"]["id"].clone();

    let payload = serde_json::json!({
        "industry": "finance",
        "insights": {"growth_rate": 5.0}
    });
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/insights", "sess_a", payload))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], first_id);

    let response = app
        .oneshot(get("/api/insights", Some("sess_a")))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(
        json["data"]["insights"],
        serde_json::json!({"growth_rate": 5.0}).to_string()
    );
}
