use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::SharedState;

mod assessments;
pub mod auth;
mod cover_letters;
mod error;
mod insights;
mod observability;
mod resume;
mod system;
pub mod types;
mod users;

pub use error::ApiError;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Arc<RwLock<Config>> {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn identity(&self) -> &Arc<dyn crate::services::IdentityService> {
        &self.shared.identity
    }

    #[must_use]
    pub fn artifacts(&self) -> &Arc<dyn crate::services::ArtifactService> {
        &self.shared.artifacts
    }

    #[must_use]
    pub fn improve(&self) -> &Arc<dyn crate::services::ImproveService> {
        &self.shared.improve
    }

    #[must_use]
    pub fn system(&self) -> &Arc<dyn crate::services::SystemService> {
        &self.shared.system
    }
}

pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub async fn router(state: Arc<AppState>) -> Router {
    let cors_origins = {
        let config = state.config().read().await;
        config.server.cors_allowed_origins.clone()
    };

    let protected_routes = create_protected_router(state.clone());

    let api_router = Router::new()
        .merge(protected_routes)
        .route("/system/health", get(system::health))
        .route("/system/health/db", get(system::db_health))
        .route("/system/setup", post(system::setup))
        .route("/system/status", get(system::get_status))
        .with_state(state.clone());

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .route("/metrics", get(observability::get_metrics))
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}

fn create_protected_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/resume", get(resume::get_resume))
        .route("/resume", put(resume::save_resume))
        .route("/resume/improve", post(resume::improve_content))
        .route("/cover-letters", get(cover_letters::list_cover_letters))
        .route("/cover-letters", post(cover_letters::create_cover_letter))
        .route("/cover-letters/{id}", get(cover_letters::get_cover_letter))
        .route(
            "/cover-letters/{id}",
            delete(cover_letters::delete_cover_letter),
        )
        .route("/assessments", get(assessments::list_assessments))
        .route("/assessments", post(assessments::record_assessment))
        .route("/insights", get(insights::get_insight))
        .route("/insights", put(insights::save_insight))
        .route("/users/me", get(users::me))
        .route("/users/me/onboarding", get(users::onboarding_status))
        .route("/users/me/industry", put(users::set_industry))
        .route_layer(middleware::from_fn_with_state(state, auth::auth_middleware))
}
