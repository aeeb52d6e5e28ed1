use std::sync::Arc;
use tokio::sync::RwLock;

use crate::clients::clerk::ClerkClient;
use crate::clients::gemini::GeminiClient;
use crate::config::Config;
use crate::db::Store;
use crate::services::{
    ArtifactService, ClerkIdentityService, GeminiImproveService, IdentityService, ImproveService,
    SeaOrmArtifactService, SeaOrmSystemService, SystemService,
};

/// Build a shared HTTP client with reasonable defaults for API calls.
/// Reused across all HTTP-based clients to enable connection pooling and
/// avoid socket exhaustion.
fn build_shared_http_client(timeout_seconds: u64) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_seconds))
        .user_agent(concat!("careerd/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build shared HTTP client: {e}"))
}

/// Everything the request path needs, wired once at startup.
///
/// Fields are public so tests can assemble a state with stub services.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub clerk: Arc<ClerkClient>,

    pub gemini: Arc<GeminiClient>,

    pub identity: Arc<dyn IdentityService>,

    pub artifacts: Arc<dyn ArtifactService>,

    pub improve: Arc<dyn ImproveService>,

    pub system: Arc<dyn SystemService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_url,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Self::with_store(config, store)
    }

    /// Wires services over an existing store. Tests use this with an
    /// in-memory database.
    pub fn with_store(config: Config, store: Store) -> anyhow::Result<Self> {
        let timeout = config
            .clerk
            .request_timeout_seconds
            .max(config.gemini.request_timeout_seconds);
        let http_client = build_shared_http_client(u64::from(timeout))?;

        let clerk = Arc::new(ClerkClient::with_shared_client(
            http_client.clone(),
            &config.clerk,
        ));
        let gemini = Arc::new(GeminiClient::with_shared_client(
            http_client,
            &config.gemini,
        ));

        let config = Arc::new(RwLock::new(config));

        let identity: Arc<dyn IdentityService> =
            Arc::new(ClerkIdentityService::new(store.clone(), clerk.clone()));
        let artifacts: Arc<dyn ArtifactService> =
            Arc::new(SeaOrmArtifactService::new(store.clone()));
        let improve: Arc<dyn ImproveService> =
            Arc::new(GeminiImproveService::new(gemini.clone()));
        let system: Arc<dyn SystemService> =
            Arc::new(SeaOrmSystemService::new(store.clone(), config.clone()));

        Ok(Self {
            config,
            store,
            clerk,
            gemini,
            identity,
            artifacts,
            improve,
            system,
        })
    }
}
