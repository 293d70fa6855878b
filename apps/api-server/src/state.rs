//! Application state - shared across all handlers.

use std::sync::Arc;

use pulse_core::PostService;
use pulse_core::ports::{PostStore, ProfileStore};
use pulse_infra::{InMemoryPostStore, InMemoryProfileStore};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    /// Build the application state with the configured store backend.
    pub async fn new(config: &AppConfig) -> Self {
        let (store, profiles) = Self::build_stores(config).await;

        let mut service = PostService::new(store);
        if config.profile_lookup {
            service = service.with_profile_lookup(profiles);
            tracing::info!("legacy profile lookup enabled");
        }

        tracing::info!("Application state initialized");
        Self { posts: service }
    }

    #[cfg(feature = "mongo")]
    async fn build_stores(config: &AppConfig) -> (Arc<dyn PostStore>, Arc<dyn ProfileStore>) {
        use pulse_infra::{MongoConfig, MongoPostStore, MongoProfileStore};

        if let Some(settings) = &config.mongo {
            let mongo_config = MongoConfig {
                url: settings.url.clone(),
                database: settings.database.clone(),
            };
            match MongoPostStore::connect(&mongo_config).await {
                Ok((posts, db)) => {
                    return (Arc::new(posts), Arc::new(MongoProfileStore::new(&db)));
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to MongoDB: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("MONGODB_URL not set. Running without database (in-memory mode).");
        }

        (
            Arc::new(InMemoryPostStore::new()),
            Arc::new(InMemoryProfileStore::new()),
        )
    }

    #[cfg(not(feature = "mongo"))]
    async fn build_stores(_config: &AppConfig) -> (Arc<dyn PostStore>, Arc<dyn ProfileStore>) {
        tracing::info!("Running without mongo feature - using in-memory store");
        (
            Arc::new(InMemoryPostStore::new()),
            Arc::new(InMemoryProfileStore::new()),
        )
    }
}
