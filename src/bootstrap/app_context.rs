use std::sync::Arc;

use crate::application::ports::contact_repository::ContactRepository;
use crate::bootstrap::config::{Config, StoreBackend};
use crate::infrastructure::db::repositories::contact_repository_sqlx::SqlxContactRepository;
use crate::infrastructure::memory::contact_repository_memory::InMemoryContactRepository;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    contact_repo: Arc<dyn ContactRepository>,
}

impl AppServices {
    pub fn new(contact_repo: Arc<dyn ContactRepository>) -> Self {
        Self { contact_repo }
    }

    /// Connects the configured store. Must succeed before the server accepts traffic.
    pub async fn connect(cfg: &Config) -> anyhow::Result<Self> {
        let contact_repo: Arc<dyn ContactRepository> = match cfg.store_backend {
            StoreBackend::Postgres => {
                let pool =
                    crate::infrastructure::db::connect_pool(&cfg.database_url, cfg.db_max_connections)
                        .await?;
                crate::infrastructure::db::migrate(&pool).await?;
                tracing::info!("contact_store_connected_postgres");
                Arc::new(SqlxContactRepository::new(pool))
            }
            StoreBackend::Memory => {
                tracing::warn!("contact_store_in_memory_records_are_not_durable");
                Arc::new(InMemoryContactRepository::new())
            }
        };
        Ok(Self::new(contact_repo))
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn contact_repo(&self) -> Arc<dyn ContactRepository> {
        self.services.contact_repo.clone()
    }
}
