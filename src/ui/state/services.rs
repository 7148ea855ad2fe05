use std::sync::Arc;

use crate::infra::config::AppConfig;
use crate::infra::memory::repo::MemoryCatalogRepo;
use crate::usecase::services::auth_service::AuthService;
use crate::usecase::services::catalog_service::CatalogService;

/// Long-lived services shared with every page through context.
#[derive(Clone)]
pub struct AppServices {
    pub catalog: Arc<CatalogService>,
    pub auth: Arc<AuthService>,
    pub config: Arc<AppConfig>,
}

impl AppServices {
    pub fn from_config(config: AppConfig) -> Self {
        let repo = Arc::new(MemoryCatalogRepo::seeded());
        let auth = AuthService::new(
            config.auth.demo_email.clone(),
            config.auth.demo_password.clone(),
        );
        Self {
            catalog: Arc::new(CatalogService::new(repo)),
            auth: Arc::new(auth),
            config: Arc::new(config),
        }
    }
}
