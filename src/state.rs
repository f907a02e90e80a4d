use crate::auth::{AccountRegistry, AccountStore, InMemoryAccountStore};
use crate::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub accounts: AccountRegistry,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let store = Arc::new(InMemoryAccountStore::new()) as Arc<dyn AccountStore>;
        Ok(Self::from_parts(config, store))
    }

    pub fn from_parts(config: Arc<AppConfig>, store: Arc<dyn AccountStore>) -> Self {
        Self {
            config,
            accounts: AccountRegistry::new(store),
        }
    }

    /// In-memory state with default config, for tests.
    #[cfg(test)]
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            static_dir: "does-not-exist".into(),
            ..AppConfig::default()
        });
        Self::from_parts(config, Arc::new(InMemoryAccountStore::new()))
    }
}
