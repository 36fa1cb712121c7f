use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::app::AppConfig;
use crate::notify::{NoopNotifier, Notifier};
use crate::ws::hub::GameHub;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    pub config: Arc<AppConfig>,
    pub notifier: Arc<dyn Notifier>,
    pub hub: Arc<GameHub>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: AppConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            db: Some(db),
            config: Arc::new(config),
            notifier,
            hub: Arc::new(GameHub::new()),
        }
    }

    pub fn without_db(config: AppConfig) -> Self {
        Self {
            db: None,
            config: Arc::new(config),
            notifier: Arc::new(NoopNotifier),
            hub: Arc::new(GameHub::new()),
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn hub(&self) -> &GameHub {
        &self.hub
    }

    #[cfg(test)]
    pub fn for_tests_without_db() -> Self {
        Self::without_db(AppConfig::default())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("db", &self.db.is_some())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
