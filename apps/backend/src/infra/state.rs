use std::sync::Arc;

use tracing::{info, warn};

use crate::config::app::AppConfig;
use crate::config::db::{DbKind, RuntimeEnv};
use crate::error::AppError;
use crate::infra::db::{bootstrap_db, in_memory_db};
use crate::notify::{HttpNotifier, NoopNotifier, Notifier};
use crate::state::app_state::AppState;

enum DbChoice {
    None,
    Env(RuntimeEnv, DbKind),
    InMemory,
}

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    config: AppConfig,
    db: DbChoice,
    notifier: Option<Arc<dyn Notifier>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            db: DbChoice::None,
            notifier: None,
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_db(mut self, env: RuntimeEnv, kind: DbKind) -> Self {
        self.db = if kind == DbKind::SqliteMemory {
            DbChoice::InMemory
        } else {
            DbChoice::Env(env, kind)
        };
        self
    }

    pub fn with_in_memory_db(mut self) -> Self {
        self.db = DbChoice::InMemory;
        self
    }

    /// Overrides the notifier built from config.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    fn notifier_from_config(config: &AppConfig) -> Result<Arc<dyn Notifier>, AppError> {
        let notify = &config.notify;
        if notify.invite_endpoint.is_none() && notify.winner_endpoint.is_none() {
            warn!("No mail endpoints configured; email notifications are disabled");
            return Ok(Arc::new(NoopNotifier));
        }
        if notify.winner_endpoint.is_none() {
            warn!("WINNER_EMAIL_ENDPOINT not set; winner notifications are disabled");
        }
        if notify.invite_endpoint.is_none() {
            warn!("INVITE_EMAIL_ENDPOINT not set; invitations are disabled");
        }
        let notifier = HttpNotifier::new(notify)
            .map_err(|e| AppError::config(format!("Failed to build mail client: {e}")))?;
        info!(timeout_ms = notify.timeout.as_millis() as u64, "Mail notifications enabled");
        Ok(Arc::new(notifier))
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let notifier = match self.notifier {
            Some(n) => n,
            None => Self::notifier_from_config(&self.config)?,
        };

        // single entrypoint: connect + migrate
        let conn = match self.db {
            DbChoice::None => {
                let mut state = AppState::without_db(self.config);
                state.notifier = notifier;
                return Ok(state);
            }
            DbChoice::Env(env, kind) => bootstrap_db(env, kind).await?,
            DbChoice::InMemory => in_memory_db().await?,
        };

        Ok(AppState::new(conn, self.config, notifier))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
