use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::services::{MailRelayNotifier, Notifier};
use crate::utils::AppError;

/// Shared server state — singleton references handed to every handler
///
/// Cheap to clone: everything inside is either `Clone` by value or behind
/// an `Arc`.
///
/// | Field | Purpose |
/// |-------|---------|
/// | config | Immutable configuration |
/// | db | SQLite connection pool |
/// | jwt_service | Bearer-token validation |
/// | notifier | Best-effort order notifications |
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Config,
    /// Database pool
    pub db: SqlitePool,
    /// JWT validation service
    pub jwt_service: Arc<JwtService>,
    /// Notification dispatch
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    /// Initialize all services from configuration
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self::assemble(
            config.clone(),
            db.pool,
            Arc::new(JwtService::with_config(config.jwt.clone())),
            Arc::new(MailRelayNotifier::from_config(config)),
        ))
    }

    /// Assemble state from already-built parts (tests swap in their own
    /// database and notifier here)
    pub fn assemble(
        config: Config,
        db: SqlitePool,
        jwt_service: Arc<JwtService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            db,
            jwt_service,
            notifier,
        }
    }
}
