use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::config::api::ApiConfig;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent when the app runs without storage)
    pub db: Option<DatabaseConnection>,
    /// JWT verification settings
    pub security: SecurityConfig,
    /// Paging and other API knobs
    pub api: ApiConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, security: SecurityConfig, api: ApiConfig) -> Self {
        Self {
            db: Some(db),
            security,
            api,
        }
    }

    pub fn new_without_db(security: SecurityConfig, api: ApiConfig) -> Self {
        Self {
            db: None,
            security,
            api,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
