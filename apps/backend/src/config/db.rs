use std::env;

use crate::error::AppError;

/// Storage engine behind the connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    /// PostgreSQL, URL built from the environment
    Postgres,
    /// Private in-memory SQLite database (tests)
    SqliteMemory,
}

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Database owner enum for different access levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

pub const SQLITE_MEMORY_URL: &str = "sqlite::memory:";

/// Resolve the connection URL for `kind`.
///
/// `DATABASE_URL` wins for Postgres when set; otherwise the URL is assembled
/// from the `POSTGRES_*`, database-name and credential variables.
pub fn resolve_url(kind: DbKind, profile: DbProfile, owner: DbOwner) -> Result<String, AppError> {
    match kind {
        DbKind::SqliteMemory => Ok(SQLITE_MEMORY_URL.to_string()),
        DbKind::Postgres => match env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => Ok(url),
            _ => db_url(profile, owner),
        },
    }
}

/// Builds a database URL from environment variables based on profile and owner
pub fn db_url(profile: DbProfile, owner: DbOwner) -> Result<String, AppError> {
    let host = host();
    let port = port()?;
    let db_name = db_name(profile)?;
    let (username, password) = credentials(owner)?;

    let url = format!("postgresql://{username}:{password}@{host}:{port}/{db_name}");
    Ok(url)
}

/// Get database host from environment (defaults to localhost)
fn host() -> String {
    env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string())
}

/// Get database port from environment (defaults to 5432)
fn port() -> Result<u16, AppError> {
    match env::var("POSTGRES_PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|_| AppError::config(format!("POSTGRES_PORT must be a port number, got '{raw}'"))),
        Err(_) => Ok(5432),
    }
}

/// Get database name based on profile
fn db_name(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => must_var("PROD_DB"),
        DbProfile::Test => {
            let db_name = must_var("TEST_DB")?;
            // Enforce safety: test DB must end with "_test"
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

/// Get database credentials based on owner
fn credentials(owner: DbOwner) -> Result<(String, String), AppError> {
    match owner {
        DbOwner::App => {
            let username = must_var("APP_DB_USER")?;
            let password = must_var("APP_DB_PASSWORD")?;
            Ok((username, password))
        }
        DbOwner::Owner => {
            let username = must_var("TRIVIA_OWNER_USER")?;
            let password = must_var("TRIVIA_OWNER_PASSWORD")?;
            Ok((username, password))
        }
    }
}

/// Get required environment variable or return error
pub(crate) fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
