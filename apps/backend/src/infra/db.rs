use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{resolve_url, DbKind, DbOwner, DbProfile};
use crate::error::AppError;
use crate::logging::pii::Redacted;

fn engine(kind: DbKind) -> &'static str {
    match kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteMemory => "sqlite",
    }
}

fn connect_options(kind: DbKind, url: String) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging(false);
    match kind {
        // every pooled connection would otherwise open its own empty database
        DbKind::SqliteMemory => {
            opts.max_connections(1).min_connections(1);
        }
        DbKind::Postgres => {
            opts.max_connections(10)
                .min_connections(1)
                .connect_timeout(Duration::from_secs(5))
                .acquire_timeout(Duration::from_secs(5));
        }
    }
    opts
}

/// Open a connection pool. Does NOT run migrations.
pub async fn connect_db(
    kind: DbKind,
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let url = resolve_url(kind, profile, owner)?;
    info!(
        engine = engine(kind),
        url = %Redacted(&url),
        ?profile,
        ?owner,
        "db_connect"
    );

    let conn = Database::connect(connect_options(kind, url)).await?;
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(
    kind: DbKind,
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(kind, profile, owner).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    info!(engine = engine(kind), "db_ready");
    Ok(conn)
}
