use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::state::app_state::AppState;

const UNKNOWN: &str = "unknown";

pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("Hello from the trivia-cafe backend!"))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<&'static str>,
    migrations: String,
    time: String,
}

/// Outcome of pinging the store: `(db, db_error, migrations)`.
async fn check_db(db: Option<&DatabaseConnection>) -> (&'static str, Option<&'static str>, String) {
    let Some(db) = db else {
        return ("error", Some("DB unavailable"), UNKNOWN.to_string());
    };

    let ping = Statement::from_string(db.get_database_backend(), "SELECT 1".to_string());
    if db.query_one(ping).await.is_err() {
        return ("error", Some("DB query failed"), UNKNOWN.to_string());
    }

    let migrations = match get_latest_migration_version(db).await {
        Ok(Some(version)) => version,
        Ok(None) => "no_migrations".to_string(),
        Err(_) => UNKNOWN.to_string(),
    };
    ("ok", None, migrations)
}

/// Always `200`; store problems are reported in `db` and `db_error`.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let (db, db_error, migrations) = check_db(app_state.db()).await;
    let time = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| UNKNOWN.to_string());

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db,
        db_error,
        migrations,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(super::resource("/").route(web::get().to(root)))
        .service(super::resource("/health").route(web::get().to(health)));
}
