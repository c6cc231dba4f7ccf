use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::wire::IntOrString;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::show::{parse_start_time, Show};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::extractors::ValidatedJson;
use crate::services::shows::ShowService;
use crate::state::app_state::AppState;

/// Fields are optional on the wire so a missing one is a 422, not a 400.
#[derive(Debug, Deserialize)]
pub struct ShowRequest {
    #[serde(default)]
    artist_id: Option<IntOrString>,
    #[serde(default)]
    venue_id: Option<IntOrString>,
    #[serde(default)]
    start_time: Option<String>,
}

#[derive(Debug, Serialize)]
struct ShowsResponse {
    success: bool,
    shows: Vec<Show>,
}

#[derive(Debug, Serialize)]
struct ShowResponse {
    success: bool,
    show: Show,
}

fn required_id(value: Option<IntOrString>, field: &str) -> Result<i64, DomainError> {
    value
        .as_ref()
        .and_then(IntOrString::as_i64)
        .ok_or_else(|| DomainError::validation(format!("{field} must be an integer id")))
}

async fn list_shows(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let shows = ShowService::new().list(db).await?;

    Ok(HttpResponse::Ok().json(ShowsResponse {
        success: true,
        shows,
    }))
}

async fn create_show(
    app_state: web::Data<AppState>,
    body: ValidatedJson<ShowRequest>,
) -> Result<HttpResponse, AppError> {
    let ShowRequest {
        artist_id,
        venue_id,
        start_time,
    } = body.into_inner();
    let artist_id = required_id(artist_id, "artist_id")?;
    let venue_id = required_id(venue_id, "venue_id")?;
    let start_time = parse_start_time(start_time.as_deref().unwrap_or_default())?;

    let show = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            ShowService::new()
                .create(txn, artist_id, venue_id, start_time)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(ShowResponse {
        success: true,
        show,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        super::resource("")
            .route(web::get().to(list_shows))
            .route(web::post().to(create_show)),
    );
}
