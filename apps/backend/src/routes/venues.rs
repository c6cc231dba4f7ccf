use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::OffsetDateTime;

use super::wire::SearchTerm;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::booking::{BookingSummary, Venue, VenueArea, VenuePatch};
use crate::domain::show::BookingDetail;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::venues::VenueService;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct AreasResponse {
    success: bool,
    areas: Vec<VenueArea>,
}

#[derive(Debug, Serialize)]
struct VenueResponse {
    success: bool,
    venue: Venue,
}

#[derive(Debug, Serialize)]
struct VenueDetailResponse {
    success: bool,
    venue: BookingDetail<Venue>,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    success: bool,
    count: usize,
    data: Vec<BookingSummary>,
}

#[derive(Debug, Serialize)]
struct DeletedResponse {
    success: bool,
    deleted: i64,
}

async fn list_venues(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let areas = VenueService::new()
        .list_areas(db, OffsetDateTime::now_utc())
        .await?;

    Ok(HttpResponse::Ok().json(AreasResponse {
        success: true,
        areas,
    }))
}

async fn show_venue(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let venue = VenueService::new()
        .detail(db, path.into_inner(), OffsetDateTime::now_utc())
        .await?;

    Ok(HttpResponse::Ok().json(VenueDetailResponse {
        success: true,
        venue,
    }))
}

async fn search_venues(
    app_state: web::Data<AppState>,
    body: ValidatedJson<SearchTerm>,
) -> Result<HttpResponse, AppError> {
    let term = body.into_inner().search_term.unwrap_or_default();
    let db = require_db(&app_state)?;
    let data = VenueService::new()
        .search(db, &term, OffsetDateTime::now_utc())
        .await?;

    Ok(HttpResponse::Ok().json(SearchResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

async fn create_venue(
    app_state: web::Data<AppState>,
    body: ValidatedJson<VenuePatch>,
) -> Result<HttpResponse, AppError> {
    let patch = body.into_inner();

    let venue = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            VenueService::new()
                .create(txn, patch)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(VenueResponse {
        success: true,
        venue,
    }))
}

async fn update_venue(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<VenuePatch>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let patch = body.into_inner();

    let venue = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            VenueService::new()
                .update(txn, id, patch)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(VenueResponse {
        success: true,
        venue,
    }))
}

async fn delete_venue(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    with_txn(&app_state, move |txn| {
        Box::pin(async move {
            VenueService::new()
                .delete(txn, id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        super::resource("")
            .route(web::get().to(list_venues))
            .route(web::post().to(create_venue)),
    )
    .service(super::resource("/search").route(web::post().to(search_venues)))
    .service(
        super::resource("/{venue_id:\\d+}")
            .route(web::get().to(show_venue))
            .route(web::patch().to(update_venue))
            .route(web::delete().to(delete_venue)),
    );
}
