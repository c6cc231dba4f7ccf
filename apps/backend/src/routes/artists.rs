use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::OffsetDateTime;

use super::wire::SearchTerm;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::booking::{Artist, ArtistPatch, BookingSummary};
use crate::domain::show::BookingDetail;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::artists::{ArtistName, ArtistService};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct ArtistsResponse {
    success: bool,
    artists: Vec<ArtistName>,
}

#[derive(Debug, Serialize)]
struct ArtistResponse {
    success: bool,
    artist: Artist,
}

#[derive(Debug, Serialize)]
struct ArtistDetailResponse {
    success: bool,
    artist: BookingDetail<Artist>,
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

async fn list_artists(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let artists = ArtistService::new().list(db).await?;

    Ok(HttpResponse::Ok().json(ArtistsResponse {
        success: true,
        artists,
    }))
}

async fn show_artist(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let artist = ArtistService::new()
        .detail(db, path.into_inner(), OffsetDateTime::now_utc())
        .await?;

    Ok(HttpResponse::Ok().json(ArtistDetailResponse {
        success: true,
        artist,
    }))
}

async fn search_artists(
    app_state: web::Data<AppState>,
    body: ValidatedJson<SearchTerm>,
) -> Result<HttpResponse, AppError> {
    let term = body.into_inner().search_term.unwrap_or_default();
    let db = require_db(&app_state)?;
    let data = ArtistService::new()
        .search(db, &term, OffsetDateTime::now_utc())
        .await?;

    Ok(HttpResponse::Ok().json(SearchResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

async fn create_artist(
    app_state: web::Data<AppState>,
    body: ValidatedJson<ArtistPatch>,
) -> Result<HttpResponse, AppError> {
    let patch = body.into_inner();

    let artist = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            ArtistService::new()
                .create(txn, patch)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(ArtistResponse {
        success: true,
        artist,
    }))
}

async fn update_artist(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ArtistPatch>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let patch = body.into_inner();

    let artist = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            ArtistService::new()
                .update(txn, id, patch)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(ArtistResponse {
        success: true,
        artist,
    }))
}

async fn delete_artist(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    with_txn(&app_state, move |txn| {
        Box::pin(async move {
            ArtistService::new()
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
            .route(web::get().to(list_artists))
            .route(web::post().to(create_artist)),
    )
    .service(super::resource("/search").route(web::post().to(search_artists)))
    .service(
        super::resource("/{artist_id:\\d+}")
            .route(web::get().to(show_artist))
            .route(web::patch().to(update_artist))
            .route(web::delete().to(delete_artist)),
    );
}
