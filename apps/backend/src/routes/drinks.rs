use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::claims::{permissions, AuthClaims};
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::drink::{DrinkLong, DrinkShort};
use crate::error::AppError;
use crate::extractors::{JwtClaims, ValidatedJson};
use crate::services::drinks::DrinkService;
use crate::state::app_state::AppState;

/// Body for create and patch. Both fields are optional on the wire; the
/// service decides which are required.
#[derive(Debug, Deserialize)]
pub struct DrinkRequest {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    recipe: Option<Value>,
}

#[derive(Debug, Serialize)]
struct DrinksShortResponse {
    success: bool,
    drinks: Vec<DrinkShort>,
}

#[derive(Debug, Serialize)]
struct DrinksLongResponse {
    success: bool,
    drinks: Vec<DrinkLong>,
}

#[derive(Debug, Serialize)]
struct DeletedDrinkResponse {
    success: bool,
    delete: i64,
}

async fn list_drinks(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let drinks = DrinkService::new().list(db).await?;

    Ok(HttpResponse::Ok().json(DrinksShortResponse {
        success: true,
        drinks: drinks.iter().map(|d| d.short()).collect(),
    }))
}

async fn list_drinks_detail(
    auth: JwtClaims<AuthClaims>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    auth.claims.require_permission(permissions::GET_DRINKS_DETAIL)?;

    let db = require_db(&app_state)?;
    let drinks = DrinkService::new().list(db).await?;

    Ok(HttpResponse::Ok().json(DrinksLongResponse {
        success: true,
        drinks: drinks.iter().map(|d| d.long()).collect(),
    }))
}

async fn create_drink(
    auth: JwtClaims<AuthClaims>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<DrinkRequest>,
) -> Result<HttpResponse, AppError> {
    auth.claims.require_permission(permissions::POST_DRINKS)?;
    let DrinkRequest { title, recipe } = body.into_inner();

    let drink = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            DrinkService::new()
                .create(txn, title, recipe)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DrinksLongResponse {
        success: true,
        drinks: vec![drink.long()],
    }))
}

async fn update_drink(
    auth: JwtClaims<AuthClaims>,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<DrinkRequest>,
) -> Result<HttpResponse, AppError> {
    auth.claims.require_permission(permissions::PATCH_DRINKS)?;
    let id = path.into_inner();
    let DrinkRequest { title, recipe } = body.into_inner();

    let drink = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            DrinkService::new()
                .update(txn, id, title, recipe)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DrinksLongResponse {
        success: true,
        drinks: vec![drink.long()],
    }))
}

async fn delete_drink(
    auth: JwtClaims<AuthClaims>,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    auth.claims.require_permission(permissions::DELETE_DRINKS)?;
    let id = path.into_inner();

    with_txn(&app_state, move |txn| {
        Box::pin(async move {
            DrinkService::new()
                .delete(txn, id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DeletedDrinkResponse {
        success: true,
        delete: id,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        super::resource("/drinks")
            .route(web::get().to(list_drinks))
            .route(web::post().to(create_drink)),
    )
    .service(super::resource("/drinks-detail").route(web::get().to(list_drinks_detail)))
    .service(
        super::resource("/drinks/{drink_id:\\d+}")
            .route(web::patch().to(update_drink))
            .route(web::delete().to(delete_drink)),
    );
}
