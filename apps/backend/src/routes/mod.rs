use actix_web::{web, HttpResponse, Resource};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod artists;
pub mod categories;
pub mod drinks;
pub mod health;
pub mod questions;
pub mod quizzes;
pub mod shows;
pub mod venues;
pub mod wire;

/// Register every route plus the problem-details fallbacks. Shared by
/// `main.rs` and the test app builder.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // ids too large for i64 match the route regex but fail extraction
    cfg.app_data(web::PathConfig::default().error_handler(|_, _| {
        AppError::not_found(ErrorCode::NotFound, "The requested resource was not found").into()
    }));
    cfg.app_data(web::QueryConfig::default().error_handler(|_, _| {
        AppError::bad_request(ErrorCode::BadRequest, "Invalid query string").into()
    }));

    // Greeting and health: /, /health
    cfg.configure(health::configure_routes);

    // Trivia API: /api/categories/**, /api/questions/**, /api/quizzes
    cfg.service(web::scope("/api/categories").configure(categories::configure_routes));
    cfg.service(web::scope("/api/questions").configure(questions::configure_routes));
    cfg.service(web::scope("/api/quizzes").configure(quizzes::configure_routes));

    // Booking: /api/venues/**, /api/artists/**, /api/shows
    cfg.service(web::scope("/api/venues").configure(venues::configure_routes));
    cfg.service(web::scope("/api/artists").configure(artists::configure_routes));
    cfg.service(web::scope("/api/shows").configure(shows::configure_routes));

    // Coffee shop: /drinks, /drinks-detail, /drinks/{id}
    cfg.configure(drinks::configure_routes);

    cfg.default_service(web::route().to(not_found));
}

/// A resource whose unmatched methods answer `405 METHOD_NOT_ALLOWED`.
pub(crate) fn resource(path: &str) -> Resource {
    web::resource(path).default_service(web::route().to(method_not_allowed))
}

pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(
        ErrorCode::NotFound,
        "The requested resource was not found",
    ))
}

pub async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::method_not_allowed())
}
