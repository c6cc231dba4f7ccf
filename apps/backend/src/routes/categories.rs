use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::db::require_db;
use crate::domain::question::{Category, CategoryId, Question};
use crate::error::AppError;
use crate::services::questions::QuestionService;
use crate::state::app_state::AppState;

/// `{"1": "Science", ...}` in id order, the shape the trivia frontend reads.
pub(crate) fn category_map(categories: Vec<Category>) -> BTreeMap<CategoryId, String> {
    categories.into_iter().map(|c| (c.id, c.label)).collect()
}

#[derive(Debug, Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<CategoryId, String>,
    total_categories: usize,
}

#[derive(Debug, Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: CategoryId,
}

async fn list_categories(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let categories = QuestionService::new().list_categories(db).await?;

    Ok(HttpResponse::Ok().json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories: category_map(categories),
    }))
}

async fn questions_for_category(
    path: web::Path<CategoryId>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let found = QuestionService::new()
        .list_by_category(db, path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(CategoryQuestionsResponse {
        success: true,
        total_questions: found.questions.len(),
        questions: found.questions,
        current_category: found.category.id,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(super::resource("").route(web::get().to(list_categories)))
        .service(
            super::resource("/{category_id:\\d+}/questions")
                .route(web::get().to(questions_for_category)),
        );
}
