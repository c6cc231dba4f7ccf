use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::categories::category_map;
use super::wire::IntOrString;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::question::{CategoryId, NewQuestion, Question, QuestionId};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::services::questions::QuestionService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
}

impl PageQuery {
    /// Default 1; anything that is not a positive integer is `400 INVALID_PAGE`.
    fn page(&self) -> Result<u64, AppError> {
        match self.page.as_deref().map(str::trim) {
            None | Some("") => Ok(1),
            Some(raw) => match raw.parse::<u64>() {
                Ok(n) if n >= 1 => Ok(n),
                _ => Err(AppError::invalid(
                    ErrorCode::InvalidPage,
                    format!("page must be a positive integer, got '{raw}'"),
                )),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct QuestionPageResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: u64,
    categories: BTreeMap<CategoryId, String>,
    current_category: Option<CategoryId>,
    page: u64,
}

/// Fields are optional so that a missing one is reported as a validation
/// failure alongside blank or out-of-range values.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    question: Option<String>,
    answer: Option<String>,
    category: Option<IntOrString>,
    difficulty: Option<IntOrString>,
}

impl CreateQuestionRequest {
    fn into_new_question(self) -> Result<NewQuestion, AppError> {
        let category = self
            .category
            .as_ref()
            .and_then(IntOrString::as_i64)
            .ok_or_else(|| AppError::unprocessable("category must be a category id"))?;
        let difficulty = self
            .difficulty
            .as_ref()
            .and_then(IntOrString::as_i64)
            .and_then(|d| i32::try_from(d).ok())
            .ok_or_else(|| AppError::unprocessable("difficulty must be an integer"))?;

        Ok(NewQuestion {
            question: self.question.unwrap_or_default(),
            answer: self.answer.unwrap_or_default(),
            category,
            difficulty,
        })
    }
}

#[derive(Debug, Serialize)]
struct CreatedResponse {
    success: bool,
    created: QuestionId,
    question: Question,
}

#[derive(Debug, Serialize)]
struct DeletedResponse {
    success: bool,
    deleted: QuestionId,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", alias = "search_term", default)]
    search_term: Option<String>,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<CategoryId>,
}

async fn list_questions(
    query: web::Query<PageQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let page = query.page()?;
    let db = require_db(&app_state)?;
    let listing = QuestionService::new()
        .list_page(db, page, app_state.api.questions_per_page)
        .await?;

    Ok(HttpResponse::Ok().json(QuestionPageResponse {
        success: true,
        questions: listing.questions,
        total_questions: listing.total_questions,
        categories: category_map(listing.categories),
        current_category: listing.current_category,
        page,
    }))
}

async fn create_question(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let new = body.into_inner().into_new_question()?;

    let created = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            QuestionService::new()
                .create(txn, new)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(CreatedResponse {
        success: true,
        created: created.id,
        question: created,
    }))
}

async fn delete_question(
    path: web::Path<QuestionId>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    with_txn(&app_state, move |txn| {
        Box::pin(async move {
            QuestionService::new()
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

async fn search_questions(
    app_state: web::Data<AppState>,
    body: ValidatedJson<SearchRequest>,
) -> Result<HttpResponse, AppError> {
    let term = body.into_inner().search_term.unwrap_or_default();
    let db = require_db(&app_state)?;
    let questions = QuestionService::new().search(db, &term).await?;

    Ok(HttpResponse::Ok().json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        super::resource("")
            .route(web::get().to(list_questions))
            .route(web::post().to(create_question)),
    )
    .service(super::resource("/create").route(web::post().to(create_question)))
    .service(super::resource("/search").route(web::post().to(search_questions)))
    .service(super::resource("/{question_id:\\d+}").route(web::delete().to(delete_question)));
}
