use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::wire::IntOrString;
use crate::db::require_db;
use crate::domain::question::{CategoryId, Question, QuestionId};
use crate::domain::quiz::{QuizState, RngSource};
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::quiz::QuizService;
use crate::state::app_state::AppState;

/// The frontend's "ALL" entry.
const ALL_CATEGORIES: CategoryId = 0;
/// Category ids are positive, so this matches nothing.
const NO_SUCH_CATEGORY: CategoryId = -1;

/// Category as posted by clients: a bare id or the legacy `{id, type}` object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum QuizCategory {
    Id(IntOrString),
    Object { id: IntOrString },
}

impl QuizCategory {
    /// `None` means every category. A non-numeric id yields a filter with
    /// no candidates rather than an error.
    fn filter(&self) -> Option<CategoryId> {
        let raw = match self {
            QuizCategory::Id(id) | QuizCategory::Object { id } => id,
        };
        match raw.as_i64() {
            Some(ALL_CATEGORIES) => None,
            Some(id) => Some(id),
            None => Some(NO_SUCH_CATEGORY),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default, alias = "previousQuestionIds")]
    previous_questions: Vec<QuestionId>,
    #[serde(default, alias = "category")]
    quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    fn state(&self) -> QuizState {
        QuizState::new(self.quiz_category.as_ref().and_then(QuizCategory::filter))
            .with_shown(self.previous_questions.iter().copied())
    }
}

/// Body of a quiz reply. The played ids are always echoed under the
/// `previous_questions` key, even when the request sent `previousQuestionIds`.
#[derive(Debug, Serialize)]
struct QuizResponse {
    success: bool,
    previous_questions: Vec<QuestionId>,
    question: Option<Question>,
}

async fn next_quiz_question(
    app_state: web::Data<AppState>,
    body: ValidatedJson<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    let state = request.state();
    let db = require_db(&app_state)?;

    let mut rng = RngSource::from_os_rng();
    let question = QuizService::new()
        .next_question(db, &state, &mut rng)
        .await?;

    Ok(HttpResponse::Ok().json(QuizResponse {
        success: true,
        previous_questions: request.previous_questions,
        question,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(super::resource("").route(web::post().to(next_quiz_question)));
}
