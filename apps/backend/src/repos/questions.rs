//! Question repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::questions_sea as questions_adapter;
use crate::domain::question::{CategoryId, NewQuestion, Question, QuestionId};
use crate::entities::questions;
use crate::errors::domain::{DomainError, NotFoundKind};

impl From<questions::Model> for Question {
    fn from(model: questions::Model) -> Self {
        Self {
            id: model.id,
            question: model.question,
            answer: model.answer,
            category: model.category,
            difficulty: model.difficulty,
        }
    }
}

fn into_questions(rows: Vec<questions::Model>) -> Vec<Question> {
    rows.into_iter().map(Question::from).collect()
}

/// Whole pool ordered by id. Loaded fresh on every call.
pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Question>, DomainError> {
    Ok(into_questions(questions_adapter::list_all(conn).await?))
}

pub async fn list_by_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category: CategoryId,
) -> Result<Vec<Question>, DomainError> {
    Ok(into_questions(
        questions_adapter::list_by_category(conn, category).await?,
    ))
}

pub async fn count_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(questions_adapter::count_all(conn).await?)
}

pub async fn list_window<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<Vec<Question>, DomainError> {
    Ok(into_questions(
        questions_adapter::list_window(conn, offset, limit).await?,
    ))
}

pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
) -> Result<Vec<Question>, DomainError> {
    Ok(into_questions(questions_adapter::search(conn, term).await?))
}

/// Insert an already-normalized question.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    new: NewQuestion,
) -> Result<Question, DomainError> {
    let dto = questions_adapter::QuestionCreate::new(new.question, new.answer, new.category)
        .with_difficulty(new.difficulty);
    let row = questions_adapter::create(conn, dto).await?;
    Ok(Question::from(row))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: QuestionId,
) -> Result<(), DomainError> {
    match questions_adapter::delete_by_id(conn, id).await? {
        0 => Err(DomainError::not_found(
            NotFoundKind::Question,
            format!("Question {id} not found"),
        )),
        _ => Ok(()),
    }
}
