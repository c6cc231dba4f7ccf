//! Trivia question and category services.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::domain::pagination::page_window;
use crate::domain::question::{Category, CategoryId, NewQuestion, Question, QuestionId};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::{categories, questions};

/// One page of the question list plus the category table.
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub categories: Vec<Category>,
    /// Category of the last question on the page
    pub current_category: Option<CategoryId>,
}

#[derive(Debug, Clone)]
pub struct CategoryQuestions {
    pub category: Category,
    pub questions: Vec<Question>,
}

pub struct QuestionService;

impl QuestionService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list_categories<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Category>, DomainError> {
        categories::list_all(conn).await
    }

    pub async fn list_page<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        page: u64,
        per_page: u64,
    ) -> Result<QuestionPage, DomainError> {
        let total_questions = questions::count_all(conn).await?;
        let window = page_window(total_questions as usize, page, per_page)?;

        let questions = questions::list_window(
            conn,
            window.start as u64,
            (window.end - window.start) as u64,
        )
        .await?;
        let categories = categories::list_all(conn).await?;
        let current_category = questions.last().map(|q| q.category);

        Ok(QuestionPage {
            questions,
            total_questions,
            categories,
            current_category,
        })
    }

    pub async fn list_by_category<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        category_id: CategoryId,
    ) -> Result<CategoryQuestions, DomainError> {
        let category = categories::find_by_id(conn, category_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Category,
                    format!("Category {category_id} not found"),
                )
            })?;
        let questions = questions::list_by_category(conn, category_id).await?;
        Ok(CategoryQuestions {
            category,
            questions,
        })
    }

    /// Case-insensitive substring search; a blank term matches nothing.
    pub async fn search<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        term: &str,
    ) -> Result<Vec<Question>, DomainError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }
        questions::search(conn, term).await
    }

    pub async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        new: NewQuestion,
    ) -> Result<Question, DomainError> {
        let new = new.normalized()?;
        if categories::find_by_id(conn, new.category).await?.is_none() {
            return Err(DomainError::validation(format!(
                "category {} does not exist",
                new.category
            )));
        }

        let created = questions::create(conn, new).await?;
        info!(question_id = created.id, category = created.category, "question_created");
        Ok(created)
    }

    pub async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: QuestionId,
    ) -> Result<(), DomainError> {
        questions::delete(conn, id).await?;
        info!(question_id = id, "question_deleted");
        Ok(())
    }
}

impl Default for QuestionService {
    fn default() -> Self {
        Self::new()
    }
}
