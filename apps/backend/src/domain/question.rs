use serde::Serialize;

use crate::errors::domain::DomainError;

pub type QuestionId = i64;
pub type CategoryId = i64;

pub const MIN_DIFFICULTY: i32 = 1;
pub const MAX_DIFFICULTY: i32 = 5;

/// A trivia question as stored and as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    /// Display label, stored in the `type` column
    pub label: String,
}

/// Fields for a question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

impl NewQuestion {
    /// Trim text fields and check ranges. Category existence is a storage
    /// concern and is checked by the service.
    pub fn normalized(self) -> Result<Self, DomainError> {
        let question = self.question.trim().to_string();
        let answer = self.answer.trim().to_string();

        if question.is_empty() {
            return Err(DomainError::validation("question must not be blank"));
        }
        if answer.is_empty() {
            return Err(DomainError::validation("answer must not be blank"));
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.difficulty) {
            return Err(DomainError::validation(format!(
                "difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}"
            )));
        }

        Ok(Self {
            question,
            answer,
            category: self.category,
            difficulty: self.difficulty,
        })
    }
}
