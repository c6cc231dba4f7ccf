//! DTOs for the questions adapter.

/// DTO for inserting a question.
#[derive(Debug, Clone)]
pub struct QuestionCreate {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl QuestionCreate {
    pub fn new(question: impl Into<String>, answer: impl Into<String>, category: i64) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty: 1,
        }
    }

    pub fn with_difficulty(mut self, difficulty: i32) -> Self {
        self.difficulty = difficulty;
        self
    }
}
