//! Quiz service: loads the pool and hands it to the selector.

use sea_orm::ConnectionTrait;
use tracing::debug;

use crate::domain::question::Question;
use crate::domain::quiz::{select_next, QuizState, RandomSource};
use crate::errors::domain::DomainError;
use crate::repos::questions;

pub struct QuizService;

impl QuizService {
    pub fn new() -> Self {
        Self
    }

    /// Next question for the caller's session, or `None` when it is exhausted.
    pub async fn next_question<C, S>(
        &self,
        conn: &C,
        state: &QuizState,
        rng: &mut S,
    ) -> Result<Option<Question>, DomainError>
    where
        C: ConnectionTrait + Send + Sync,
        S: RandomSource + ?Sized,
    {
        let pool = questions::list_all(conn).await?;
        let next = select_next(&pool, state.category, &state.previously_shown, rng).cloned();

        debug!(
            pool_size = pool.len(),
            shown = state.previously_shown.len(),
            category = ?state.category,
            question_id = ?next.as_ref().map(|q| q.id),
            "quiz_next"
        );

        Ok(next)
    }
}

impl Default for QuizService {
    fn default() -> Self {
        Self::new()
    }
}
