//! Random question selection with exclusion.
//!
//! The quiz session lives with the caller: every request carries the ids
//! already shown and the chosen category, and the server keeps nothing
//! between calls.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::question::{CategoryId, Question, QuestionId};

/// Source of uniform indices. `pick_index(len)` must return a value in `0..len`;
/// it is never called with `len == 0`.
pub trait RandomSource {
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Adapts any `rand::Rng` into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

impl RngSource<StdRng> {
    pub fn from_os_rng() -> Self {
        Self(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

/// Questions a quiz may still present, in pool order.
pub fn eligible<'a>(
    all_questions: &'a [Question],
    category: Option<CategoryId>,
    previously_shown: &HashSet<QuestionId>,
) -> Vec<&'a Question> {
    all_questions
        .iter()
        .filter(|q| category.map_or(true, |c| q.category == c))
        .filter(|q| !previously_shown.contains(&q.id))
        .collect()
}

/// Pick the next quiz question uniformly among the eligible ones.
///
/// `None` means the session is over. An unknown category is not an error;
/// it just has no candidates.
pub fn select_next<'a, S>(
    all_questions: &'a [Question],
    category: Option<CategoryId>,
    previously_shown: &HashSet<QuestionId>,
    rng: &mut S,
) -> Option<&'a Question>
where
    S: RandomSource + ?Sized,
{
    let candidates = eligible(all_questions, category, previously_shown);
    if candidates.is_empty() {
        return None;
    }
    let idx = rng.pick_index(candidates.len()) % candidates.len();
    Some(candidates[idx])
}

/// Caller-held session: the exclusion set plus the category filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    pub previously_shown: HashSet<QuestionId>,
    pub category: Option<CategoryId>,
}

impl QuizState {
    pub fn new(category: Option<CategoryId>) -> Self {
        Self {
            previously_shown: HashSet::new(),
            category,
        }
    }

    pub fn with_shown(mut self, ids: impl IntoIterator<Item = QuestionId>) -> Self {
        self.previously_shown.extend(ids);
        self
    }

    /// Select from `pool` and record the pick, so repeated calls walk the
    /// session until it returns `None`.
    pub fn advance<'a, S>(&mut self, pool: &'a [Question], rng: &mut S) -> Option<&'a Question>
    where
        S: RandomSource + ?Sized,
    {
        let next = select_next(pool, self.category, &self.previously_shown, rng)?;
        self.previously_shown.insert(next.id);
        Some(next)
    }
}
