use std::collections::HashSet;

use trivia_cafe::domain::quiz::{QuizState, RandomSource, RngSource};
use trivia_cafe::services::quiz::QuizService;

use crate::support::factory::{db, seed_question, seed_questions, ART, GEOGRAPHY, SCIENCE};
use crate::support::test_state::build_test_state;

/// Always picks the same slot, clamped to the candidate count.
struct Fixed(usize);

impl RandomSource for Fixed {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

#[tokio::test]
async fn test_next_question_exhausts_pool_once_each() {
    let state = build_test_state().await;
    let conn = db(&state);
    let seeded = seed_questions(conn, 8).await;
    let service = QuizService::new();
    let mut rng = RngSource::seeded(7);

    let mut quiz = QuizState::new(None);
    let mut seen = HashSet::new();
    loop {
        let next = service
            .next_question(conn, &quiz, &mut rng)
            .await
            .expect("next question");
        let Some(q) = next else { break };
        assert!(seen.insert(q.id), "question {} repeated", q.id);
        quiz = quiz.with_shown([q.id]);
    }

    assert_eq!(seen.len(), seeded.len());
}

#[tokio::test]
async fn test_next_question_respects_category() {
    let state = build_test_state().await;
    let conn = db(&state);
    seed_questions(conn, 8).await;
    let geo = seed_question(conn, "Capital of Peru?", GEOGRAPHY, 2).await;

    let quiz = QuizState::new(Some(GEOGRAPHY));
    let mut rng = Fixed(usize::MAX);
    let next = QuizService::new()
        .next_question(conn, &quiz, &mut rng)
        .await
        .expect("next question")
        .expect("a geography question");

    assert_eq!(next.category, GEOGRAPHY);
    assert_eq!(next.id, geo.id);
}

#[tokio::test]
async fn test_next_question_ignores_foreign_previous_ids() {
    let state = build_test_state().await;
    let conn = db(&state);
    let art = seed_question(conn, "Cubism founder?", ART, 3).await;
    let science = seed_question(conn, "Speed of light?", SCIENCE, 2).await;

    let quiz = QuizState::new(Some(ART)).with_shown([science.id, 9999]);
    let next = QuizService::new()
        .next_question(conn, &quiz, &mut Fixed(0))
        .await
        .expect("next question");

    assert_eq!(next.map(|q| q.id), Some(art.id));
}

#[tokio::test]
async fn test_next_question_on_empty_bank_is_none() {
    let state = build_test_state().await;
    let next = QuizService::new()
        .next_question(db(&state), &QuizState::new(None), &mut Fixed(0))
        .await
        .expect("next question");
    assert!(next.is_none());
}
