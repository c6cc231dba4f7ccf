use trivia_cafe::domain::question::NewQuestion;
use trivia_cafe::errors::domain::{DomainError, NotFoundKind};
use trivia_cafe::services::questions::QuestionService;

use crate::support::factory::{db, seed_question, seed_questions, HISTORY, SCIENCE};
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn test_list_page_windows_by_id() {
    let state = build_test_state().await;
    let conn = db(&state);
    let seeded = seed_questions(conn, 12).await;

    let page = QuestionService::new()
        .list_page(conn, 2, 5)
        .await
        .expect("page 2");

    assert_eq!(page.total_questions, 12);
    assert_eq!(page.categories.len(), 6);
    let ids: Vec<i64> = page.questions.iter().map(|q| q.id).collect();
    let expected: Vec<i64> = seeded[5..10].iter().map(|q| q.id).collect();
    assert_eq!(ids, expected);
    assert_eq!(page.current_category, Some(seeded[9].category));
}

#[tokio::test]
async fn test_create_rejects_unknown_category_and_keeps_bank() {
    let state = build_test_state().await;
    let conn = db(&state);
    let service = QuestionService::new();

    let err = service
        .create(
            conn,
            NewQuestion {
                question: "Orphan?".into(),
                answer: "yes".into(),
                category: 77,
                difficulty: 1,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));

    let page = service.list_page(conn, 1, 10).await.expect("page 1");
    assert_eq!(page.total_questions, 0);
}

#[tokio::test]
async fn test_list_by_category_unknown_is_not_found() {
    let state = build_test_state().await;
    let err = QuestionService::new()
        .list_by_category(db(&state), 42)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Category, _)));
}

#[tokio::test]
async fn test_search_and_delete() {
    let state = build_test_state().await;
    let conn = db(&state);
    let war = seed_question(conn, "When did the Great War end?", HISTORY, 2).await;
    seed_question(conn, "What is an atom?", SCIENCE, 1).await;
    let service = QuestionService::new();

    let hits = service.search(conn, "great war").await.expect("search");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, war.id);

    service.delete(conn, war.id).await.expect("delete");
    assert!(service.search(conn, "great war").await.expect("search").is_empty());

    let err = service.delete(conn, war.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Question, _)));
}
