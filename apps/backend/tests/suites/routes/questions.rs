use actix_web::test;
use serde_json::{json, Value};

use crate::common::assert_problem_details_structure;
use crate::support::create_test_app;
use crate::support::factory::{db, seed_question, seed_questions, ART, HISTORY, SCIENCE};
use crate::support::test_state::{build_test_state, build_test_state_with_page_size};

#[actix_web::test]
async fn test_list_questions_paginates() {
    let state = build_test_state_with_page_size(10).await;
    let seeded = seed_questions(db(&state), 15).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/questions").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 15);
    assert_eq!(body["page"], 1);
    assert_eq!(body["questions"].as_array().map(Vec::len), Some(10));
    assert_eq!(body["questions"][0]["id"], seeded[0].id);
    assert_eq!(body["categories"]["2"], "Art");

    let req = test::TestRequest::get()
        .uri("/api/questions?page=2")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["questions"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["questions"][0]["id"], seeded[10].id);
    assert_eq!(body["current_category"], seeded[14].category);
}

#[actix_web::test]
async fn test_page_past_end_is_404() {
    let state = build_test_state_with_page_size(10).await;
    seed_questions(db(&state), 5).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/api/questions?page=1000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 404, "PAGE_NOT_FOUND", "1000").await;
}

#[actix_web::test]
async fn test_first_page_of_empty_bank_is_ok() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/questions").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total_questions"], 0);
    assert_eq!(body["current_category"], Value::Null);
}

#[actix_web::test]
async fn test_invalid_page_is_400() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    for uri in ["/api/questions?page=abc", "/api/questions?page=0", "/api/questions?page=-2"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_structure(resp, 400, "INVALID_PAGE", "page").await;
    }
}

#[actix_web::test]
async fn test_create_question_accepts_string_numbers() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/questions")
        .set_json(json!({
            "question": "  Which planet is largest?  ",
            "answer": "Jupiter",
            "category": "1",
            "difficulty": "2"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["question"]["question"], "Which planet is largest?");
    assert_eq!(body["question"]["category"], SCIENCE);
    assert_eq!(body["question"]["difficulty"], 2);
    assert_eq!(body["created"], body["question"]["id"]);

    let req = test::TestRequest::get().uri("/api/questions").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total_questions"], 1);
}

#[actix_web::test]
async fn test_create_question_legacy_path() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/questions/create")
        .set_json(json!({
            "question": "Who wrote Hamlet?",
            "answer": "Shakespeare",
            "category": ART,
            "difficulty": 3
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
}

#[actix_web::test]
async fn test_create_question_validation_failures_are_422() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let cases = [
        json!({"answer": "x", "category": 1, "difficulty": 1}),
        json!({"question": "q", "answer": "   ", "category": 1, "difficulty": 1}),
        json!({"question": "q", "answer": "a", "category": 1, "difficulty": 9}),
        json!({"question": "q", "answer": "a", "category": "Art", "difficulty": 1}),
        json!({"question": "q", "answer": "a", "category": 99, "difficulty": 1}),
        json!({}),
    ];
    for payload in cases {
        let req = test::TestRequest::post()
            .uri("/api/questions")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_structure(resp, 422, "VALIDATION_ERROR", "").await;
    }
}

#[actix_web::test]
async fn test_create_question_rejects_malformed_json() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/questions")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"question\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 400, "BAD_REQUEST", "").await;
}

#[actix_web::test]
async fn test_delete_question_then_404() {
    let state = build_test_state().await;
    let q = seed_question(db(&state), "Doomed?", HISTORY, 1).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let uri = format!("/api/questions/{}", q.id);
    let req = test::TestRequest::delete().uri(&uri).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["deleted"], q.id);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 404, "QUESTION_NOT_FOUND", "").await;
}

#[actix_web::test]
async fn test_search_is_case_insensitive() {
    let state = build_test_state().await;
    let conn = db(&state);
    seed_question(conn, "What is the title of the 1990 fantasy film?", ART, 3).await;
    seed_question(conn, "Whose autobiography is 'I Know Why the Caged Bird Sings'?", HISTORY, 2)
        .await;
    seed_question(conn, "What boils at 100C?", SCIENCE, 1).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/questions/search")
        .set_json(json!({"searchTerm": "TITLE"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["current_category"], Value::Null);

    let req = test::TestRequest::post()
        .uri("/api/questions/search")
        .set_json(json!({"search_term": "what"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total_questions"], 2);
}

#[actix_web::test]
async fn test_search_treats_wildcards_literally() {
    let state = build_test_state().await;
    let conn = db(&state);
    seed_question(conn, "What is 50% of 10?", SCIENCE, 1).await;
    seed_question(conn, "What is half of 10?", SCIENCE, 1).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/questions/search")
        .set_json(json!({"searchTerm": "%"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total_questions"], 1);
}

#[actix_web::test]
async fn test_blank_search_matches_nothing() {
    let state = build_test_state().await;
    seed_question(db(&state), "Anything?", SCIENCE, 1).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/questions/search")
        .set_json(json!({"searchTerm": "   "}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total_questions"], 0);
}

#[actix_web::test]
async fn test_wrong_method_is_405() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::put().uri("/api/questions").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 405, "METHOD_NOT_ALLOWED", "").await;
}
