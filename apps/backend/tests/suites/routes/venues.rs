use actix_web::test;
use serde_json::{json, Value};
use time::macros::datetime;

use crate::common::assert_problem_details_structure;
use crate::support::create_test_app;
use crate::support::factory::{db, seed_artist, seed_show, seed_venue};
use crate::support::test_state::build_test_state;

#[actix_web::test]
async fn test_create_venue_returns_201_with_record() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/venues")
        .set_json(json!({
            "name": " The Musical Hop ",
            "city": "San Francisco",
            "state": "CA",
            "address": "1015 Folsom Street",
            "phone": "123-123-1234",
            "genres": ["Jazz", "Reggae", "Swing"],
            "website": "",
            "seeking_talent": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["venue"]["name"], "The Musical Hop");
    assert_eq!(body["venue"]["genres"], json!(["Jazz", "Reggae", "Swing"]));
    assert_eq!(body["venue"]["website"], Value::Null);
    assert_eq!(body["venue"]["seeking_talent"], true);
    assert!(body["venue"]["id"].as_i64().is_some());
}

#[actix_web::test]
async fn test_create_venue_missing_fields_is_422() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/venues")
        .set_json(json!({"name": "Hop", "city": "SF", "state": "CA"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 422, "VALIDATION_ERROR", "address").await;

    let req = test::TestRequest::post()
        .uri("/api/venues")
        .set_json(json!({"name": "  ", "city": "SF", "state": "CA", "address": "x"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 422, "VALIDATION_ERROR", "name").await;
}

#[actix_web::test]
async fn test_detail_splits_past_and_upcoming_shows() {
    let state = build_test_state().await;
    let conn = db(&state);
    let venue = seed_venue(conn, "The Musical Hop", "San Francisco", "CA").await;
    let artist = seed_artist(conn, "Guns N Petals").await;
    seed_show(conn, &venue, &artist, datetime!(2099-04-01 20:00 UTC)).await;
    seed_show(conn, &venue, &artist, datetime!(2019-05-21 21:30 UTC)).await;
    seed_show(conn, &venue, &artist, datetime!(2098-04-08 20:00 UTC)).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/venues/{}", venue.id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let detail = &body["venue"];
    assert_eq!(detail["name"], "The Musical Hop");
    assert_eq!(detail["past_shows_count"], 1);
    assert_eq!(detail["upcoming_shows_count"], 2);
    assert_eq!(detail["past_shows"][0]["artist_name"], "Guns N Petals");
    assert_eq!(detail["past_shows"][0]["start_time"], "2019-05-21T21:30:00Z");
    assert_eq!(detail["upcoming_shows"][0]["start_time"], "2098-04-08T20:00:00Z");
    assert_eq!(detail["upcoming_shows"][1]["start_time"], "2099-04-01T20:00:00Z");
}

#[actix_web::test]
async fn test_list_groups_venues_by_area() {
    let state = build_test_state().await;
    let conn = db(&state);
    let hop = seed_venue(conn, "The Musical Hop", "San Francisco", "CA").await;
    seed_venue(conn, "Park Square Live Music", "San Francisco", "CA").await;
    seed_venue(conn, "The Dueling Pianos Bar", "New York", "NY").await;
    let artist = seed_artist(conn, "Guns N Petals").await;
    seed_show(conn, &hop, &artist, datetime!(2099-01-01 20:00 UTC)).await;
    seed_show(conn, &hop, &artist, datetime!(2019-01-01 20:00 UTC)).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/venues").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let areas = body["areas"].as_array().expect("areas array");
    assert_eq!(areas.len(), 2);
    assert_eq!(areas[0]["city"], "San Francisco");
    assert_eq!(areas[0]["state"], "CA");
    assert_eq!(areas[0]["venues"][0]["name"], "Park Square Live Music");
    assert_eq!(areas[0]["venues"][0]["num_upcoming_shows"], 0);
    assert_eq!(areas[0]["venues"][1]["id"], hop.id);
    assert_eq!(areas[0]["venues"][1]["num_upcoming_shows"], 1);
    assert_eq!(areas[1]["city"], "New York");
}

#[actix_web::test]
async fn test_search_is_case_insensitive_on_name_city_and_state() {
    let state = build_test_state().await;
    let conn = db(&state);
    seed_venue(conn, "The Musical Hop", "San Francisco", "CA").await;
    seed_venue(conn, "Park Square Live Music & Coffee", "San Francisco", "CA").await;
    seed_venue(conn, "The Dueling Pianos Bar", "New York", "NY").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/venues/search")
        .set_json(json!({"search_term": "MUSIC"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["name"], "Park Square Live Music & Coffee");
    assert_eq!(body["data"][1]["name"], "The Musical Hop");
    assert_eq!(body["data"][1]["num_upcoming_shows"], 0);

    let req = test::TestRequest::post()
        .uri("/api/venues/search")
        .set_json(json!({"searchTerm": "new york"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "The Dueling Pianos Bar");

    let req = test::TestRequest::post()
        .uri("/api/venues/search")
        .set_json(json!({"search_term": "100%"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], 0);
}

#[actix_web::test]
async fn test_patch_venue_keeps_unset_fields() {
    let state = build_test_state().await;
    let venue = seed_venue(db(&state), "The Musical Hop", "San Francisco", "CA").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/venues/{}", venue.id))
        .set_json(json!({"city": "Oakland", "seeking_talent": true}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["venue"]["city"], "Oakland");
    assert_eq!(body["venue"]["name"], "The Musical Hop");
    assert_eq!(body["venue"]["genres"], json!(["Jazz", "Swing"]));
    assert_eq!(body["venue"]["seeking_talent"], true);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/venues/{}", venue.id))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 422, "VALIDATION_ERROR", "at least one field").await;
}

#[actix_web::test]
async fn test_delete_venue_removes_its_shows() {
    let state = build_test_state().await;
    let conn = db(&state);
    let venue = seed_venue(conn, "The Musical Hop", "San Francisco", "CA").await;
    let other = seed_venue(conn, "Park Square", "San Francisco", "CA").await;
    let artist = seed_artist(conn, "Guns N Petals").await;
    seed_show(conn, &venue, &artist, datetime!(2099-01-01 20:00 UTC)).await;
    let kept = seed_show(conn, &other, &artist, datetime!(2099-02-01 20:00 UTC)).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/venues/{}", venue.id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"success": true, "deleted": venue.id}));

    let req = test::TestRequest::get().uri("/api/shows").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let shows = body["shows"].as_array().expect("shows array");
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0]["show_id"], kept.show_id);

    let req = test::TestRequest::get()
        .uri(&format!("/api/venues/{}", venue.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 404, "VENUE_NOT_FOUND", "").await;
}

#[actix_web::test]
async fn test_unknown_venue_is_404_and_wrong_method_405() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    for req in [
        test::TestRequest::get().uri("/api/venues/999").to_request(),
        test::TestRequest::patch()
            .uri("/api/venues/999")
            .set_json(json!({"name": "Nowhere"}))
            .to_request(),
        test::TestRequest::delete().uri("/api/venues/999").to_request(),
    ] {
        let resp = test::call_service(&app, req).await;
        assert_problem_details_structure(resp, 404, "VENUE_NOT_FOUND", "Venue 999").await;
    }

    let req = test::TestRequest::put().uri("/api/venues/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 405, "METHOD_NOT_ALLOWED", "").await;
}
