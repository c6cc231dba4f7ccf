use actix_web::test;
use serde_json::{json, Value};
use time::macros::datetime;

use crate::common::assert_problem_details_structure;
use crate::support::create_test_app;
use crate::support::factory::{db, seed_artist, seed_show, seed_venue};
use crate::support::test_state::build_test_state;

#[actix_web::test]
async fn test_create_show_links_artist_and_venue() {
    let state = build_test_state().await;
    let conn = db(&state);
    let venue = seed_venue(conn, "The Musical Hop", "San Francisco", "CA").await;
    let artist = seed_artist(conn, "Guns N Petals").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/shows")
        .set_json(json!({
            "artist_id": artist.id.to_string(),
            "venue_id": venue.id,
            "start_time": "2099-05-21T23:30:00+02:00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["show"]["artist_id"], artist.id);
    assert_eq!(body["show"]["venue_id"], venue.id);
    assert_eq!(body["show"]["venue_name"], "The Musical Hop");
    assert_eq!(body["show"]["start_time"], "2099-05-21T21:30:00Z");

    let req = test::TestRequest::get()
        .uri(&format!("/api/venues/{}", venue.id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["venue"]["upcoming_shows_count"], 1);
    assert_eq!(body["venue"]["upcoming_shows"][0]["artist_name"], "Guns N Petals");
}

#[actix_web::test]
async fn test_list_shows_ordered_by_start_time() {
    let state = build_test_state().await;
    let conn = db(&state);
    let hop = seed_venue(conn, "The Musical Hop", "San Francisco", "CA").await;
    let park = seed_venue(conn, "Park Square", "San Francisco", "CA").await;
    let petals = seed_artist(conn, "Guns N Petals").await;
    let sax = seed_artist(conn, "The Wild Sax Band").await;
    seed_show(conn, &park, &sax, datetime!(2099-04-01 20:00 UTC)).await;
    seed_show(conn, &hop, &petals, datetime!(2019-05-21 21:30 UTC)).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/shows").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let shows = body["shows"].as_array().expect("shows array");
    assert_eq!(shows.len(), 2);
    assert_eq!(shows[0]["venue_name"], "The Musical Hop");
    assert_eq!(shows[0]["artist_name"], "Guns N Petals");
    assert_eq!(
        shows[0]["artist_image_link"],
        "https://img.example/Guns N Petals.png"
    );
    assert_eq!(shows[1]["artist_id"], sax.id);
}

#[actix_web::test]
async fn test_invalid_show_payloads_are_422() {
    let state = build_test_state().await;
    let conn = db(&state);
    let venue = seed_venue(conn, "The Musical Hop", "San Francisco", "CA").await;
    let artist = seed_artist(conn, "Guns N Petals").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let cases = [
        (
            json!({"artist_id": 999, "venue_id": venue.id, "start_time": "2099-01-01T00:00:00Z"}),
            "artist 999",
        ),
        (
            json!({"artist_id": artist.id, "venue_id": 999, "start_time": "2099-01-01T00:00:00Z"}),
            "venue 999",
        ),
        (
            json!({"artist_id": artist.id, "venue_id": venue.id, "start_time": "tomorrow"}),
            "RFC 3339",
        ),
        (
            json!({"venue_id": venue.id, "start_time": "2099-01-01T00:00:00Z"}),
            "artist_id",
        ),
    ];
    for (payload, detail) in cases {
        let req = test::TestRequest::post()
            .uri("/api/shows")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_structure(resp, 422, "VALIDATION_ERROR", detail).await;
    }

    let req = test::TestRequest::get().uri("/api/shows").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["shows"], json!([]));
}
