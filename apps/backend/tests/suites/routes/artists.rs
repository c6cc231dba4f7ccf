use actix_web::test;
use serde_json::{json, Value};
use time::macros::datetime;

use crate::common::assert_problem_details_structure;
use crate::support::create_test_app;
use crate::support::factory::{db, seed_artist, seed_show, seed_venue};
use crate::support::test_state::build_test_state;

#[actix_web::test]
async fn test_list_artists_by_name() {
    let state = build_test_state().await;
    let conn = db(&state);
    seed_artist(conn, "The Wild Sax Band").await;
    seed_artist(conn, "Guns N Petals").await;
    seed_artist(conn, "Matt Quevedo").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/artists").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = body["artists"]
        .as_array()
        .expect("artists array")
        .iter()
        .filter_map(|a| a["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"]);
    assert!(body["artists"][0].get("city").is_none());
}

#[actix_web::test]
async fn test_create_artist_and_read_detail() {
    let state = build_test_state().await;
    let conn = db(&state);
    let venue = seed_venue(conn, "The Musical Hop", "San Francisco", "CA").await;
    let app_state = state.clone();
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/artists")
        .set_json(json!({
            "name": "Matt Quevedo",
            "city": "New York",
            "state": "NY",
            "genres": ["Jazz"],
            "seeking_venue": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let body: Value = test::read_body_json(resp).await;
    let artist_id = body["artist"]["id"].as_i64().expect("artist id");
    assert_eq!(body["artist"]["seeking_venue"], true);

    let artist = trivia_cafe::repos::artists::require(db(&app_state), artist_id)
        .await
        .expect("created artist");
    seed_show(db(&app_state), &venue, &artist, datetime!(2019-06-15 23:00 UTC)).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/artists/{artist_id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["artist"]["name"], "Matt Quevedo");
    assert_eq!(body["artist"]["past_shows_count"], 1);
    assert_eq!(body["artist"]["upcoming_shows_count"], 0);
    assert_eq!(body["artist"]["past_shows"][0]["venue_name"], "The Musical Hop");
    assert_eq!(body["artist"]["upcoming_shows"], json!([]));
}

#[actix_web::test]
async fn test_search_artists_counts_upcoming_shows() {
    let state = build_test_state().await;
    let conn = db(&state);
    let venue = seed_venue(conn, "The Musical Hop", "San Francisco", "CA").await;
    let band = seed_artist(conn, "The Wild Sax Band").await;
    seed_artist(conn, "Guns N Petals").await;
    seed_show(conn, &venue, &band, datetime!(2099-04-01 20:00 UTC)).await;
    seed_show(conn, &venue, &band, datetime!(2019-04-01 20:00 UTC)).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/artists/search")
        .set_json(json!({"search_term": "band"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["id"], band.id);
    assert_eq!(body["data"][0]["num_upcoming_shows"], 1);

    let req = test::TestRequest::post()
        .uri("/api/artists/search")
        .set_json(json!({}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], 2);
}

#[actix_web::test]
async fn test_patch_and_delete_artist() {
    let state = build_test_state().await;
    let conn = db(&state);
    let venue = seed_venue(conn, "The Musical Hop", "San Francisco", "CA").await;
    let artist = seed_artist(conn, "Guns N Petals").await;
    seed_show(conn, &venue, &artist, datetime!(2099-04-01 20:00 UTC)).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/artists/{}", artist.id))
        .set_json(json!({"phone": "326-123-5000", "genres": ["Rock", "Blues"]}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["artist"]["phone"], "326-123-5000");
    assert_eq!(body["artist"]["genres"], json!(["Rock", "Blues"]));
    assert_eq!(body["artist"]["name"], "Guns N Petals");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/artists/{}", artist.id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["deleted"], artist.id);

    let req = test::TestRequest::get()
        .uri(&format!("/api/venues/{}", venue.id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["venue"]["upcoming_shows_count"], 0);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/artists/{}", artist.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 404, "ARTIST_NOT_FOUND", "").await;
}
