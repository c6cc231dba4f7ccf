//! Seed data and credentials for route and service tests.

use std::time::SystemTime;

use backend_test_support::unique_helpers::unique_title;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use time::OffsetDateTime;
use trivia_cafe::auth::claims::permissions;
use trivia_cafe::auth::jwt::mint_access_token;
use trivia_cafe::domain::booking::{
    Artist, ArtistDraft, ArtistPatch, Venue, VenueDraft, VenuePatch,
};
use trivia_cafe::domain::drink::Drink;
use trivia_cafe::domain::question::{CategoryId, NewQuestion, Question};
use trivia_cafe::domain::recipe::Recipe;
use trivia_cafe::domain::show::Show;
use trivia_cafe::repos::{artists, drinks, questions, shows, venues};
use trivia_cafe::state::app_state::AppState;

/// Seeded category ids (see `migration::SEED_CATEGORIES`).
pub const SCIENCE: CategoryId = 1;
pub const ART: CategoryId = 2;
pub const GEOGRAPHY: CategoryId = 3;
pub const HISTORY: CategoryId = 4;

pub const BARISTA: &[&str] = &[permissions::GET_DRINKS_DETAIL];
pub const MANAGER: &[&str] = &[
    permissions::GET_DRINKS_DETAIL,
    permissions::POST_DRINKS,
    permissions::PATCH_DRINKS,
    permissions::DELETE_DRINKS,
];

pub fn db(state: &AppState) -> &DatabaseConnection {
    state.db().expect("test state has a database")
}

pub async fn seed_question(
    conn: &DatabaseConnection,
    question: &str,
    category: CategoryId,
    difficulty: i32,
) -> Question {
    questions::create(
        conn,
        NewQuestion {
            question: question.to_string(),
            answer: format!("answer to {question}"),
            category,
            difficulty,
        },
    )
    .await
    .expect("seed question")
}

/// `n` questions spread round-robin over the first four categories.
pub async fn seed_questions(conn: &DatabaseConnection, n: usize) -> Vec<Question> {
    let cats = [SCIENCE, ART, GEOGRAPHY, HISTORY];
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let category = cats[i % cats.len()];
        let difficulty = 1 + (i % 5) as i32;
        out.push(seed_question(conn, &format!("Question {i}?"), category, difficulty).await);
    }
    out
}

pub fn sample_recipe() -> Value {
    json!([
        {"name": "espresso", "color": "brown", "parts": 1},
        {"name": "steamed milk", "color": "white", "parts": 3}
    ])
}

pub async fn seed_drink(conn: &DatabaseConnection, title: &str) -> Drink {
    let recipe = Recipe::from_json(sample_recipe()).expect("valid recipe");
    drinks::create(conn, title.to_string(), &recipe)
        .await
        .expect("seed drink")
}

/// A drink whose title no other test will collide with.
pub async fn seed_any_drink(conn: &DatabaseConnection) -> Drink {
    seed_drink(conn, &unique_title("House Blend")).await
}

pub async fn seed_venue(conn: &DatabaseConnection, name: &str, city: &str, state: &str) -> Venue {
    let patch: VenuePatch = serde_json::from_value(json!({
        "name": name,
        "city": city,
        "state": state,
        "address": "1015 Folsom Street",
        "genres": ["Jazz", "Swing"],
        "image_link": format!("https://img.example/{name}.png"),
    }))
    .expect("venue patch");
    venues::create(conn, VenueDraft::create(patch).expect("valid venue"))
        .await
        .expect("seed venue")
}

pub async fn seed_artist(conn: &DatabaseConnection, name: &str) -> Artist {
    let patch: ArtistPatch = serde_json::from_value(json!({
        "name": name,
        "city": "San Francisco",
        "state": "CA",
        "genres": ["Rock n Roll"],
        "image_link": format!("https://img.example/{name}.png"),
    }))
    .expect("artist patch");
    artists::create(conn, ArtistDraft::create(patch).expect("valid artist"))
        .await
        .expect("seed artist")
}

pub async fn seed_show(
    conn: &DatabaseConnection,
    venue: &Venue,
    artist: &Artist,
    start_time: OffsetDateTime,
) -> Show {
    shows::create(conn, venue, artist, start_time)
        .await
        .expect("seed show")
}

pub fn bearer(state: &AppState, permissions: &[&str]) -> String {
    let token = mint_access_token("auth0|test-user", permissions, SystemTime::now(), &state.security)
        .expect("mint token");
    format!("Bearer {token}")
}
