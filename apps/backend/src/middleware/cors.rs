use std::env;

use actix_cors::Cors;
use actix_web::http::header;

/// Origins used when `CORS_ALLOWED_ORIGINS` yields nothing valid: the trivia
/// React dev server and the coffee-shop Ionic dev server.
const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:8100",
    "http://127.0.0.1:8100",
];

#[derive(Debug, PartialEq, Eq)]
enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

/// Parse a comma-separated origin list. `*` anywhere opens the API to every
/// origin; empty, `null` and non-http(s) entries are ignored.
fn parse_origins(raw: &str) -> AllowedOrigins {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .collect();

    if entries.contains(&"*") {
        return AllowedOrigins::Any;
    }

    let origins: Vec<String> = entries
        .into_iter()
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.trim_end_matches('/').to_string())
        .collect();

    if origins.is_empty() {
        AllowedOrigins::List(DEV_ORIGINS.iter().map(|s| s.to_string()).collect())
    } else {
        AllowedOrigins::List(origins)
    }
}

/// CORS for the public JSON API, configured from `CORS_ALLOWED_ORIGINS`.
pub fn cors_middleware() -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .max_age(3600);

    match parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default()) {
        AllowedOrigins::Any => cors.allow_any_origin(),
        AllowedOrigins::List(origins) => origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin)),
    }
}
