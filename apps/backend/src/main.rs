use actix_web::{web, App, HttpServer};
use trivia_cafe::config::api::ApiConfig;
use trivia_cafe::config::db::{DbKind, DbProfile};
use trivia_cafe::infra::state::build_state;
use trivia_cafe::middleware::cors::cors_middleware;
use trivia_cafe::middleware::request_trace::RequestTrace;
use trivia_cafe::middleware::structured_logger::StructuredLogger;
use trivia_cafe::middleware::trace_span::TraceSpan;
use trivia_cafe::routes;
use trivia_cafe::state::security_config::SecurityConfig;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    println!("🚀 Starting Trivia Cafe backend on http://{}:{}", host, port);

    let security_config = match SecurityConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    let api_config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_db(DbKind::Postgres)
        .with_profile(DbProfile::Prod)
        .with_security(security_config)
        .with_api(api_config)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    println!("✅ Database connected");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
