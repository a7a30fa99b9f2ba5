use actix_web::{web, App, HttpServer};
use colorguess::config::server::ServerConfig;
use colorguess::infra::state::build_state;
use colorguess::middleware::request_trace::RequestTrace;
use colorguess::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🚀 Starting Colorguess on http://{}:{}",
        config.host, config.port
    );

    let app_state = match build_state()
        .with_public_url(config.public_url.clone())
        .build()
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    if let Some(url) = &config.public_url {
        println!("🔗 Share links point at {url}");
    }

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
