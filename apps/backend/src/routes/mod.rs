use actix_web::web;

pub mod game;
pub mod health;

/// Register every route. Used by `main.rs` and by tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Game pages: /, /wait
    game::configure_routes(cfg);
}
