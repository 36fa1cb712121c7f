use actix_web::web;

pub mod codes;
pub mod games;
pub mod health;
pub mod realtime;

/// Registers every route. `main.rs` and the route tests share this so both
/// serve the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Games: /api/games/**
    cfg.service(
        web::scope("/api/games")
            .configure(games::configure_routes)
            .configure(codes::configure_game_routes)
            .configure(realtime::configure_routes),
    );

    // Join codes: /api/codes/**
    cfg.service(web::scope("/api/codes").configure(codes::configure_routes));
}
