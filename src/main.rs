//! Main entry point for the arena server.
//!
//! Initializes the actor system, configures application state, and launches the HTTP server
//! with the arena WebSocket endpoint.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use config::server::DEFAULT_PORT;
use server::arena::server::ArenaServer;

pub mod config;
mod server;
mod game;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Start the arena server actor (owns the simulation and all connections).
    let arena_addr = ArenaServer::new().start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(arena_addr));

    // Listen port from the environment, falling back to the default.
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    // Start the HTTP server with the WebSocket endpoint.
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
