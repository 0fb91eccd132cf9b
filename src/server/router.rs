//! HTTP and WebSocket routing configuration.
//!
//! Defines the arena WebSocket endpoint and the operator status endpoint.

use actix_web::{error, web, Error, HttpResponse};

use crate::server::arena::messages::GetStatus;
use crate::server::arena::session::ws_arena;
use crate::server::state::AppState;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/ws").to(ws_arena))
        .service(web::resource("/status").to(status));
}

/// Operator status report: occupancy, round phase and scores as JSON.
async fn status(data: web::Data<AppState>) -> Result<HttpResponse, Error> {
    let report = data
        .arena_addr
        .send(GetStatus)
        .await
        .map_err(error::ErrorInternalServerError)?;
    Ok(HttpResponse::Ok().json(report))
}
