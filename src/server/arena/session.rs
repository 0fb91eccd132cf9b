/// WebSocket session handler for the arena.
///
/// This actor manages a single client's connection, registering it with the
/// arena server on start, relaying input intents, and serializing outbound
/// server messages onto the socket. Whether the connection is a combatant or
/// a spectator is decided by the arena server, not here.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{debug, info, warn};
use std::borrow::Cow;
use uuid::Uuid;

use super::messages::{ClientInput, ClientWsMessage, Connect, Disconnect, ServerWsMessage};
use super::server::ArenaServer;
use crate::server::ws_error::ws_error_message;

/// Represents one client's WebSocket session with the arena.
pub struct ArenaSession {
    /// Connection id; doubles as the player id when this session holds a slot.
    pub id: Uuid,
    pub name: String,
    pub arena_addr: Addr<ArenaServer>,
}

impl Actor for ArenaSession {
    type Context = ws::WebsocketContext<Self>;

    /// Called when the session starts. Registers the connection with the arena.
    fn started(&mut self, ctx: &mut Self::Context) {
        info!("[Session] {} connected ({})", self.name, self.id);
        self.arena_addr.do_send(Connect {
            conn_id: self.id,
            name: self.name.clone(),
            addr: ctx.address().recipient(),
        });
    }

    /// Called when the session stops. Removes the connection from the arena.
    fn stopped(&mut self, _ctx: &mut Self::Context) {
        info!("[Session] {} disconnected ({})", self.name, self.id);
        self.arena_addr.do_send(Disconnect { conn_id: self.id });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ArenaSession {
    /// Handles incoming WebSocket messages from the client.
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                match serde_json::from_str::<ClientWsMessage>(&text) {
                    Ok(ClientWsMessage::Input(input)) => {
                        self.arena_addr.do_send(ClientInput {
                            conn_id: self.id,
                            input,
                        });
                    }
                    Ok(ClientWsMessage::Ping) => {
                        // Keepalive; nothing to do.
                    }
                    Err(e) => {
                        debug!("[Session] Unparseable message from {}: {}", self.id, e);
                        ctx.text(ws_error_message(
                            "INVALID_MESSAGE",
                            "Unrecognized client message",
                        ));
                    }
                }
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(_)) => ctx.stop(),
            _ => (),
        }
    }
}

impl Handler<ServerWsMessage> for ArenaSession {
    type Result = ();

    /// Handles messages sent from the arena server to this session.
    fn handle(&mut self, msg: ServerWsMessage, ctx: &mut Self::Context) {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                // Serialization error: notify client and close connection.
                warn!("[Session] Failed to serialize server message: {}", e);
                ctx.text(ws_error_message("INTERNAL_ERROR", "Internal server error"));
                ctx.close(Some(ws::CloseReason {
                    code: ws::CloseCode::Error,
                    description: Some("Internal server error".into()),
                }));
                ctx.stop();
            }
        }
    }
}

/// WebSocket endpoint for the arena.
///
/// Expects an optional `name` query parameter for the display name; connections
/// without one get a default.
pub async fn ws_arena(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    let mut name = String::new();

    for kv in req.query_string().split('&') {
        let mut split = kv.split('=');
        if let (Some("name"), Some(value)) = (split.next(), split.next()) {
            name = urlencoding::decode(value)
                .unwrap_or_else(|_| Cow::Borrowed(""))
                .into_owned();
        }
    }

    let id = Uuid::new_v4();
    if name.trim().is_empty() {
        name = format!("Player_{}", &id.to_string()[..6]);
    }

    ws::start(
        ArenaSession {
            id,
            name,
            arena_addr: data.arena_addr.clone(),
        },
        &req,
        stream,
    )
}
