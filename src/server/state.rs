// src/server/state.rs

//! Application state for the arena server.
//!
//! Holds the arena actor address. Used to share state between HTTP/WebSocket
//! handlers and the actor system.

use actix::Addr;
use crate::server::arena::server::ArenaServer;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the arena server actor (owns the simulation loop).
    pub arena_addr: Addr<ArenaServer>,
}

impl AppState {
    /// Create a new AppState with the given actor address.
    pub fn new(arena_addr: Addr<ArenaServer>) -> Self {
        AppState { arena_addr }
    }
}
