// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the backend server components, including:
//! - Application state management
//! - HTTP/WebSocket routing
//! - The arena actor (slots, spectators, simulation loop)
//! - WebSocket error helpers

pub mod state;
pub mod router;
pub mod arena;
pub mod ws_error;
