//! Arena module: the single two-slot match session.
//!
//! `server` owns the authoritative game state and the simulation loop;
//! `session` is the per-connection WebSocket actor; `messages` defines the
//! actor and wire protocol between them.

pub mod messages;
pub mod server;
pub mod session;
