//! Game entities module.
//!
//! This module organizes player and bomb entity state.

pub mod player;
pub mod bomb;

pub use player::*;
pub use bomb::*;
