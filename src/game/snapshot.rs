//! Wire views of the simulation state, broadcast to clients every tick.

use serde::{Serialize, Deserialize};

use crate::game::grid::Grid;
use crate::game::state::GameState;
use crate::game::types::Direction;

/// Full per-tick state broadcast.
///
/// Carries the tick timestamp so clients can animate fuses and blast decay
/// against the server clock instead of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub now: u64,
    pub grid: Grid,
    pub players: Vec<PlayerView>,
    pub bombs: Vec<BombView>,
    pub explosions: Vec<ExplosionView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub slot: u8,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub facing: Direction,
    pub color: String,
    pub alive: bool,
    pub moving: bool,
    pub max_bombs: u8,
    pub fire_radius: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BombView {
    pub x: i32,
    pub y: i32,
    pub planted_at: u64,
    pub fuse_deadline: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub x: i32,
    pub y: i32,
    pub is_center: bool,
    pub arm: Option<Direction>,
    pub is_arm_end: bool,
}

impl Snapshot {
    /// Capture the wire view of the current state.
    pub fn capture(state: &GameState, now: u64) -> Self {
        Snapshot {
            now,
            grid: state.grid.clone(),
            players: state
                .players
                .iter()
                .map(|p| PlayerView {
                    slot: p.slot,
                    name: p.name.clone(),
                    x: p.x,
                    y: p.y,
                    facing: p.facing,
                    color: p.color.to_string(),
                    alive: p.alive,
                    moving: p.moving,
                    max_bombs: p.max_bombs,
                    fire_radius: p.fire_radius,
                })
                .collect(),
            bombs: state
                .bombs
                .iter()
                .map(|b| BombView {
                    x: b.pos.x,
                    y: b.pos.y,
                    planted_at: b.planted_at,
                    fuse_deadline: b.fuse_deadline,
                })
                .collect(),
            explosions: state
                .explosions
                .iter()
                .map(|e| ExplosionView {
                    x: e.pos.x,
                    y: e.pos.y,
                    is_center: e.is_center,
                    arm: e.arm,
                    is_arm_end: e.is_arm_end,
                })
                .collect(),
        }
    }
}
