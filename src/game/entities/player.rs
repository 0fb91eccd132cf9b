use uuid::Uuid;

use crate::config::game::{
    BASE_FIRE_RADIUS, BASE_MAX_BOMBS, BASE_SPEED, GRID_COLS, GRID_ROWS, PLAYER_ONE_COLOR,
    PLAYER_TWO_COLOR,
};
use crate::game::types::{Direction, InputState, Position};

/// One combatant.
///
/// `x`/`y` is the continuous position in grid units; `target_x`/`target_y`
/// is the cell the player is gliding toward. While the two differ the player
/// is between cells and new input is not read.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: Uuid,
    pub slot: u8,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub target_x: i32,
    pub target_y: i32,
    pub facing: Direction,
    pub color: &'static str,
    pub speed: f32,
    pub max_bombs: u8,
    pub active_bombs: u8,
    pub fire_radius: u8,
    pub alive: bool,
    pub moving: bool,
    pub bomb_key_down: bool,
    pub input: InputState,
}

impl Player {
    /// Create a fresh player at their slot's spawn corner with base abilities.
    ///
    /// Also used at round start: identity fields carry over, everything else
    /// resets.
    pub fn new(id: Uuid, slot: u8, name: String) -> Self {
        let spawn = spawn_for_slot(slot);
        Player {
            id,
            slot,
            name,
            x: spawn.x as f32,
            y: spawn.y as f32,
            target_x: spawn.x,
            target_y: spawn.y,
            facing: if slot == 1 { Direction::Down } else { Direction::Up },
            color: if slot == 1 { PLAYER_ONE_COLOR } else { PLAYER_TWO_COLOR },
            speed: BASE_SPEED,
            max_bombs: BASE_MAX_BOMBS,
            active_bombs: 0,
            fire_radius: BASE_FIRE_RADIUS,
            alive: true,
            moving: false,
            bomb_key_down: false,
            input: InputState::default(),
        }
    }

    /// The cell this player currently counts as standing on.
    pub fn rounded(&self) -> Position {
        Position {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
        }
    }
}

/// Spawn corner for a slot: slot 1 top-left, slot 2 bottom-right.
fn spawn_for_slot(slot: u8) -> Position {
    if slot == 1 {
        Position { x: 1, y: 1 }
    } else {
        Position {
            x: GRID_COLS as i32 - 2,
            y: GRID_ROWS as i32 - 2,
        }
    }
}
