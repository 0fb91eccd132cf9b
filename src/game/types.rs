use serde::{Serialize, Deserialize};
use uuid::Uuid;

/// Integer cell coordinates on the arena grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Facing / blast-arm direction. Variant order fixes the arm order a
/// detonation walks: up, right, down, left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit offset of one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// Kinds of powerup a burned brick can leave behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerupKind {
    Bomb,
    Fire,
    Speed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Wall,
    Brick,
    Powerup(PowerupKind),
}

/// Latest input intent reported by a client. Missing fields deserialize
/// to false, so partial payloads degrade to "not pressed".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    #[serde(default)]
    pub up: bool,
    #[serde(default)]
    pub down: bool,
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default)]
    pub bomb: bool,
}

/// One lethal blast cell left by a detonation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionCell {
    pub pos: Position,
    pub expires_at: u64,
    pub is_center: bool,
    /// Arm this cell belongs to; `None` for the center.
    pub arm: Option<Direction>,
    /// Set on the last cell actually emitted on an arm, whether the arm
    /// ran its full radius or stopped early.
    pub is_arm_end: bool,
}

/// Lifecycle phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Playing,
    Over,
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Slot(u8),
    Draw,
}

/// Per-slot win counters. Kept for the process lifetime, never reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub p1: u32,
    pub p2: u32,
}

impl Scores {
    /// Credit a round win to the given slot.
    pub fn award(&mut self, slot: u8) {
        match slot {
            1 => self.p1 += 1,
            2 => self.p2 += 1,
            _ => {}
        }
    }
}

/// Events produced by one simulation tick, drained by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    RoundStarted,
    PlayerDied { player_id: Uuid, slot: u8 },
    RoundEnded { winner: Winner, scores: Scores },
    PowerupCollected { kind: PowerupKind, slot: u8 },
}
