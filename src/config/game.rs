/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as arena dimensions,
/// simulation rate, bomb timing, and player ability progression.
pub const TICK_INTERVAL_MS: u64 = 16; // Simulation tick interval (~60 Hz).

/// Number of columns in the arena grid.
pub const GRID_COLS: usize = 15;

/// Number of rows in the arena grid.
pub const GRID_ROWS: usize = 13;

/// Pixel size of one cell, sent to clients for rendering.
pub const TILE_SIZE: u32 = 48;

/// Number of combatant slots in the arena.
pub const MAX_PLAYERS: usize = 2;

/// Milliseconds from bomb placement to detonation.
pub const BOMB_FUSE_MS: u64 = 3000;

/// Milliseconds a blast cell stays lethal.
pub const BLAST_DURATION_MS: u64 = 500;

/// Milliseconds between a round ending and the next one starting.
pub const RESTART_DELAY_MS: u64 = 3000;

/// Probability that an eligible interior cell is generated as a brick.
pub const BRICK_DENSITY: f64 = 0.7;

/// Probability that a burned brick leaves a powerup behind.
pub const POWERUP_SPAWN_CHANCE: f64 = 0.25;

/// Starting bomb capacity.
pub const BASE_MAX_BOMBS: u8 = 1;

/// Starting blast radius.
pub const BASE_FIRE_RADIUS: u8 = 2;

/// Starting movement speed, in cells per tick.
pub const BASE_SPEED: f32 = 0.12;

/// Bomb capacity cap.
pub const MAX_BOMBS_CAP: u8 = 5;

/// Blast radius cap.
pub const FIRE_RADIUS_CAP: u8 = 6;

/// Movement speed cap.
pub const SPEED_CAP: f32 = 0.18;

/// Speed gained per speed powerup.
pub const SPEED_STEP: f32 = 0.015;

/// Distance under which a gliding player snaps onto the target cell.
pub const AXIS_SNAP_EPSILON: f32 = 0.01;

/// Display color for slot 1.
pub const PLAYER_ONE_COLOR: &str = "#3498db";

/// Display color for slot 2.
pub const PLAYER_TWO_COLOR: &str = "#e74c3c";
