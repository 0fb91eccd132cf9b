use serde::{Serialize, Deserialize};

use crate::config::game::{BRICK_DENSITY, GRID_COLS, GRID_ROWS};
use crate::game::rng::GameRng;
use crate::game::types::{Cell, PowerupKind};

/// The arena cell matrix, row-major (`y` then `x`).
///
/// Coordinates are signed so callers can probe one step past the edge;
/// every out-of-range cell reads as `None` and is impassable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Generate the arena for a new round.
    ///
    /// The outer ring and every interior cell with two even coordinates are
    /// walls. The four 3x3 corner regions stay free of bricks so players can
    /// spawn safely. Every other interior cell rolls `BRICK_DENSITY` for a
    /// brick.
    pub fn generate(rng: &mut GameRng) -> Self {
        let mut cells = vec![vec![Cell::Empty; GRID_COLS]; GRID_ROWS];
        for (y, row) in cells.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = if x == 0 || x == GRID_COLS - 1 || y == 0 || y == GRID_ROWS - 1 {
                    Cell::Wall
                } else if x % 2 == 0 && y % 2 == 0 {
                    Cell::Wall
                } else if in_spawn_clearing(x, y) {
                    Cell::Empty
                } else if rng.chance(BRICK_DENSITY) {
                    Cell::Brick
                } else {
                    Cell::Empty
                };
            }
        }
        Grid { cells }
    }

    pub fn cols(&self) -> usize {
        GRID_COLS
    }

    pub fn rows(&self) -> usize {
        GRID_ROWS
    }

    /// Cell at `(x, y)`, or `None` out of range.
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        self.cells
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    /// Overwrite the cell at `(x, y)`. Out-of-range writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(slot) = self
            .cells
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            *slot = cell;
        }
    }

    /// Whether a player may occupy `(x, y)`: empty and powerup cells only.
    pub fn is_passable(&self, x: i32, y: i32) -> bool {
        matches!(self.cell(x, y), Some(Cell::Empty) | Some(Cell::Powerup(_)))
    }

    /// Powerup kind at `(x, y)`, if any.
    pub fn powerup_at(&self, x: i32, y: i32) -> Option<PowerupKind> {
        match self.cell(x, y) {
            Some(Cell::Powerup(kind)) => Some(kind),
            _ => None,
        }
    }
}

/// The four 3x3 corner regions where bricks never generate.
fn in_spawn_clearing(x: usize, y: usize) -> bool {
    (x <= 2 || x >= GRID_COLS - 3) && (y <= 2 || y >= GRID_ROWS - 3)
}
