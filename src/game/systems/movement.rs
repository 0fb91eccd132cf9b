//! Player movement system.
//!
//! Advances each player toward their target cell and commits new targets
//! from the buffered input.

use crate::config::game::AXIS_SNAP_EPSILON;
use crate::game::state::GameState;
use crate::game::systems::collision::can_move_to;
use crate::game::types::Direction;

/// Advance every living player by one tick.
///
/// A player between cells glides toward the target at `min(speed, remaining)`
/// on one axis. Once the remaining distance drops under `AXIS_SNAP_EPSILON`
/// they snap onto the cell and the buffered input may commit a new target.
/// Facing updates even when the chosen cell is blocked.
pub fn update_movement(state: &mut GameState) {
    let GameState {
        grid,
        players,
        bombs,
        ..
    } = state;

    for player in players.iter_mut() {
        if !player.alive {
            continue;
        }

        let dx = player.target_x as f32 - player.x;
        let dy = player.target_y as f32 - player.y;

        if dy.abs() > AXIS_SNAP_EPSILON {
            player.y += dy.signum() * player.speed.min(dy.abs());
            player.moving = true;
        } else if dx.abs() > AXIS_SNAP_EPSILON {
            player.x += dx.signum() * player.speed.min(dx.abs());
            player.moving = true;
        } else {
            player.x = player.target_x as f32;
            player.y = player.target_y as f32;
            player.moving = false;

            let next = if player.input.up {
                Some(Direction::Up)
            } else if player.input.down {
                Some(Direction::Down)
            } else if player.input.left {
                Some(Direction::Left)
            } else if player.input.right {
                Some(Direction::Right)
            } else {
                None
            };

            if let Some(dir) = next {
                player.facing = dir;
                let (ox, oy) = dir.offset();
                let tx = player.target_x + ox;
                let ty = player.target_y + oy;
                if can_move_to(grid, bombs, tx, ty) {
                    player.target_x = tx;
                    player.target_y = ty;
                }
            }
        }
    }
}
