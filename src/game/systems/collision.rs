//! Move validation and lethal overlap resolution.

use crate::game::entities::Bomb;
use crate::game::grid::Grid;
use crate::game::state::GameState;
use crate::game::types::GameEvent;

/// Whether a player may commit `(x, y)` as a movement target.
///
/// Out-of-range cells, walls, bricks and cells holding a live bomb are all
/// blocked. A bomb blocks even its owner: targets are always neighbor cells,
/// so the bomb under a player's feet never pins them in place.
pub fn can_move_to(grid: &Grid, bombs: &[Bomb], x: i32, y: i32) -> bool {
    if !grid.is_passable(x, y) {
        return false;
    }
    !bombs.iter().any(|b| b.pos.x == x && b.pos.y == y)
}

/// Kill every living player standing on an active blast cell.
///
/// Emits one death event per player, on the alive-to-dead transition only.
pub fn sweep_deaths(state: &mut GameState) {
    let GameState {
        players,
        explosions,
        events,
        ..
    } = state;
    for player in players.iter_mut() {
        if !player.alive {
            continue;
        }
        let pos = player.rounded();
        if explosions.iter().any(|e| e.pos == pos) {
            player.alive = false;
            events.push(GameEvent::PlayerDied {
                player_id: player.id,
                slot: player.slot,
            });
        }
    }
}
