//! Bomb planting and fuse expiry.

use crate::game::entities::Bomb;
use crate::game::state::GameState;
use crate::game::systems::explosions::detonate;

/// Plant a bomb for every living player holding the bomb key this tick.
///
/// The key is edge-triggered: it must be released before another bomb can
/// be planted. Placement is skipped when the player is at their bomb cap or
/// the rounded cell already holds a bomb; the latch consumes the press
/// either way.
pub fn plant_bombs(state: &mut GameState, now: u64) {
    let GameState { players, bombs, .. } = state;

    for player in players.iter_mut() {
        if !player.alive {
            continue;
        }
        if player.input.bomb {
            if !player.bomb_key_down && player.active_bombs < player.max_bombs {
                let pos = player.rounded();
                if !bombs.iter().any(|b| b.pos == pos) {
                    bombs.push(Bomb::new(pos, player.id, player.fire_radius, now));
                    player.active_bombs += 1;
                }
            }
            player.bomb_key_down = true;
        } else {
            player.bomb_key_down = false;
        }
    }
}

/// Detonate every bomb whose fuse has elapsed.
///
/// Due bombs are marked before any blast resolves, so a fuse forced by
/// chain ignition is only picked up on the next tick's scan. Removal runs
/// in reverse index order; a bomb whose owner already left the arena is
/// removed without crediting anyone.
pub fn expire_bombs(state: &mut GameState, now: u64) {
    let due: Vec<usize> = state
        .bombs
        .iter()
        .enumerate()
        .filter(|(_, b)| b.is_due(now))
        .map(|(i, _)| i)
        .collect();

    for &i in &due {
        let bomb = state.bombs[i].clone();
        detonate(state, &bomb, now);
    }

    for &i in due.iter().rev() {
        let bomb = state.bombs.remove(i);
        if let Some(owner) = state.players.iter_mut().find(|p| p.id == bomb.owner) {
            owner.active_bombs = owner.active_bombs.saturating_sub(1);
        }
    }
}
