//! Blast propagation, terrain destruction and powerup handling.

use crate::config::game::{
    BLAST_DURATION_MS, FIRE_RADIUS_CAP, MAX_BOMBS_CAP, POWERUP_SPAWN_CHANCE, SPEED_CAP, SPEED_STEP,
};
use crate::game::entities::Bomb;
use crate::game::rng::GameRng;
use crate::game::state::GameState;
use crate::game::types::{Cell, Direction, ExplosionCell, GameEvent, Position, PowerupKind};

/// Expand one detonation into blast cells.
///
/// Four arms walk outward from the center up to the bomb's radius. The grid
/// edge and walls stop an arm before any cell is emitted there. A brick
/// burns down, may leave a powerup, and terminates the arm. A powerup on
/// the path is destroyed and the arm continues. A bomb on the path has its
/// fuse pulled down to `now`, never extended, so the next expiry scan
/// detonates it. The last cell emitted on each arm is flagged as the arm
/// end.
pub fn detonate(state: &mut GameState, bomb: &Bomb, now: u64) {
    let GameState {
        grid,
        bombs,
        explosions,
        rng,
        ..
    } = state;

    let expires_at = now + BLAST_DURATION_MS;
    explosions.push(ExplosionCell {
        pos: bomb.pos,
        expires_at,
        is_center: true,
        arm: None,
        is_arm_end: false,
    });

    for dir in Direction::ALL {
        let (ox, oy) = dir.offset();
        let mut last_emitted = None;

        for step in 1..=bomb.radius as i32 {
            let x = bomb.pos.x + ox * step;
            let y = bomb.pos.y + oy * step;
            let cell = match grid.cell(x, y) {
                Some(cell) => cell,
                None => break,
            };

            match cell {
                Cell::Wall => break,
                Cell::Brick => {
                    grid.set(x, y, Cell::Empty);
                    explosions.push(ExplosionCell {
                        pos: Position { x, y },
                        expires_at,
                        is_center: false,
                        arm: Some(dir),
                        is_arm_end: false,
                    });
                    last_emitted = Some(explosions.len() - 1);
                    if rng.chance(POWERUP_SPAWN_CHANCE) {
                        grid.set(x, y, Cell::Powerup(roll_powerup_kind(rng)));
                    }
                    break;
                }
                Cell::Powerup(_) => {
                    grid.set(x, y, Cell::Empty);
                }
                Cell::Empty => {}
            }

            if let Some(hit) = bombs.iter_mut().find(|b| b.pos.x == x && b.pos.y == y) {
                hit.fuse_deadline = hit.fuse_deadline.min(now);
            }

            explosions.push(ExplosionCell {
                pos: Position { x, y },
                expires_at,
                is_center: false,
                arm: Some(dir),
                is_arm_end: false,
            });
            last_emitted = Some(explosions.len() - 1);
        }

        if let Some(idx) = last_emitted {
            explosions[idx].is_arm_end = true;
        }
    }
}

/// Drop blast cells whose lifetime has elapsed.
pub fn clear_expired_blasts(state: &mut GameState, now: u64) {
    state.explosions.retain(|e| now < e.expires_at);
}

/// Apply powerup pickups for every living player standing on one.
///
/// An ability already at its cap leaves the powerup on the ground for a
/// later pass.
pub fn collect_powerups(state: &mut GameState) {
    let GameState {
        grid,
        players,
        events,
        ..
    } = state;

    for player in players.iter_mut() {
        if !player.alive {
            continue;
        }
        let pos = player.rounded();
        let Some(kind) = grid.powerup_at(pos.x, pos.y) else {
            continue;
        };
        let applied = match kind {
            PowerupKind::Bomb if player.max_bombs < MAX_BOMBS_CAP => {
                player.max_bombs += 1;
                true
            }
            PowerupKind::Fire if player.fire_radius < FIRE_RADIUS_CAP => {
                player.fire_radius += 1;
                true
            }
            PowerupKind::Speed if player.speed < SPEED_CAP => {
                player.speed = (player.speed + SPEED_STEP).min(SPEED_CAP);
                true
            }
            _ => false,
        };
        if applied {
            grid.set(pos.x, pos.y, Cell::Empty);
            events.push(GameEvent::PowerupCollected {
                kind,
                slot: player.slot,
            });
        }
    }
}

/// Weighted powerup pick: more bombs, less speed.
fn roll_powerup_kind(rng: &mut GameRng) -> PowerupKind {
    let roll = rng.roll();
    if roll < 0.45 {
        PowerupKind::Bomb
    } else if roll < 0.8 {
        PowerupKind::Fire
    } else {
        PowerupKind::Speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use uuid::Uuid;

    use crate::config::game::{GRID_COLS, GRID_ROWS};
    use crate::game::state::GameState;

    fn blank_state(seed: u64) -> GameState {
        let mut state = GameState::new(GameRng::new(seed));
        for y in 0..GRID_ROWS as i32 {
            for x in 0..GRID_COLS as i32 {
                if !matches!(state.grid.cell(x, y), Some(Cell::Wall)) {
                    state.grid.set(x, y, Cell::Empty);
                }
            }
        }
        state
    }

    fn bomb_at(x: i32, y: i32, radius: u8) -> Bomb {
        Bomb::new(Position { x, y }, Uuid::new_v4(), radius, 0)
    }

    #[test]
    fn test_blast_stops_at_walls() {
        let mut state = blank_state(1);
        let bomb = bomb_at(1, 1, 2);
        detonate(&mut state, &bomb, 0);

        // Corner bomb: up and left arms hit the border immediately.
        let cells: Vec<Position> = state.explosions.iter().map(|e| e.pos).collect();
        assert!(cells.contains(&Position { x: 1, y: 1 }));
        assert!(cells.contains(&Position { x: 2, y: 1 }));
        assert!(cells.contains(&Position { x: 3, y: 1 }));
        assert!(cells.contains(&Position { x: 1, y: 2 }));
        assert!(cells.contains(&Position { x: 1, y: 3 }));
        assert!(!cells.contains(&Position { x: 0, y: 1 }));
        assert!(!cells.contains(&Position { x: 1, y: 0 }));
        assert_eq!(cells.len(), 5);
    }

    #[test]
    fn test_brick_terminates_arm_and_burns() {
        let mut state = blank_state(1);
        state.grid.set(2, 1, Cell::Brick);
        let bomb = bomb_at(1, 1, 3);
        detonate(&mut state, &bomb, 0);

        // The brick cell is emitted, nothing beyond it.
        assert!(state.explosions.iter().any(|e| e.pos == Position { x: 2, y: 1 }));
        assert!(!state.explosions.iter().any(|e| e.pos == Position { x: 3, y: 1 }));
        assert_ne!(state.grid.cell(2, 1), Some(Cell::Brick));
    }

    #[test]
    fn test_arm_end_marks_last_emitted_cell() {
        let mut state = blank_state(1);
        state.grid.set(2, 1, Cell::Brick);
        let bomb = bomb_at(1, 1, 3);
        detonate(&mut state, &bomb, 0);

        let end_on = |pos: Position| {
            state
                .explosions
                .iter()
                .find(|e| e.pos == pos)
                .map(|e| e.is_arm_end)
        };
        // Brick-terminated arm ends on the brick cell.
        assert_eq!(end_on(Position { x: 2, y: 1 }), Some(true));
        // Open arm ends at full radius.
        assert_eq!(end_on(Position { x: 1, y: 4 }), Some(true));
        assert_eq!(end_on(Position { x: 1, y: 3 }), Some(false));
        // The center is never an arm end.
        assert_eq!(end_on(Position { x: 1, y: 1 }), Some(false));
    }

    #[test]
    fn test_blast_consumes_powerup_and_continues() {
        let mut state = blank_state(1);
        state.grid.set(2, 1, Cell::Powerup(PowerupKind::Fire));
        let bomb = bomb_at(1, 1, 3);
        detonate(&mut state, &bomb, 0);

        assert_eq!(state.grid.cell(2, 1), Some(Cell::Empty));
        assert!(state.explosions.iter().any(|e| e.pos == Position { x: 2, y: 1 }));
        assert!(state.explosions.iter().any(|e| e.pos == Position { x: 3, y: 1 }));
    }

    #[test]
    fn test_chain_forces_fuse_without_extending() {
        let mut state = blank_state(1);
        let trigger = bomb_at(1, 1, 3);
        state.bombs.push(bomb_at(3, 1, 2));
        state.bombs[0].fuse_deadline = 500;
        detonate(&mut state, &trigger, 1000);

        // An already-due fuse is not pushed forward.
        assert_eq!(state.bombs[0].fuse_deadline, 500);

        state.bombs[0].fuse_deadline = 4000;
        detonate(&mut state, &trigger, 1000);
        assert_eq!(state.bombs[0].fuse_deadline, 1000);
    }

    #[test]
    fn test_blast_passes_through_bombs() {
        let mut state = blank_state(1);
        state.bombs.push(bomb_at(2, 1, 2));
        let trigger = bomb_at(1, 1, 3);
        detonate(&mut state, &trigger, 0);

        assert!(state.explosions.iter().any(|e| e.pos == Position { x: 2, y: 1 }));
        assert!(state.explosions.iter().any(|e| e.pos == Position { x: 3, y: 1 }));
    }

    #[test]
    fn test_powerup_spawn_rate_converges() {
        let mut spawned = 0u32;
        let trials = 4000;
        let mut state = blank_state(77);
        for _ in 0..trials {
            state.grid.set(2, 1, Cell::Brick);
            state.explosions.clear();
            let bomb = bomb_at(1, 1, 2);
            detonate(&mut state, &bomb, 0);
            if matches!(state.grid.cell(2, 1), Some(Cell::Powerup(_))) {
                spawned += 1;
                state.grid.set(2, 1, Cell::Empty);
            }
        }
        let ratio = spawned as f64 / trials as f64;
        assert!((ratio - POWERUP_SPAWN_CHANCE).abs() < 0.03, "ratio was {ratio}");
    }

    #[test]
    fn test_powerup_kind_weights_converge() {
        let mut rng = GameRng::new(123);
        let trials = 10_000;
        let mut counts = [0u32; 3];
        for _ in 0..trials {
            match roll_powerup_kind(&mut rng) {
                PowerupKind::Bomb => counts[0] += 1,
                PowerupKind::Fire => counts[1] += 1,
                PowerupKind::Speed => counts[2] += 1,
            }
        }
        let ratio = |c: u32| c as f64 / trials as f64;
        assert!((ratio(counts[0]) - 0.45).abs() < 0.02);
        assert!((ratio(counts[1]) - 0.35).abs() < 0.02);
        assert!((ratio(counts[2]) - 0.20).abs() < 0.02);
    }

    proptest! {
        #[test]
        fn prop_blast_never_escapes_or_lands_on_walls(seed in any::<u64>(), radius in 1u8..=6) {
            let mut state = GameState::new(GameRng::new(seed));
            let bomb = bomb_at(1, 1, radius);
            detonate(&mut state, &bomb, 0);
            for cell in &state.explosions {
                let on_grid = state.grid.cell(cell.pos.x, cell.pos.y);
                prop_assert!(on_grid.is_some());
                prop_assert_ne!(on_grid, Some(Cell::Wall));
            }
        }
    }
}
