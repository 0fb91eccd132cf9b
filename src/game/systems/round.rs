//! Round lifecycle: win detection and scorekeeping.

use crate::game::state::GameState;
use crate::game::types::{GameEvent, RoundPhase, Winner};

/// Close the round once at most one combatant is left standing.
///
/// Only runs while the round is live with both slots filled, so a round is
/// scored exactly once; a solo player waiting for an opponent can never win
/// against nobody. Lingering blasts keep killing after the transition, but
/// those deaths no longer change the outcome.
pub fn evaluate_round(state: &mut GameState) {
    if state.phase != RoundPhase::Playing || state.players.len() < 2 {
        return;
    }
    let alive: Vec<u8> = state
        .players
        .iter()
        .filter(|p| p.alive)
        .map(|p| p.slot)
        .collect();
    if alive.len() > 1 {
        return;
    }

    state.phase = RoundPhase::Over;
    let winner = match alive.first() {
        Some(&slot) => {
            state.scores.award(slot);
            Winner::Slot(slot)
        }
        None => Winner::Draw,
    };
    state.events.push(GameEvent::RoundEnded {
        winner,
        scores: state.scores,
    });
}
