use uuid::Uuid;

use crate::game::entities::{Bomb, Player};
use crate::game::grid::Grid;
use crate::game::rng::GameRng;
use crate::game::systems::{
    clear_expired_blasts, collect_powerups, evaluate_round, expire_bombs, plant_bombs,
    sweep_deaths, update_movement,
};
use crate::game::types::{ExplosionCell, GameEvent, InputState, RoundPhase, Scores};

/// Authoritative simulation state for one arena.
///
/// Everything a round touches lives here; the actor layer owns exactly one
/// of these and is the only writer. Timestamps are milliseconds from an
/// epoch the caller chooses (the arena uses its start instant), which keeps
/// the whole pipeline reproducible in tests.
#[derive(Debug)]
pub struct GameState {
    pub grid: Grid,
    pub players: Vec<Player>,
    pub bombs: Vec<Bomb>,
    pub explosions: Vec<ExplosionCell>,
    pub phase: RoundPhase,
    pub scores: Scores,
    pub rng: GameRng,
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create an empty arena with a generated grid.
    pub fn new(mut rng: GameRng) -> Self {
        let grid = Grid::generate(&mut rng);
        GameState {
            grid,
            players: Vec::new(),
            bombs: Vec::new(),
            explosions: Vec::new(),
            phase: RoundPhase::Playing,
            scores: Scores::default(),
            rng,
            events: Vec::new(),
        }
    }

    /// Reset the arena for a fresh round.
    ///
    /// The grid regenerates, bombs and blasts clear, and every player is
    /// recreated at their spawn with base abilities. Identities and scores
    /// carry over.
    pub fn start_round(&mut self) {
        self.grid = Grid::generate(&mut self.rng);
        self.bombs.clear();
        self.explosions.clear();
        self.players = self
            .players
            .iter()
            .map(|p| Player::new(p.id, p.slot, p.name.clone()))
            .collect();
        self.phase = RoundPhase::Playing;
        self.events.push(GameEvent::RoundStarted);
    }

    /// Drop a fresh player into the arena at their slot's spawn corner.
    pub fn add_player(&mut self, id: Uuid, slot: u8, name: String) {
        self.players.push(Player::new(id, slot, name));
    }

    pub fn remove_player(&mut self, id: Uuid) {
        self.players.retain(|p| p.id != id);
    }

    /// Buffer a player's latest input intent.
    ///
    /// Dropped silently for unknown ids, dead players, and once the round
    /// is over.
    pub fn submit_input(&mut self, id: Uuid, input: InputState) {
        if self.phase == RoundPhase::Over {
            return;
        }
        if let Some(player) = self.players.iter_mut().find(|p| p.id == id && p.alive) {
            player.input = input;
        }
    }

    /// Advance the simulation by one tick and return the events it produced.
    ///
    /// Order matters: movement consumes buffered input, plants come after
    /// moves, due bombs detonate before expired blast cells drop, deaths
    /// resolve against the surviving blast set, and the round is evaluated
    /// before the pickup pass that precedes the snapshot.
    pub fn tick(&mut self, now: u64) -> Vec<GameEvent> {
        update_movement(self);
        plant_bombs(self, now);
        expire_bombs(self, now);
        clear_expired_blasts(self, now);
        sweep_deaths(self);
        evaluate_round(self);
        collect_powerups(self);
        self.drain_events()
    }

    /// Take the pending event queue, leaving it empty.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
