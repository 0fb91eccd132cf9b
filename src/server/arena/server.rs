/// Arena server actor.
///
/// Owns the authoritative game state for the single two-slot arena, drives
/// the fixed-rate simulation loop, and broadcasts snapshots and events to
/// every connected session. All mutation happens on this actor's mailbox,
/// so ticks, input, joins and the deferred restart never race.

use actix::prelude::*;
use actix::MessageResult;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use uuid::Uuid;
use log::{debug, info};

use super::messages::{ClientInput, Connect, Disconnect, GetStatus, ServerWsMessage, StatusReport};
use crate::config::game::{
    GRID_COLS, GRID_ROWS, MAX_PLAYERS, RESTART_DELAY_MS, TICK_INTERVAL_MS, TILE_SIZE,
};
use crate::game::rng::GameRng;
use crate::game::snapshot::Snapshot;
use crate::game::state::GameState;
use crate::game::types::{GameEvent, RoundPhase};

type SessionAddr = Recipient<ServerWsMessage>;

/// One connected client, combatant or spectator.
struct Connection {
    name: String,
    /// Combatant slot, or `None` for spectators.
    slot: Option<u8>,
    addr: SessionAddr,
}

/// Main arena server actor.
pub struct ArenaServer {
    /// All open connections, keyed by connection id.
    connections: HashMap<Uuid, Connection>,
    /// Authoritative simulation state.
    state: GameState,
    /// Epoch for simulation timestamps.
    started_at: Instant,
    /// Active simulation loop, if any.
    tick_timer: Option<SpawnHandle>,
    /// Pending deferred round restart, if any.
    restart_timer: Option<SpawnHandle>,
}

impl ArenaServer {
    /// Create a new arena seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_os_rng())
    }

    /// Create a new arena with the given randomness source.
    pub fn with_rng(rng: GameRng) -> Self {
        ArenaServer {
            connections: HashMap::new(),
            state: GameState::new(rng),
            started_at: Instant::now(),
            tick_timer: None,
            restart_timer: None,
        }
    }

    /// Milliseconds since the arena came up.
    fn now_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    fn slot_count(&self) -> usize {
        self.connections.values().filter(|c| c.slot.is_some()).count()
    }

    /// Lowest combatant slot nobody holds.
    fn free_slot(&self) -> Option<u8> {
        (1..=MAX_PLAYERS as u8).find(|s| !self.connections.values().any(|c| c.slot == Some(*s)))
    }

    /// Broadcast a message to every connected session.
    fn broadcast(&self, msg: ServerWsMessage) {
        for conn in self.connections.values() {
            conn.addr.do_send(msg.clone());
        }
    }

    /// Relay one tick's events to the clients and schedule follow-ups.
    fn dispatch_events(&mut self, events: Vec<GameEvent>, ctx: &mut Context<Self>) {
        for event in events {
            match event {
                GameEvent::RoundStarted => {
                    self.broadcast(ServerWsMessage::RoundStarted);
                }
                GameEvent::PlayerDied { player_id, slot } => {
                    info!("[Arena] Player in slot {} died", slot);
                    self.broadcast(ServerWsMessage::PlayerDied { player_id, slot });
                }
                GameEvent::RoundEnded { winner, scores } => {
                    info!("[Arena] Round over, winner: {:?}", winner);
                    self.broadcast(ServerWsMessage::RoundEnded { winner, scores });
                    self.schedule_restart(ctx);
                }
                GameEvent::PowerupCollected { kind, slot } => {
                    debug!("[Arena] Slot {} collected {:?} powerup", slot, kind);
                    self.broadcast(ServerWsMessage::PowerupCollected { kind, slot });
                }
            }
        }
    }

    /// One simulation step plus the unconditional snapshot broadcast.
    fn tick(&mut self, ctx: &mut Context<Self>) {
        let now = self.now_ms();
        let events = self.state.tick(now);
        self.dispatch_events(events, ctx);
        self.broadcast(ServerWsMessage::State(Snapshot::capture(&self.state, now)));
    }

    fn start_loop(&mut self, ctx: &mut Context<Self>) {
        if self.tick_timer.is_some() {
            return;
        }
        let handle = ctx.run_interval(Duration::from_millis(TICK_INTERVAL_MS), |act, ctx| {
            act.tick(ctx);
        });
        self.tick_timer = Some(handle);
        info!("[Arena] Simulation loop started");
    }

    /// Stop ticking and drop any pending restart.
    fn halt_loop(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.tick_timer.take() {
            ctx.cancel_future(handle);
        }
        if let Some(handle) = self.restart_timer.take() {
            ctx.cancel_future(handle);
        }
        info!("[Arena] Simulation loop halted");
    }

    /// Start a fresh round and make sure the loop is running.
    fn begin_round(&mut self, ctx: &mut Context<Self>) {
        info!("[Arena] Round starting");
        self.state.start_round();
        let events = self.state.drain_events();
        self.dispatch_events(events, ctx);
        self.start_loop(ctx);
    }

    /// Schedule the deferred restart after a round ends.
    ///
    /// At fire time occupancy is re-checked: with a slot empty the restart
    /// is skipped silently and the next join picks it up instead.
    fn schedule_restart(&mut self, ctx: &mut Context<Self>) {
        if self.restart_timer.is_some() {
            return;
        }
        let handle = ctx.run_later(Duration::from_millis(RESTART_DELAY_MS), |act, ctx| {
            act.restart_timer = None;
            if act.slot_count() >= MAX_PLAYERS {
                act.begin_round(ctx);
            } else {
                debug!("[Arena] Restart skipped, a slot is empty");
            }
        });
        self.restart_timer = Some(handle);
    }

    /// Whether a just-completed join should start (or restart) the round.
    ///
    /// Covers the first fill of a fresh or halted arena, and the recovery
    /// case where the deferred restart fired while a slot sat empty: the
    /// join that refills the arena restarts play immediately.
    fn should_begin_round(&self) -> bool {
        if self.slot_count() < MAX_PLAYERS {
            return false;
        }
        self.tick_timer.is_none()
            || (self.state.phase == RoundPhase::Over && self.restart_timer.is_none())
    }
}

impl Actor for ArenaServer {
    type Context = Context<Self>;
}

impl Handler<Connect> for ArenaServer {
    type Result = ();

    fn handle(&mut self, msg: Connect, ctx: &mut Context<Self>) -> Self::Result {
        let slot = self.free_slot();
        match slot {
            Some(slot) => {
                msg.addr.do_send(ServerWsMessage::init(
                    msg.conn_id,
                    slot,
                    GRID_COLS,
                    GRID_ROWS,
                    TILE_SIZE,
                ));
                self.state.add_player(msg.conn_id, slot, msg.name.clone());
                info!("[Arena] {} joined as slot {}", msg.name, slot);
            }
            None => {
                msg.addr.do_send(ServerWsMessage::Spectator);
                info!("[Arena] {} joined as spectator", msg.name);
            }
        }
        self.connections.insert(
            msg.conn_id,
            Connection {
                name: msg.name,
                slot,
                addr: msg.addr,
            },
        );
        self.broadcast(ServerWsMessage::scores(self.state.scores));

        if self.should_begin_round() {
            self.begin_round(ctx);
        }
    }
}

impl Handler<Disconnect> for ArenaServer {
    type Result = ();

    fn handle(&mut self, msg: Disconnect, ctx: &mut Context<Self>) -> Self::Result {
        let Some(conn) = self.connections.remove(&msg.conn_id) else {
            return;
        };
        match conn.slot {
            Some(slot) => {
                self.state.remove_player(msg.conn_id);
                info!("[Arena] {} left slot {}", conn.name, slot);
                if self.slot_count() == 0 {
                    self.halt_loop(ctx);
                }
            }
            None => {
                debug!("[Arena] Spectator {} left", conn.name);
            }
        }
    }
}

impl Handler<ClientInput> for ArenaServer {
    type Result = ();

    fn handle(&mut self, msg: ClientInput, _: &mut Context<Self>) -> Self::Result {
        // Unknown ids and spectators fall through as no-ops.
        self.state.submit_input(msg.conn_id, msg.input);
    }
}

impl Handler<GetStatus> for ArenaServer {
    type Result = MessageResult<GetStatus>;

    fn handle(&mut self, _: GetStatus, _: &mut Context<Self>) -> Self::Result {
        MessageResult(StatusReport {
            players: self.slot_count(),
            spectators: self.connections.len() - self.slot_count(),
            phase: self.state.phase,
            scores: self.state.scores,
        })
    }
}
