use uuid::Uuid;

use crate::config::game::BOMB_FUSE_MS;
use crate::game::types::Position;

/// A planted bomb.
///
/// The blast radius is captured at placement, so powerups collected while
/// the fuse burns do not change it. A blast reaching this cell pulls the
/// fuse deadline down to the current tick (chain ignition).
#[derive(Debug, Clone)]
pub struct Bomb {
    pub pos: Position,
    pub owner: Uuid,
    pub radius: u8,
    pub planted_at: u64,
    pub fuse_deadline: u64,
}

impl Bomb {
    pub fn new(pos: Position, owner: Uuid, radius: u8, now: u64) -> Self {
        Bomb {
            pos,
            owner,
            radius,
            planted_at: now,
            fuse_deadline: now + BOMB_FUSE_MS,
        }
    }

    /// Whether the fuse has elapsed at `now`.
    pub fn is_due(&self, now: u64) -> bool {
        now >= self.fuse_deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuse_runs_full_length() {
        let bomb = Bomb::new(Position { x: 1, y: 1 }, Uuid::new_v4(), 2, 1000);
        assert!(!bomb.is_due(1000));
        assert!(!bomb.is_due(1000 + BOMB_FUSE_MS - 1));
        assert!(bomb.is_due(1000 + BOMB_FUSE_MS));
    }

    #[test]
    fn test_forced_fuse_is_due_immediately() {
        let mut bomb = Bomb::new(Position { x: 1, y: 1 }, Uuid::new_v4(), 2, 1000);
        bomb.fuse_deadline = bomb.fuse_deadline.min(1500);
        assert!(bomb.is_due(1500));
    }
}
