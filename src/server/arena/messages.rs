use actix::prelude::*;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::game::snapshot::Snapshot;
use crate::game::types::{InputState, PowerupKind, RoundPhase, Scores, Winner};

// Client -> server payloads.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "action", content = "data")]
pub enum ClientWsMessage {
    Input(InputState),
    Ping,
}

// Server -> client payloads.
#[derive(Message, Serialize, Deserialize, Clone, Debug)]
#[rtype(result = "()")]
#[serde(tag = "action", content = "data")]
pub enum ServerWsMessage {
    Init {
        player_id: Uuid,
        slot: u8,
        cols: usize,
        rows: usize,
        tile: u32,
    },
    Spectator,
    Scores {
        scores: Scores,
    },
    RoundStarted,
    State(Snapshot),
    PlayerDied {
        player_id: Uuid,
        slot: u8,
    },
    RoundEnded {
        winner: Winner,
        scores: Scores,
    },
    PowerupCollected {
        kind: PowerupKind,
        slot: u8,
    },
    Error {
        code: String,
        message: String,
    },
}

impl ServerWsMessage {
    pub fn init(player_id: Uuid, slot: u8, cols: usize, rows: usize, tile: u32) -> Self {
        Self::Init {
            player_id,
            slot,
            cols,
            rows,
            tile,
        }
    }
    pub fn scores(scores: Scores) -> Self {
        Self::Scores { scores }
    }
    pub fn error(code: &str, message: &str) -> Self {
        Self::Error {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

/// Session registration, sent when a WebSocket connection opens.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Connect {
    pub conn_id: Uuid,
    pub name: String,
    pub addr: Recipient<ServerWsMessage>,
}

/// Session teardown, sent when a WebSocket connection closes.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub conn_id: Uuid,
}

/// Input intent relayed from a session to the arena.
#[derive(Message)]
#[rtype(result = "()")]
pub struct ClientInput {
    pub conn_id: Uuid,
    pub input: InputState,
}

/// Request for the operator status report.
#[derive(Message)]
#[rtype(result = "StatusReport")]
pub struct GetStatus;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StatusReport {
    pub players: usize,
    pub spectators: usize,
    pub phase: RoundPhase,
    pub scores: Scores,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::ws_error::ws_error_message;

    #[test]
    fn test_input_deserializes_with_missing_fields() {
        let msg: ClientWsMessage =
            serde_json::from_str(r#"{"action":"Input","data":{"up":true}}"#).unwrap();
        match msg {
            ClientWsMessage::Input(input) => {
                assert!(input.up);
                assert!(!input.down);
                assert!(!input.bomb);
            }
            _ => panic!("expected Input"),
        }
    }

    #[test]
    fn test_ping_is_bare_action() {
        let msg: ClientWsMessage = serde_json::from_str(r#"{"action":"Ping"}"#).unwrap();
        assert!(matches!(msg, ClientWsMessage::Ping));
    }

    #[test]
    fn test_unit_variant_serializes_without_data() {
        let text = serde_json::to_string(&ServerWsMessage::Spectator).unwrap();
        assert_eq!(text, r#"{"action":"Spectator"}"#);
    }

    #[test]
    fn test_error_variant_matches_helper_shape() {
        let from_enum =
            serde_json::to_string(&ServerWsMessage::error("BAD", "nope")).unwrap();
        assert_eq!(from_enum, ws_error_message("BAD", "nope"));
    }

    #[test]
    fn test_init_carries_arena_dimensions() {
        let msg = ServerWsMessage::init(Uuid::nil(), 1, 15, 13, 48);
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&msg).unwrap()).unwrap();
        assert_eq!(value["action"], "Init");
        assert_eq!(value["data"]["slot"], 1);
        assert_eq!(value["data"]["cols"], 15);
        assert_eq!(value["data"]["tile"], 48);
    }
}
