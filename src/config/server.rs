/// Server configuration constants.
///
/// This module defines network-facing defaults for the HTTP/WebSocket listener.
pub const DEFAULT_PORT: u16 = 3456; // Used when the PORT environment variable is unset.
