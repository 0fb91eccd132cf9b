/// Centralized helper for WebSocket error responses.
///
/// Use this helper to ensure all error messages are consistent, explicit, and include a code.
/// The output matches the serialized shape of the protocol's `Error` variant.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "INVALID_MESSAGE").
/// - `message`: Human-readable error message (in English).
pub fn ws_error_message(code: &str, message: &str) -> String {
    format!(
        r#"{{"action":"Error","data":{{"code":"{}","message":"{}"}}}}"#,
        code, message
    )
}
