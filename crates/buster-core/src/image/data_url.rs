//! Data URL helpers (`data:<mime>;base64,<payload>`).

/// Return the base64 payload, dropping everything up to the first comma.
pub fn strip_prefix(data: &str) -> &str {
    match data.split_once(',') {
        Some((_, payload)) => payload,
        None => data,
    }
}
