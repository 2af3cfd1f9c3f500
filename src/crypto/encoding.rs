//! Transport encoding (standard, padded base64).

use base64::{engine::general_purpose::STANDARD, Engine};

/// Encode bytes for text transit.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a transport-encoded string.
///
/// Returns `None` on any alphabet or padding error; callers map that to the
/// error kind their layout defines.
pub fn decode(text: &str) -> Option<Vec<u8>> {
    STANDARD.decode(text).ok()
}
