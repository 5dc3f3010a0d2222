//! Session token generation.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngCore;

/// Bytes of entropy per session token; 32 bytes (256 bits) comfortably
/// exceeds the unguessability floor.
const TOKEN_BYTES: usize = 32;

/// Generate an unguessable, URL-safe session token.
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);

    URL_SAFE_NO_PAD.encode(bytes)
}
