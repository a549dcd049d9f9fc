//! Display-id codec for shortening canonical UUIDs in URLs.
//!
//! A display id is the URL-safe base64 encoding (no padding) of the UUID's
//! 16 raw bytes, always 22 characters. The decode path rejects wrong
//! lengths, non-alphabet characters, and non-canonical trailing bits, so
//! every valid display id maps back to exactly one UUID and malformed
//! input always fails instead of producing a colliding id.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use uuid::Uuid;

/// Length of every encoded display id: 16 bytes -> 22 base64 characters.
pub const DISPLAY_ID_LEN: usize = 22;

#[derive(Debug, thiserror::Error)]
pub enum ShortIdError {
    #[error("display id must be {DISPLAY_ID_LEN} characters, got {0}")]
    InvalidLength(usize),

    #[error("display id is not valid url-safe base64: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    #[error("decoded display id is not a valid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}

/// Encode a canonical id into its URL-facing display form.
pub fn encode(id: Uuid) -> String {
    URL_SAFE_NO_PAD.encode(id.as_bytes())
}

/// Decode a display id back into the canonical UUID.
///
/// Callers translate any [`ShortIdError`] into a not-found response; the
/// store must never be queried with a value derived from malformed input.
pub fn decode(display_id: &str) -> Result<Uuid, ShortIdError> {
    if display_id.len() != DISPLAY_ID_LEN {
        return Err(ShortIdError::InvalidLength(display_id.len()));
    }
    let bytes = URL_SAFE_NO_PAD.decode(display_id.as_bytes())?;
    Ok(Uuid::from_slice(&bytes)?)
}
