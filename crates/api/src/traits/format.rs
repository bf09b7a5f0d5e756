//! Output formatting capability

use crate::error::Result;

/// Reversible byte-to-byte output encoding (hex, base64, ...)
///
/// Engine entry points accept `Option<&dyn Format>`; `None` leaves bytes
/// untouched.
pub trait Format: Send + Sync {
    /// Format name
    fn name(&self) -> &'static str;

    /// Encode raw bytes into their formatted representation
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Recover raw bytes from their formatted representation
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Apply an optional formatter's `encode`
pub fn format_encode(format: Option<&dyn Format>, data: Vec<u8>) -> Result<Vec<u8>> {
    match format {
        Some(format) => format.encode(&data),
        None => Ok(data),
    }
}

/// Apply an optional formatter's `decode`
pub fn format_decode(format: Option<&dyn Format>, data: &[u8]) -> Result<Vec<u8>> {
    match format {
        Some(format) => format.decode(data),
        None => Ok(data.to_vec()),
    }
}
