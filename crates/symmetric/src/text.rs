//! Text adapters over the byte API
//!
//! Narrow text travels as UTF-8, wide text as UTF-16LE. Both forward to
//! [`Cipher::encode_bytes`] and [`Cipher::decode_bytes`] and add no chaining
//! of their own.

use api::{Error, Format, Result};

use crate::Cipher;

/// String-typed entry points for [`Cipher`]
pub trait TextCipher {
    /// Encrypt the UTF-8 bytes of `text`
    fn encode_str(&mut self, text: &str, format: Option<&dyn Format>) -> Result<Vec<u8>>;

    /// Decrypt and interpret the result as UTF-8
    fn decode_str(&mut self, data: &[u8], format: Option<&dyn Format>) -> Result<String>;

    /// Encrypt the UTF-16LE encoding of `text`
    fn encode_wide(&mut self, text: &str, format: Option<&dyn Format>) -> Result<Vec<u8>>;

    /// Decrypt and interpret the result as UTF-16LE
    fn decode_wide(&mut self, data: &[u8], format: Option<&dyn Format>) -> Result<String>;
}

impl TextCipher for Cipher {
    fn encode_str(&mut self, text: &str, format: Option<&dyn Format>) -> Result<Vec<u8>> {
        self.encode_bytes(text.as_bytes(), format)
    }

    fn decode_str(&mut self, data: &[u8], format: Option<&dyn Format>) -> Result<String> {
        let plain = self.decode_bytes(data, format)?;
        String::from_utf8(plain).map_err(|e| Error::format("UTF-8 text", e.to_string()))
    }

    fn encode_wide(&mut self, text: &str, format: Option<&dyn Format>) -> Result<Vec<u8>> {
        let wide: Vec<u8> = text.encode_utf16().flat_map(u16::to_le_bytes).collect();
        self.encode_bytes(&wide, format)
    }

    fn decode_wide(&mut self, data: &[u8], format: Option<&dyn Format>) -> Result<String> {
        let plain = self.decode_bytes(data, format)?;
        if plain.len() % 2 != 0 {
            return Err(Error::format(
                "UTF-16LE text",
                format!("odd byte count {}", plain.len()),
            ));
        }
        let units: Vec<u16> = plain
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16(&units).map_err(|e| Error::format("UTF-16LE text", e.to_string()))
    }
}
