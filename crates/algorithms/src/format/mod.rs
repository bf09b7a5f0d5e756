//! Output formats
//!
//! Reversible encodings applied to ciphertext and MAC output at the engine
//! boundary.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use api::{Error, Format, Result};

/// Identity format
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

/// Lower-case hexadecimal; decoding accepts either case
#[derive(Debug, Clone, Copy, Default)]
pub struct Hex;

/// Upper-case hexadecimal; decoding accepts either case
#[derive(Debug, Clone, Copy, Default)]
pub struct HexUpper;

/// Standard, padded base64
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64;

impl Format for Plain {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(data.to_vec())
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(data.to_vec())
    }
}

fn hex_decode(data: &[u8]) -> Result<Vec<u8>> {
    hex::decode(data).map_err(|e| Error::format("hex", e.to_string()))
}

impl Format for Hex {
    fn name(&self) -> &'static str {
        "hex"
    }

    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(hex::encode(data).into_bytes())
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        hex_decode(data)
    }
}

impl Format for HexUpper {
    fn name(&self) -> &'static str {
        "HEX"
    }

    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(hex::encode_upper(data).into_bytes())
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        hex_decode(data)
    }
}

impl Format for Base64 {
    fn name(&self) -> &'static str {
        "base64"
    }

    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(STANDARD.encode(data).into_bytes())
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        STANDARD
            .decode(data)
            .map_err(|e| Error::format("base64", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Hex.encode(&[0xde, 0xad, 0xbe, 0xef]).unwrap(), b"deadbeef");
        assert_eq!(HexUpper.encode(&[0xde, 0xad]).unwrap(), b"DEAD");
        assert_eq!(Hex.decode(b"DEADbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert!(matches!(Hex.decode(b"abc"), Err(Error::Format { .. })));
        assert!(matches!(HexUpper.decode(b"zz"), Err(Error::Format { .. })));
    }

    #[test]
    fn test_base64() {
        assert_eq!(Base64.encode(b"modecrypt").unwrap(), b"bW9kZWNyeXB0");
        assert_eq!(Base64.decode(b"bW9kZWNyeXB0").unwrap(), b"modecrypt");
        assert!(matches!(Base64.decode(b"!!!"), Err(Error::Format { .. })));
    }

    #[test]
    fn test_plain() {
        assert_eq!(Plain.encode(b"raw").unwrap(), b"raw");
        assert_eq!(Plain.decode(b"raw").unwrap(), b"raw");
    }
}
