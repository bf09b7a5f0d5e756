//! Endianness utility functions

/// Read a big-endian u32 from the first four bytes of `bytes`
#[inline(always)]
pub fn u32_from_be_bytes(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Write `value` big-endian into the first four bytes of `out`
#[inline(always)]
pub fn u32_into_be_bytes(value: u32, out: &mut [u8]) {
    out[..4].copy_from_slice(&value.to_be_bytes());
}
