//! Constants for symmetric cipher primitives and the mode engine

/// Byte used to fill the initialization vector before the caller's IV is
/// copied in (or before it is self-derived)
pub const DEFAULT_FILLER: u8 = 0xFF;

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Longest AES key schedule (AES-256: 15 round keys of 16 bytes)
pub const AES_MAX_SCHEDULE_SIZE: usize = 240;

/// AES private state: 4-byte round count followed by the key schedule
pub const AES_USER_SIZE: usize = 4 + AES_MAX_SCHEDULE_SIZE;

/// RC4 maximum key size in bytes
pub const RC4_KEY_SIZE: usize = 256;

/// RC4 feedback register size used by the mode engine
pub const RC4_BUFFER_SIZE: usize = 16;

/// RC4 private state: 256-byte permutation plus the i and j indices
pub const RC4_USER_SIZE: usize = 258;

/// Register size of the pass-through cipher
pub const NULL_BUFFER_SIZE: usize = 32;

/// Registry identity of the pass-through cipher
pub const NULL_IDENTITY: u32 = 0x4E55_4C4C;

/// Registry identity of AES
pub const AES_IDENTITY: u32 = 0x4145_5300;

/// Registry identity of RC4
pub const RC4_IDENTITY: u32 = 0x5243_3400;
