//! AES (Rijndael) block cipher primitive
//!
//! This module implements the Advanced Encryption Standard block cipher as
//! specified in FIPS 197, packaged as a [`CipherPrimitive`] whose expanded
//! key schedule lives in the engine-owned user region.
//!
//! Keys of any length up to 32 bytes are accepted; shorter keys are
//! zero-padded to the next AES key size (16, 24 or 32 bytes).
//!
//! ## Constant-Time Guarantees
//!
//! This implementation mitigates timing side-channel attacks by:
//! - Using branchless arithmetic for GF(2^8) operations
//! - Using bitsliced S-box implementations instead of table lookups
//! - Ensuring consistent memory access patterns

use zeroize::Zeroize;

use api::{
    validate, CipherKind, CipherMetadata, CipherPrimitive, Error, Result,
};
use common::barrier;
use internal::endian::{u32_from_be_bytes, u32_into_be_bytes};
use params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE, AES_USER_SIZE,
};

/// Round constants for AES key expansion
const RCON: [u32; 11] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000,
    0x10000000, 0x20000000, 0x40000000, 0x80000000, 0x1b000000, 0x36000000,
];

/// Offset of the key schedule inside the user region
const SCHEDULE_OFFSET: usize = 4;

/// Multiply two bytes in GF(2⁸) with AES's reduction poly x⁸ + x⁴ + x³ + x + 1
#[inline(always)]
fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        // mask = 0xFF if b&1==1 else 0x00
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a & 0x80;
        a <<= 1;
        a ^= ((hi != 0) as u8) * 0x1B;
        b >>= 1;
    }
    p
}

/// Raise to the 254th power (b⁻¹ in GF(2⁸)) in constant time
#[inline(always)]
fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    y = gf_mul(y, x2);

    // zero maps to zero
    let mask = ((x != 0) as u8).wrapping_neg();
    y & mask
}

/// AES forward S-box: inv(x) ⊕ ROTL(inv(x),1–4) ⊕ 0x63
#[inline(always)]
fn sbox(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

/// AES inverse S-box: undo affine then invert
#[inline(always)]
fn inv_sbox(x: u8) -> u8 {
    let y = x ^ 0x63;
    let u = y.rotate_left(1) ^ y.rotate_left(3) ^ y.rotate_left(6);
    gf_inv(u)
}

/// Substitutes each byte in a word using the S-box
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let b = word.to_be_bytes();
    u32::from_be_bytes([sbox(b[0]), sbox(b[1]), sbox(b[2]), sbox(b[3])])
}

/// Multiply by 2 in GF(2^8)
#[inline(always)]
fn mul2(byte: u8) -> u8 {
    let high = byte >> 7;
    (byte << 1) ^ (high * 0x1B)
}

#[inline(always)]
fn mul14(b: u8) -> u8 { mul2(mul2(mul2(b))) ^ mul2(mul2(b)) ^ mul2(b) }
#[inline(always)]
fn mul13(b: u8) -> u8 { mul2(mul2(mul2(b))) ^ mul2(mul2(b)) ^ b }
#[inline(always)]
fn mul11(b: u8) -> u8 { mul2(mul2(mul2(b))) ^ mul2(b) ^ b }
#[inline(always)]
fn mul9(b: u8) -> u8 { mul2(mul2(mul2(b))) ^ b }

fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
    barrier::compiler_fence_seq_cst();
}

fn inv_sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
    barrier::compiler_fence_seq_cst();
}

fn shift_rows(state: &mut [u8; 16]) {
    let t = *state;
    for c in 0..4 {
        for r in 0..4 {
            state[c * 4 + r] = t[((c + r) % 4) * 4 + r];
        }
    }
}

fn inv_shift_rows(state: &mut [u8; 16]) {
    let t = *state;
    for c in 0..4 {
        for r in 0..4 {
            state[((c + r) % 4) * 4 + r] = t[c * 4 + r];
        }
    }
}

fn mix_columns(state: &mut [u8; 16]) {
    for c in 0..4 {
        let i = c * 4;
        let (s0, s1, s2, s3) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        state[i] = mul2(s0) ^ mul2(s1) ^ s1 ^ s2 ^ s3;
        state[i + 1] = s0 ^ mul2(s1) ^ mul2(s2) ^ s2 ^ s3;
        state[i + 2] = s0 ^ s1 ^ mul2(s2) ^ mul2(s3) ^ s3;
        state[i + 3] = mul2(s0) ^ s0 ^ s1 ^ s2 ^ mul2(s3);
    }
}

fn inv_mix_columns(state: &mut [u8; 16]) {
    for c in 0..4 {
        let i = c * 4;
        let (s0, s1, s2, s3) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        state[i] = mul14(s0) ^ mul11(s1) ^ mul13(s2) ^ mul9(s3);
        state[i + 1] = mul9(s0) ^ mul14(s1) ^ mul11(s2) ^ mul13(s3);
        state[i + 2] = mul13(s0) ^ mul9(s1) ^ mul14(s2) ^ mul11(s3);
        state[i + 3] = mul11(s0) ^ mul13(s1) ^ mul9(s2) ^ mul14(s3);
    }
}

#[inline(always)]
fn add_round_key(state: &mut [u8; 16], round_key: &[u8]) {
    for (s, k) in state.iter_mut().zip(round_key) {
        *s ^= *k;
    }
}

/// AES key size a raw key of `len` bytes is padded to
fn padded_key_size(len: usize) -> usize {
    if len <= AES128_KEY_SIZE {
        AES128_KEY_SIZE
    } else if len <= AES192_KEY_SIZE {
        AES192_KEY_SIZE
    } else {
        AES256_KEY_SIZE
    }
}

/// AES (Rijndael with a 128-bit block) primitive
///
/// User region layout: big-endian round count, then the expanded schedule.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aes;

impl Aes {
    /// Split the user region into round count and schedule, rejecting a
    /// region that holds no key
    fn schedule(user: &[u8]) -> Result<(usize, &[u8])> {
        validate::length("AES user state", user.len(), AES_USER_SIZE)?;
        let rounds = u32_from_be_bytes(user) as usize;
        validate::parameter(
            matches!(rounds, 10 | 12 | 14),
            "AES",
            "no key schedule installed",
        )?;
        let len = 16 * (rounds + 1);
        Ok((rounds, &user[SCHEDULE_OFFSET..SCHEDULE_OFFSET + len]))
    }

    fn encrypt_block(block: &mut [u8], rounds: usize, rk: &[u8]) {
        let mut state = [0u8; 16];
        state.copy_from_slice(block);

        add_round_key(&mut state, &rk[0..16]);
        for round in 1..rounds {
            sub_bytes(&mut state);
            shift_rows(&mut state);
            mix_columns(&mut state);
            add_round_key(&mut state, &rk[round * 16..round * 16 + 16]);
        }
        sub_bytes(&mut state);
        shift_rows(&mut state);
        add_round_key(&mut state, &rk[rounds * 16..rounds * 16 + 16]);

        block.copy_from_slice(&state);
        state.zeroize();
    }

    fn decrypt_block(block: &mut [u8], rounds: usize, rk: &[u8]) {
        let mut state = [0u8; 16];
        state.copy_from_slice(block);

        add_round_key(&mut state, &rk[rounds * 16..rounds * 16 + 16]);
        for round in (1..rounds).rev() {
            inv_shift_rows(&mut state);
            inv_sub_bytes(&mut state);
            add_round_key(&mut state, &rk[round * 16..round * 16 + 16]);
            inv_mix_columns(&mut state);
        }
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, &rk[0..16]);

        block.copy_from_slice(&state);
        state.zeroize();
    }
}

impl CipherPrimitive for Aes {
    fn name(&self) -> &'static str {
        "AES"
    }

    fn metadata(&self) -> Result<CipherMetadata> {
        Ok(CipherMetadata {
            key_size: AES256_KEY_SIZE,
            block_size: AES_BLOCK_SIZE,
            buffer_size: AES_BLOCK_SIZE,
            user_size: AES_USER_SIZE,
            user_must_be_saved: false,
            kind: CipherKind::BLOCK | CipherKind::SYMMETRIC,
        })
    }

    fn key_setup(&self, user: &mut [u8], key: &[u8]) -> Result<()> {
        validate::length("AES user state", user.len(), AES_USER_SIZE)?;
        if key.len() > AES256_KEY_SIZE {
            return Err(Error::KeyTooLarge {
                max: AES256_KEY_SIZE,
                actual: key.len(),
            });
        }

        let mut padded = [0u8; AES256_KEY_SIZE];
        padded[..key.len()].copy_from_slice(key);
        let nk = padded_key_size(key.len()) / 4;
        let rounds = nk + 6;
        let total = 4 * (rounds + 1);

        let mut words = [0u32; 60];
        for (i, word) in words.iter_mut().take(nk).enumerate() {
            *word = u32_from_be_bytes(&padded[i * 4..]);
        }
        for i in nk..total {
            let mut temp = words[i - 1];
            if i % nk == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ RCON[i / nk];
            } else if nk > 6 && i % nk == 4 {
                temp = sub_word(temp);
            }
            words[i] = words[i - nk] ^ temp;
        }

        u32_into_be_bytes(rounds as u32, user);
        let schedule = &mut user[SCHEDULE_OFFSET..];
        for (i, word) in words.iter().take(total).enumerate() {
            u32_into_be_bytes(*word, &mut schedule[i * 4..]);
        }

        padded.zeroize();
        words.zeroize();
        Ok(())
    }

    fn encode(&self, user: &mut [u8], data: &mut [u8]) -> Result<()> {
        validate::multiple_of("AES input", data.len(), AES_BLOCK_SIZE)?;
        let (rounds, rk) = Self::schedule(user)?;
        for block in data.chunks_exact_mut(AES_BLOCK_SIZE) {
            Self::encrypt_block(block, rounds, rk);
        }
        Ok(())
    }

    fn decode(&self, user: &mut [u8], data: &mut [u8]) -> Result<()> {
        validate::multiple_of("AES input", data.len(), AES_BLOCK_SIZE)?;
        let (rounds, rk) = Self::schedule(user)?;
        for block in data.chunks_exact_mut(AES_BLOCK_SIZE) {
            Self::decrypt_block(block, rounds, rk);
        }
        Ok(())
    }
}
