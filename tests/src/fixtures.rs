//! Shared constructors for integration tests and benches

use modecrypt_api::Mode;
use modecrypt_symmetric::{Aes, Cipher, CipherFactory, Null, Rc4};

/// Bundled primitives by name
pub fn primitives() -> Vec<(&'static str, CipherFactory)> {
    let null: CipherFactory = || Box::new(Null);
    let aes: CipherFactory = || Box::new(Aes);
    let rc4: CipherFactory = || Box::new(Rc4);
    vec![("Null", null), ("AES", aes), ("RC4", rc4)]
}

/// Modes that produce a MAC tag
pub fn chaining_modes() -> impl Iterator<Item = Mode> {
    Mode::ALL.into_iter().filter(|mode| mode.has_mac())
}

/// Instance keyed with `key` and `iv`, ready to encode or decode
pub fn keyed(primitive: CipherFactory, mode: Mode, key: &[u8], iv: &[u8]) -> Cipher {
    let mut cipher = Cipher::with_mode(primitive(), mode).expect("primitive supplies metadata");
    cipher
        .init(key, iv, modecrypt_params::DEFAULT_FILLER)
        .expect("key and vector within limits");
    cipher
}

/// Trim `data` so ECB on a block primitive accepts it
pub fn fit_to_mode(mut data: Vec<u8>, mode: Mode, block_size: usize) -> Vec<u8> {
    if mode == Mode::Ecbx && block_size > 1 {
        data.truncate(data.len() - data.len() % block_size);
    }
    data
}
