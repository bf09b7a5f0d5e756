//! End-to-end tests through the public engine API

use modecrypt_algorithms::{Base64, Hex};
use modecrypt_api::{CipherState, Error, Mode};
use modecrypt_common::SecretVec;
use modecrypt_params::utils::symmetric::AES_IDENTITY;
use modecrypt_symmetric::{Aes, Cipher, CipherRegistry, Null, Rc4, TextCipher};

#[test]
fn test_aes_ecb_known_answers() {
    // FIPS-197 appendix C
    let cases = [
        (
            "000102030405060708090a0b0c0d0e0f",
            "69c4e0d86a7b0430d8cdb78070b4c55a",
        ),
        (
            "000102030405060708090a0b0c0d0e0f1011121314151617",
            "dda97ca4864cdfe06eaf70a0ec0d7191",
        ),
        (
            "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
            "8ea2b7ca516745bfeafc49904b496089",
        ),
    ];
    let plain = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    for (key, expected) in cases {
        let mut cipher = Cipher::with_mode(Box::new(Aes), Mode::Ecbx).unwrap();
        cipher.init_key(&hex::decode(key).unwrap()).unwrap();
        assert_eq!(hex::encode(cipher.encode(&plain).unwrap()), expected);

        let mut cipher = Cipher::with_mode(Box::new(Aes), Mode::Ecbx).unwrap();
        cipher.init_key(&hex::decode(key).unwrap()).unwrap();
        assert_eq!(
            cipher.decode(&hex::decode(expected).unwrap()).unwrap(),
            plain
        );
    }
}

#[test]
fn test_rc4_keystream_survives_vector_derivation() {
    let cases: [(&[u8], &[u8], &str); 3] = [
        (b"Key", b"Plaintext", "bbf316e8d940af0ad3"),
        (b"Wiki", b"pedia", "1021bf0420"),
        (b"Secret", b"Attack at dawn", "45a01f645fc35b383552544b9bf5"),
    ];
    for (key, plain, expected) in cases {
        let mut cipher = Cipher::with_mode(Box::new(Rc4), Mode::Ecbx).unwrap();
        cipher.init_key(key).unwrap();
        assert_eq!(cipher.encode_bytes(plain, Some(&Hex)).unwrap(), expected.as_bytes());
    }
}

#[test]
fn test_aes_cbc_through_engine() {
    // SP 800-38A F.2.1
    let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    let iv = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let plain = hex::decode(concat!(
        "6bc1bee22e409f96e93d7e117393172a",
        "ae2d8a571e03ac9c9eb76fac45af8e51",
        "30c81c46a35ce411e5fbc1191a0a52ef",
        "f69f2445df4f9b17ad2b417be66c3710",
    ))
    .unwrap();

    let mut cipher = Cipher::with_mode(Box::new(Aes), Mode::Cbcx).unwrap();
    cipher.init(&key, &iv, 0xFF).unwrap();
    let sealed = cipher.encode(&plain).unwrap();
    assert_eq!(
        hex::encode(&sealed[48..]),
        "3ff1caa1681fac09120eca307586e1a7"
    );
    assert_eq!(cipher.state(), CipherState::Encoding);
    assert_eq!(cipher.feedback(), &sealed[48..]);
}

#[test]
fn test_registry_driven_session() {
    let registry = CipherRegistry::with_defaults();
    let mut enc = registry.create_by_identity(AES_IDENTITY).unwrap();
    enc.set_mode(Mode::Cfs8).unwrap();
    enc.init_key(b"registry key").unwrap();
    let sealed = enc.encode_bytes(b"looked up by identity", Some(&Base64)).unwrap();
    let tag = enc.calc_mac(Some(&Hex)).unwrap();

    let mut dec = registry.create_by_name("aes").unwrap();
    dec.set_mode(Mode::Cfs8).unwrap();
    dec.init_key(b"registry key").unwrap();
    assert_eq!(
        dec.decode_bytes(&sealed, Some(&Base64)).unwrap(),
        b"looked up by identity"
    );
    assert_eq!(dec.calc_mac(Some(&Hex)).unwrap(), tag);

    registry.clear();
    assert!(matches!(
        registry.create_by_name("AES"),
        Err(Error::UnregisteredType { .. })
    ));
}

#[test]
fn test_full_lifecycle() {
    let mut cipher = Cipher::new(Box::new(Aes)).unwrap();
    assert_eq!(cipher.state(), CipherState::New);

    let key = SecretVec::from_slice(b"lifecycle key");
    cipher.init_secret(&key, None).unwrap();
    assert_eq!(cipher.state(), CipherState::Initialized);

    let first = cipher.encode(&[0x11; 32]).unwrap();
    assert_eq!(cipher.state(), CipherState::Encoding);
    cipher.encode(&[0x22; 5]).unwrap();
    assert_eq!(cipher.state(), CipherState::Padded);

    let tag = cipher.calc_mac(None).unwrap();
    assert_eq!(cipher.state(), CipherState::Done);
    assert_eq!(tag, cipher.buffer());

    // a finished session starts over from the same vector
    assert_eq!(cipher.encode(&[0x11; 32]).unwrap(), first);

    cipher.protect();
    assert_eq!(cipher.state(), CipherState::New);
    assert!(matches!(
        cipher.decode(&first),
        Err(Error::InvalidState { .. })
    ));
}

#[test]
fn test_text_sessions() {
    let mut enc = Cipher::with_mode(Box::new(Rc4), Mode::Ofb8).unwrap();
    enc.init(b"words", b"salt", 0x00).unwrap();
    let sealed = enc.encode_wide("wide text ✓", Some(&Hex)).unwrap();

    let mut dec = Cipher::with_mode(Box::new(Rc4), Mode::Ofb8).unwrap();
    dec.init(b"words", b"salt", 0x00).unwrap();
    assert_eq!(dec.decode_wide(&sealed, Some(&Hex)).unwrap(), "wide text ✓");
}

#[test]
fn test_null_cipher_pass_through() {
    let mut cipher = Cipher::with_mode(Box::new(Null), Mode::Ecbx).unwrap();
    cipher.init(&[0u8; 1000], &[], 0xFF).unwrap();
    assert_eq!(cipher.encode_str("as is", None).unwrap(), b"as is");
    assert_eq!(
        cipher.calc_mac(None).unwrap_err(),
        Error::InvalidMacMode { mode: Mode::Ecbx }
    );
    assert_eq!(cipher.state(), CipherState::Done);
}
