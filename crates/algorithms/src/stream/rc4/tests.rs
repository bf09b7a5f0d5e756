use super::*;

fn encrypt(key: &[u8], plaintext: &[u8]) -> Vec<u8> {
    let mut user = vec![0u8; RC4_USER_SIZE];
    Rc4.key_setup(&mut user, key).unwrap();
    let mut data = plaintext.to_vec();
    Rc4.encode(&mut user, &mut data).unwrap();
    data
}

#[test]
fn test_rc4_known_answers() {
    assert_eq!(hex::encode_upper(encrypt(b"Key", b"Plaintext")), "BBF316E8D940AF0AD3");
    assert_eq!(hex::encode_upper(encrypt(b"Wiki", b"pedia")), "1021BF0420");
    assert_eq!(
        hex::encode_upper(encrypt(b"Secret", b"Attack at dawn")),
        "45A01F645FC35B383552544B9BF5"
    );
}

#[test]
fn test_rc4_keystream_continues_across_calls() {
    let mut user = vec![0u8; RC4_USER_SIZE];
    Rc4.key_setup(&mut user, b"Key").unwrap();
    let mut first = *b"Plain";
    let mut second = *b"text";
    Rc4.encode(&mut user, &mut first).unwrap();
    Rc4.encode(&mut user, &mut second).unwrap();
    let joined: Vec<u8> = first.iter().chain(second.iter()).copied().collect();
    assert_eq!(joined, encrypt(b"Key", b"Plaintext"));
}

#[test]
fn test_rc4_decode_inverts_encode() {
    let ciphertext = encrypt(b"Wiki", b"pedia");
    let mut user = vec![0u8; RC4_USER_SIZE];
    Rc4.key_setup(&mut user, b"Wiki").unwrap();
    let mut data = ciphertext;
    Rc4.decode(&mut user, &mut data).unwrap();
    assert_eq!(&data, b"pedia");
}

#[test]
fn test_rc4_rejects_empty_key() {
    let mut user = vec![0u8; RC4_USER_SIZE];
    assert!(matches!(
        Rc4.key_setup(&mut user, &[]),
        Err(Error::NoKeyMaterial { .. })
    ));
    assert!(matches!(Rc4.check_key(&[]), Err(Error::NoKeyMaterial { .. })));
    assert!(Rc4.check_key(b"k").is_ok());
}
