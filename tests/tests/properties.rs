//! Property-based tests for the cipher engine

use modecrypt_api::{CipherState, Mode};
use modecrypt_tests::fixtures::{chaining_modes, fit_to_mode, keyed, primitives};
use proptest::prelude::*;

fn key() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..=16)
}

fn vector() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=16)
}

fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=200)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn decode_inverts_encode(key in key(), iv in vector(), data in message()) {
        for (name, primitive) in primitives() {
            for mode in Mode::ALL {
                let mut enc = keyed(primitive, mode, &key, &iv);
                let data = fit_to_mode(data.clone(), mode, enc.metadata().block_size);
                let sealed = enc.encode(&data).unwrap();
                prop_assert_eq!(sealed.len(), data.len());

                let mut dec = keyed(primitive, mode, &key, &iv);
                let opened = dec.decode(&sealed).unwrap();
                prop_assert_eq!(&opened, &data, "{} {}", name, mode);
            }
        }
    }

    #[test]
    fn mac_is_symmetric(key in key(), iv in vector(), data in message()) {
        for (name, primitive) in primitives() {
            for mode in chaining_modes() {
                let mut enc = keyed(primitive, mode, &key, &iv);
                let sealed = enc.encode(&data).unwrap();
                let tag = enc.calc_mac(None).unwrap();

                let mut dec = keyed(primitive, mode, &key, &iv);
                dec.decode(&sealed).unwrap();
                prop_assert_eq!(dec.calc_mac(None).unwrap(), tag, "{} {}", name, mode);
            }
        }
    }

    #[test]
    fn split_calls_chain_like_one(
        key in key(),
        data in message(),
        cut in any::<prop::sample::Index>(),
    ) {
        let at = cut.index(data.len() + 1);
        let streaming = [Mode::Cfb8, Mode::Cfbx, Mode::Ofb8, Mode::Ofbx, Mode::Cfs8, Mode::Cfsx];
        for (name, primitive) in primitives() {
            for mode in streaming {
                let whole = keyed(primitive, mode, &key, &[]).encode(&data).unwrap();

                let mut split = keyed(primitive, mode, &key, &[]);
                let mut pieces = split.encode(&data[..at]).unwrap();
                pieces.extend(split.encode(&data[at..]).unwrap());
                prop_assert_eq!(&pieces, &whole, "{} {}", name, mode);
            }
        }
    }

    #[test]
    fn derived_vector_is_deterministic(key in key()) {
        for (name, primitive) in primitives() {
            let a = keyed(primitive, Mode::default(), &key, &[]);
            let b = keyed(primitive, Mode::default(), &key, &[]);
            prop_assert_eq!(a.init_vector(), b.init_vector(), "{}", name);
            prop_assert_eq!(a.feedback(), b.feedback(), "{}", name);
        }
    }

    #[test]
    fn protect_leaves_no_residue(key in key(), data in message()) {
        for (_, primitive) in primitives() {
            let mut cipher = keyed(primitive, Mode::Cfsx, &key, &[]);
            cipher.encode(&data).unwrap();
            cipher.done().unwrap();
            cipher.protect();
            prop_assert_eq!(cipher.state(), CipherState::New);
            prop_assert!(cipher.init_vector().iter().all(|&b| b == 0));
            prop_assert!(cipher.feedback().iter().all(|&b| b == 0));
            prop_assert!(cipher.buffer().iter().all(|&b| b == 0));
        }
    }
}
