//! # modecrypt
//!
//! A cipher-mode engine: it turns block and stream cipher primitives into
//! stateful, mode-aware encryption objects with key and vector setup,
//! chained feedback, finalization, MAC extraction and erasure of key
//! material.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! modecrypt = "0.3"
//! ```
//!
//! ```
//! use modecrypt::prelude::*;
//!
//! let registry = CipherRegistry::with_defaults();
//! let mut cipher = registry.create_by_name("AES")?;
//! cipher.set_mode(Mode::Cfb8)?;
//! cipher.init_key(b"correct horse")?;
//! let sealed = cipher.encode_bytes(b"attack at dawn", Some(&Hex))?;
//! assert_eq!(sealed.len(), 28);
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Features
//!
//! - `symmetric` (default): the cipher engine, registry and text adapters
//! - `algorithms`: bundled primitives (Null, AES, RC4) and formatters
//! - `serde`: `Serialize`/`Deserialize` for the data-model types
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`modecrypt-api`]: Error taxonomy, capability traits, data-model types
//! - [`modecrypt-common`]: Zeroizing secret storage and memory barriers
//! - [`modecrypt-algorithms`]: Cipher primitives and output formatters
//! - [`modecrypt-symmetric`]: The mode-aware cipher engine

// Core re-exports (always available)
pub use modecrypt_api as api;
pub use modecrypt_common as common;
pub use modecrypt_internal as internal;
pub use modecrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use modecrypt_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use modecrypt_symmetric as symmetric;

/// Common imports for modecrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits and data-model types
    pub use crate::api::{CipherKind, CipherMetadata, CipherPrimitive, CipherState, Format, Mode};

    // Re-export security types
    pub use crate::common::SecretVec;
    pub use zeroize::Zeroize;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{Aes, Base64, Hex, HexUpper, Null, Plain, Rc4};

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{Cipher, CipherFactory, CipherRegistry, TextCipher};
}
