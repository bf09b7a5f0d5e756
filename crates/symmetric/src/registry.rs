//! Directory of cipher primitives by name and numeric identity
//!
//! The registry is an ordinary value: build one at startup, share it (it is
//! `Sync`), and [`clear`](CipherRegistry::clear) it on teardown. Nothing in
//! the engine reaches for a global.

use std::sync::RwLock;

use api::{CipherPrimitive, Error, Result};
use params::utils::symmetric::{AES_IDENTITY, NULL_IDENTITY, RC4_IDENTITY};
use tracing::debug;

use crate::Cipher;

/// Constructor for a boxed primitive
pub type CipherFactory = fn() -> Box<dyn CipherPrimitive>;

#[derive(Clone, Copy)]
struct Entry {
    name: &'static str,
    identity: u32,
    factory: CipherFactory,
}

/// Thread-safe name/identity directory of [`CipherFactory`]s
pub struct CipherRegistry {
    entries: RwLock<Vec<Entry>>,
}

impl CipherRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Registry preloaded with the bundled primitives
    pub fn with_defaults() -> Self {
        let entries = vec![
            Entry {
                name: "Null",
                identity: NULL_IDENTITY,
                factory: || Box::new(algorithms::Null),
            },
            Entry {
                name: "AES",
                identity: AES_IDENTITY,
                factory: || Box::new(algorithms::Aes),
            },
            Entry {
                name: "RC4",
                identity: RC4_IDENTITY,
                factory: || Box::new(algorithms::Rc4),
            },
        ];
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Add a primitive; names compare case-insensitively
    pub fn register(
        &self,
        name: &'static str,
        identity: u32,
        factory: CipherFactory,
    ) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if entries
            .iter()
            .any(|e| e.identity == identity || e.name.eq_ignore_ascii_case(name))
        {
            debug!(name, identity, "duplicate cipher registration rejected");
            return Err(Error::DuplicateRegistration { name, identity });
        }
        entries.push(Entry {
            name,
            identity,
            factory,
        });
        debug!(name, identity, "cipher registered");
        Ok(())
    }

    pub fn lookup_by_name(&self, name: &str) -> Result<CipherFactory> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        match entries.iter().find(|e| e.name.eq_ignore_ascii_case(name)) {
            Some(entry) => Ok(entry.factory),
            None => {
                debug!(name, "cipher lookup by name missed");
                Err(Error::UnregisteredType {
                    lookup: name.to_string(),
                })
            }
        }
    }

    pub fn lookup_by_identity(&self, identity: u32) -> Result<CipherFactory> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        match entries.iter().find(|e| e.identity == identity) {
            Some(entry) => Ok(entry.factory),
            None => {
                debug!(identity, "cipher lookup by identity missed");
                Err(Error::UnregisteredType {
                    lookup: format!("identity {identity:#010x}"),
                })
            }
        }
    }

    /// Construct a [`Cipher`] in the default mode
    pub fn create_by_name(&self, name: &str) -> Result<Cipher> {
        let factory = self.lookup_by_name(name)?;
        Cipher::new(factory())
    }

    /// Construct a [`Cipher`] in the default mode
    pub fn create_by_identity(&self, identity: u32) -> Result<Cipher> {
        let factory = self.lookup_by_identity(identity)?;
        Cipher::new(factory())
    }

    /// Registered names, in registration order
    pub fn names(&self) -> Vec<&'static str> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.iter().map(|e| e.name).collect()
    }

    /// Drop every registration
    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.clear();
        debug!("cipher registry cleared");
    }
}

impl Default for CipherRegistry {
    fn default() -> Self {
        Self::new()
    }
}
