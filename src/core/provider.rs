//! Random key providers.
//!
//! Randomness is never produced here directly: the default provider seeds a
//! ChaCha-based CSPRNG from the operating system on every call and samples
//! the key alphabet uniformly.
//!
//! ## Adding a New Provider
//!
//! 1. Implement the `SecretProvider` trait
//! 2. Return `Error::Entropy` when the randomness source fails
//! 3. Never fall back to a weaker source

use rand::distributions::Uniform;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::{KEY_ALPHABET, KEY_LENGTH};
use crate::core::secret::SecretKey;
use crate::error::Result;

/// Source of cryptographically random secret keys.
pub trait SecretProvider {
    /// Generate a fresh secret key.
    ///
    /// # Errors
    ///
    /// Returns `Error::Entropy` if the randomness source is unavailable.
    fn generate(&self) -> Result<SecretKey>;
}

/// Provider backed by the operating system's entropy source.
#[derive(Debug, Clone, Copy)]
pub struct OsProvider {
    length: usize,
}

impl OsProvider {
    pub fn new() -> Self {
        Self { length: KEY_LENGTH }
    }

    /// Provider producing keys of `length` characters.
    pub fn with_length(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Seed a CSPRNG from `seed_source` and sample one key.
    fn generate_from<R: RngCore>(&self, seed_source: R) -> Result<SecretKey> {
        debug!(length = self.length, "generating secret key");

        let mut rng = StdRng::from_rng(seed_source)?;
        let index = Uniform::from(0..KEY_ALPHABET.len());
        // Sized up front so the buffer never reallocates and leaves an
        // unwiped copy behind.
        let mut value = Zeroizing::new(String::with_capacity(self.length));
        for _ in 0..self.length {
            value.push(char::from(KEY_ALPHABET[rng.sample(&index)]));
        }

        debug!("secret key generated");
        Ok(SecretKey::from(value))
    }
}

impl Default for OsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretProvider for OsProvider {
    fn generate(&self) -> Result<SecretKey> {
        self.generate_from(OsRng)
    }
}
