//! Entropy backends.
//!
//! A [`RandomEngine`](super::RandomEngine) draws every value from exactly one
//! [`EntropySource`], selected at activation and fixed for the engine's lifetime.

use crate::error::EngineError;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use std::fmt;

/// Which kind of backend feeds an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Operating-system CSPRNG. Non-reproducible.
    Secure,
    /// Seedable PRNG. Same seed and call sequence give identical output.
    Seeded,
    /// Replays a fixed list of words. Test use only.
    Scripted,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Secure => "secure",
            Self::Seeded => "seeded",
            Self::Scripted => "scripted",
        })
    }
}

/// Source of raw random bytes.
///
/// Implementations advance internal state on every call, so a source must only
/// ever be driven by one caller at a time.
pub trait EntropySource: Send {
    /// Fill `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EntropyUnavailable`] when the backend cannot
    /// produce data.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EngineError>;

    /// The backend kind, for logging and diagnostics.
    fn backend(&self) -> Backend;
}

/// Cryptographically secure backend over the OS entropy pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecureSource;

impl EntropySource for SecureSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EngineError> {
        OsRng.try_fill_bytes(dest)?;
        Ok(())
    }

    fn backend(&self) -> Backend {
        Backend::Secure
    }
}

/// Deterministic backend over a seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: u64,
    rng: StdRng,
}

impl SeededSource {
    /// Create a source from a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from OS entropy.
    ///
    /// The chosen seed is kept so a run can be replayed with [`SeededSource::new`].
    pub fn auto_seeded() -> Result<Self, EngineError> {
        let mut bytes = [0u8; 8];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self::new(u64::from_le_bytes(bytes)))
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl EntropySource for SeededSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EngineError> {
        self.rng.fill_bytes(dest);
        Ok(())
    }

    fn backend(&self) -> Backend {
        Backend::Seeded
    }
}
