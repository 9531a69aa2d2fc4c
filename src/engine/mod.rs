//! Randomness engine shared by all command handlers.
//!
//! The engine turns raw bytes from one [`EntropySource`] into the draws the
//! commands need: coin flips, bounded reals, permutations, sampling without
//! replacement, v4 identifiers and fixed-alphabet strings.
//!
//! ## Serialization
//!
//! Every draw advances backend state. Handlers share a single engine through
//! [`SharedEngine`]; the lock is taken for the synchronous draw only and is
//! never held across an `.await`.

mod scripted;
mod source;

pub use scripted::{ScriptedFailure, ScriptedSource, word_for_unit};
pub use source::{Backend, EntropySource, SecureSource, SeededSource};

use crate::error::{CommandError, EngineError};
use parking_lot::Mutex;
use std::sync::Arc;

/// Engine handle shared between registered handlers.
pub type SharedEngine = Arc<Mutex<RandomEngine>>;

/// Divisor mapping a 53-bit draw onto `[0, 1]` inclusive.
pub(crate) const UNIT_SCALE: f64 = ((1u64 << 53) - 1) as f64;

/// Random draws over a single entropy backend.
///
/// Index selection and shuffling are done here rather than through
/// `rand::seq`, whose `RngCore` adapters cannot report a failed draw.
pub struct RandomEngine {
    source: Box<dyn EntropySource>,
}

impl std::fmt::Debug for RandomEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomEngine")
            .field("backend", &self.backend())
            .finish()
    }
}

impl RandomEngine {
    /// Create an engine over any entropy source.
    pub fn new(source: impl EntropySource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Engine over the OS CSPRNG.
    pub fn secure() -> Self {
        Self::new(SecureSource)
    }

    /// Engine over a PRNG seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededSource::new(seed))
    }

    /// Which backend feeds this engine.
    pub fn backend(&self) -> Backend {
        self.source.backend()
    }

    /// Wrap the engine for sharing between handlers.
    pub fn into_shared(self) -> SharedEngine {
        Arc::new(Mutex::new(self))
    }

    fn next_u64(&mut self) -> Result<u64, EngineError> {
        let mut bytes = [0u8; 8];
        self.source.fill_bytes(&mut bytes)?;
        Ok(u64::from_le_bytes(bytes))
    }

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    ///
    /// Uses rejection sampling to avoid modulo bias.
    fn below(&mut self, bound: usize) -> Result<usize, EngineError> {
        debug_assert!(bound > 0, "below() called with empty range");
        let bound = bound as u64;
        // 2^64 mod bound values at the top of the range would bias the result.
        let rejected = (u64::MAX % bound + 1) % bound;
        let ceiling = u64::MAX - rejected;
        loop {
            let v = self.next_u64()?;
            if v <= ceiling {
                return Ok((v % bound) as usize);
            }
        }
    }

    /// Fair coin.
    pub fn boolean(&mut self) -> Result<bool, EngineError> {
        Ok(self.next_u64()? >> 63 == 1)
    }

    /// Uniform value in `[min, max]`.
    pub fn real(&mut self, min: f64, max: f64) -> Result<f64, EngineError> {
        let unit = (self.next_u64()? >> 11) as f64 / UNIT_SCALE;
        Ok(min + (max - min) * unit)
    }

    /// Draw `count` distinct positions of `items`, in draw order.
    ///
    /// `items` is left untouched. Asking for more than `items.len()` fails with
    /// [`CommandError::InvalidArgument`]; the count is never clamped.
    pub fn sample<T: Clone>(&mut self, items: &[T], count: usize) -> Result<Vec<T>, CommandError> {
        if count > items.len() {
            return Err(CommandError::InvalidArgument {
                requested: count,
                available: items.len(),
            });
        }

        // Partial Fisher-Yates: only the first `count` slots are settled.
        let mut pool = items.to_vec();
        for i in 0..count {
            let j = i + self.below(pool.len() - i)?;
            pool.swap(i, j);
        }
        pool.truncate(count);
        Ok(pool)
    }

    /// Uniformly random reordering of `items`. `items` is left untouched.
    pub fn permute<T: Clone>(&mut self, items: &[T]) -> Result<Vec<T>, EngineError> {
        let mut out = items.to_vec();
        for i in (1..out.len()).rev() {
            let j = self.below(i + 1)?;
            out.swap(i, j);
        }
        Ok(out)
    }

    /// Random version-4 UUID in hyphenated lowercase form.
    pub fn unique_identifier(&mut self) -> Result<String, EngineError> {
        let mut bytes = [0u8; 16];
        self.source.fill_bytes(&mut bytes)?;
        Ok(uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .hyphenated()
            .to_string())
    }

    /// `length` characters drawn independently (with replacement) from `alphabet`.
    pub fn random_string(&mut self, length: usize, alphabet: &[char]) -> Result<String, CommandError> {
        if alphabet.is_empty() && length > 0 {
            return Err(CommandError::InvalidArgument {
                requested: length,
                available: 0,
            });
        }
        let mut out = String::with_capacity(length);
        for _ in 0..length {
            out.push(alphabet[self.below(alphabet.len())?]);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn counts<T: std::hash::Hash + Eq + Clone>(items: &[T]) -> HashMap<T, usize> {
        let mut map = HashMap::new();
        for item in items {
            *map.entry(item.clone()).or_insert(0) += 1;
        }
        map
    }

    fn is_v4_uuid(s: &str) -> bool {
        let parts: Vec<&str> = s.split('-').collect();
        let lengths: Vec<usize> = parts.iter().map(|p| p.len()).collect();
        lengths == [8, 4, 4, 4, 12]
            && s.chars().all(|c| c == '-' || c.is_ascii_digit() || ('a'..='f').contains(&c))
            && parts[2].starts_with('4')
            && matches!(parts[3].chars().next(), Some('8' | '9' | 'a' | 'b'))
    }

    #[test]
    fn boolean_follows_top_bit() {
        let mut engine = RandomEngine::new(ScriptedSource::booleans(&[true, false, true]));
        assert!(engine.boolean().unwrap());
        assert!(!engine.boolean().unwrap());
        assert!(engine.boolean().unwrap());
    }

    #[test]
    fn real_maps_scripted_units() {
        let mut engine = RandomEngine::new(ScriptedSource::reals(&[0.4, 0.0, 1.0]));
        assert!((engine.real(0.0, 1.0).unwrap() - 0.4).abs() < 1e-12);
        assert_eq!(engine.real(0.0, 1.0).unwrap(), 0.0);
        assert_eq!(engine.real(0.0, 1.0).unwrap(), 1.0);
    }

    #[test]
    fn real_respects_bounds() {
        let mut engine = RandomEngine::seeded(99);
        for _ in 0..1000 {
            let v = engine.real(-2.0, 3.0).unwrap();
            assert!((-2.0..=3.0).contains(&v));
        }
    }

    #[test]
    fn sample_rejects_overdraw() {
        let mut engine = RandomEngine::seeded(1);
        let err = engine.sample(&["a", "b"], 3).unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidArgument {
                requested: 3,
                available: 2
            }
        );
    }

    #[test]
    fn sample_of_zero_is_empty() {
        let mut engine = RandomEngine::seeded(1);
        assert!(engine.sample(&["a", "b"], 0).unwrap().is_empty());
        assert!(engine.sample::<&str>(&[], 0).unwrap().is_empty());
    }

    #[test]
    fn sample_with_scripted_zero_words_takes_prefix() {
        // Every index draw returns 0, so each swap is a no-op.
        let mut engine = RandomEngine::new(ScriptedSource::new(vec![0]));
        assert_eq!(engine.sample(&["a", "b", "c"], 2).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn permute_of_empty_and_single() {
        let mut engine = RandomEngine::seeded(3);
        assert!(engine.permute::<u8>(&[]).unwrap().is_empty());
        assert_eq!(engine.permute(&["only"]).unwrap(), vec!["only"]);
    }

    #[test]
    fn seeded_engines_replay_identically() {
        let mut a = RandomEngine::seeded(42);
        let mut b = RandomEngine::seeded(42);
        let items: Vec<u32> = (0..20).collect();
        assert_eq!(a.permute(&items).unwrap(), b.permute(&items).unwrap());
        assert_eq!(a.sample(&items, 5).unwrap(), b.sample(&items, 5).unwrap());
        assert_eq!(a.unique_identifier().unwrap(), b.unique_identifier().unwrap());
        assert_eq!(a.boolean().unwrap(), b.boolean().unwrap());
    }

    #[test]
    fn unique_identifier_is_v4_layout() {
        let mut engine = RandomEngine::secure();
        for _ in 0..50 {
            let id = engine.unique_identifier().unwrap();
            assert!(is_v4_uuid(&id), "bad identifier: {id}");
        }
    }

    #[test]
    fn unique_identifier_from_zero_bytes_still_has_version_bits() {
        let mut engine = RandomEngine::new(ScriptedSource::new(vec![0]));
        assert_eq!(
            engine.unique_identifier().unwrap(),
            "00000000-0000-4000-8000-000000000000"
        );
    }

    #[test]
    fn random_string_rejects_empty_alphabet() {
        let mut engine = RandomEngine::seeded(5);
        assert!(engine.random_string(4, &[]).is_err());
        assert_eq!(engine.random_string(0, &[]).unwrap(), "");
    }

    #[test]
    fn failures_propagate_from_backend() {
        let mut engine = RandomEngine::new(ScriptedSource::failing());
        assert!(engine.boolean().is_err());
        assert!(engine.real(0.0, 1.0).is_err());
        assert!(engine.unique_identifier().is_err());
        assert!(matches!(
            engine.sample(&[1, 2, 3], 1),
            Err(CommandError::Engine(_))
        ));
        assert!(engine.permute(&[1, 2, 3]).is_err());
    }

    #[test]
    fn backend_is_reported() {
        assert_eq!(RandomEngine::secure().backend(), Backend::Secure);
        assert_eq!(RandomEngine::seeded(0).backend(), Backend::Seeded);
        assert_eq!(
            RandomEngine::new(ScriptedSource::new(vec![])).backend(),
            Backend::Scripted
        );
    }

    proptest! {
        #[test]
        fn permute_preserves_multiset(seed: u64, items in proptest::collection::vec(0u8..8, 0..40)) {
            let mut engine = RandomEngine::seeded(seed);
            let permuted = engine.permute(&items).unwrap();
            prop_assert_eq!(permuted.len(), items.len());
            prop_assert_eq!(counts(&permuted), counts(&items));
        }

        #[test]
        fn sample_draws_from_items(
            seed: u64,
            items in proptest::collection::vec(0u8..8, 0..40),
            frac in 0.0f64..=1.0,
        ) {
            let n = (items.len() as f64 * frac) as usize;
            let mut engine = RandomEngine::seeded(seed);
            let picked = engine.sample(&items, n).unwrap();
            prop_assert_eq!(picked.len(), n);
            let available = counts(&items);
            for (item, seen) in counts(&picked) {
                prop_assert!(seen <= available[&item]);
            }
        }

        #[test]
        fn sample_overdraw_always_fails(seed: u64, items in proptest::collection::vec(any::<u8>(), 0..20), extra in 1usize..5) {
            let mut engine = RandomEngine::seeded(seed);
            let is_invalid = matches!(
                engine.sample(&items, items.len() + extra),
                Err(CommandError::InvalidArgument { .. })
            );
            prop_assert!(is_invalid);
        }

        #[test]
        fn random_string_uses_alphabet(seed: u64, length in 1usize..64) {
            let alphabet: Vec<char> = "xyz_9".chars().collect();
            let mut engine = RandomEngine::seeded(seed);
            let s = engine.random_string(length, &alphabet).unwrap();
            prop_assert_eq!(s.chars().count(), length);
            prop_assert!(s.chars().all(|c| alphabet.contains(&c)));
        }
    }
}
