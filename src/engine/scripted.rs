//! Replay backend for deterministic tests.
//!
//! [`ScriptedSource`] hands out a fixed list of 64-bit words, cycling when the
//! list runs out. The engine consumes one word per draw, so tests can pin the
//! outcome of `boolean()`, `real()` and index draws exactly.

use super::source::{Backend, EntropySource};
use crate::error::EngineError;

/// Configurable failure behaviour for [`ScriptedSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedFailure {
    /// Never fail.
    None,
    /// Fail every fill.
    Always,
    /// Fail the Nth fill (1-indexed).
    AtNthFill(usize),
}

/// Entropy source that replays predetermined words.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    words: Vec<u64>,
    cursor: usize,
    fills: usize,
    failure: ScriptedFailure,
}

impl ScriptedSource {
    /// Replay `words` in order, cycling. An empty list replays zeros.
    pub fn new(words: Vec<u64>) -> Self {
        Self {
            words,
            cursor: 0,
            fills: 0,
            failure: ScriptedFailure::None,
        }
    }

    /// A source whose every fill fails.
    pub fn failing() -> Self {
        Self::new(Vec::new()).with_failure(ScriptedFailure::Always)
    }

    /// Replay words that make `RandomEngine::real(0.0, 1.0)` return `units`.
    pub fn reals(units: &[f64]) -> Self {
        Self::new(units.iter().map(|&u| word_for_unit(u)).collect::<Vec<_>>())
    }

    /// Replay words that make `RandomEngine::boolean()` return `flips`.
    pub fn booleans(flips: &[bool]) -> Self {
        Self::new(
            flips
                .iter()
                .map(|&b| if b { 1u64 << 63 } else { 0 })
                .collect::<Vec<_>>(),
        )
    }

    /// Set the failure behaviour.
    pub fn with_failure(mut self, failure: ScriptedFailure) -> Self {
        self.failure = failure;
        self
    }

    /// Number of fills performed so far.
    pub fn fill_count(&self) -> usize {
        self.fills
    }

    fn next_word(&mut self) -> u64 {
        if self.words.is_empty() {
            return 0;
        }
        let word = self.words[self.cursor % self.words.len()];
        self.cursor += 1;
        word
    }
}

impl EntropySource for ScriptedSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EngineError> {
        self.fills += 1;
        let fail = match self.failure {
            ScriptedFailure::None => false,
            ScriptedFailure::Always => true,
            ScriptedFailure::AtNthFill(n) => self.fills == n,
        };
        if fail {
            return Err(EngineError::EntropyUnavailable(format!(
                "scripted failure on fill {}",
                self.fills
            )));
        }

        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
        Ok(())
    }

    fn backend(&self) -> Backend {
        Backend::Scripted
    }
}

/// The word that the engine maps onto `unit` in `[0, 1]`.
pub fn word_for_unit(unit: f64) -> u64 {
    let clamped = unit.clamp(0.0, 1.0);
    ((clamped * super::UNIT_SCALE).round() as u64) << 11
}
