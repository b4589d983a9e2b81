//! Hint inference
//!
//! Derives digit-membership facts from a session's guess log without
//! touching the secret. Only guesses scoring 0 or 4 in total yield
//! conclusions; partial totals are not propagated across guesses.

use crate::domain::entities::GuessRecord;
use crate::domain::value_objects::{CODE_LENGTH, DigitSet};

/// Structured hint over the whole guess history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintSummary {
    pub confirmed: DigitSet,
    pub eliminated: DigitSet,
    pub untried: DigitSet,
    pub guesses_analyzed: usize,
}

impl HintSummary {
    /// Summary for a session with no guesses yet.
    pub fn empty() -> Self {
        Self {
            confirmed: DigitSet::empty(),
            eliminated: DigitSet::empty(),
            untried: DigitSet::empty(),
            guesses_analyzed: 0,
        }
    }

    pub fn has_data(&self) -> bool {
        self.guesses_analyzed > 0
    }

    /// Every secret digit is known; only positions remain.
    pub fn all_confirmed(&self) -> bool {
        self.confirmed.len() >= CODE_LENGTH
    }

    pub fn digits_needed(&self) -> usize {
        CODE_LENGTH.saturating_sub(self.confirmed.len())
    }
}

/// Infer confirmed, eliminated and untried digits from `history`.
pub fn infer_hints(history: &[GuessRecord]) -> HintSummary {
    if history.is_empty() {
        return HintSummary::empty();
    }

    let mut confirmed = DigitSet::empty();
    let mut eliminated = DigitSet::empty();
    let mut tried = DigitSet::empty();

    for record in history {
        let digits = record.guess.digit_set();
        tried = tried.union(digits);

        match usize::from(record.score.total()) {
            0 => eliminated = eliminated.union(digits),
            CODE_LENGTH => confirmed = confirmed.union(digits),
            _ => {}
        }
    }

    // Only reachable with inconsistent scoring; keep the sets disjoint.
    eliminated = eliminated.difference(confirmed);

    HintSummary {
        confirmed,
        eliminated,
        untried: DigitSet::alphabet().difference(tried),
        guesses_analyzed: history.len(),
    }
}
