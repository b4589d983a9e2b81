//! Domain Value Objects
//!
//! Immutable value types for the game domain. Codes are stored as digit
//! values (`0..=9`), not ASCII, so scoring and hint inference work on plain
//! integers.

use chrono::{DateTime, Duration, Utc};
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Number of digits in a secret and in a guess.
pub const CODE_LENGTH: usize = 4;

/// Size of the digit alphabet (`0..=9`).
pub const ALPHABET_SIZE: u8 = 10;

/// Maximum owner name length in characters.
pub const OWNER_NAME_MAX_LENGTH: usize = 50;

// ============================================================================
// Codes
// ============================================================================

/// Why a string could not become a [`Secret`] or [`Guess`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("Code must be exactly {expected} digits (got {actual})")]
    WrongLength { expected: usize, actual: usize },

    #[error("Code may only contain digits 0-9 (found {0:?})")]
    NotADigit(char),

    #[error("Digit value {0} is outside 0-9")]
    DigitOutOfRange(u8),

    #[error("Secret digits must be distinct (digit {0} repeats)")]
    RepeatedDigit(u8),
}

/// Normalize and split a code string into digit values.
///
/// NFKC folds full-width digits (`１２３４`) into ASCII before validation.
/// Surrounding whitespace is trimmed; interior whitespace is not a digit.
fn parse_digits(raw: &str) -> Result<[u8; CODE_LENGTH], CodeError> {
    let normalized: String = raw.nfkc().collect();
    let trimmed = normalized.trim();

    let actual = trimmed.chars().count();
    if actual != CODE_LENGTH {
        return Err(CodeError::WrongLength {
            expected: CODE_LENGTH,
            actual,
        });
    }

    let mut digits = [0u8; CODE_LENGTH];
    for (slot, c) in digits.iter_mut().zip(trimmed.chars()) {
        *slot = c
            .to_digit(10)
            .filter(|_| c.is_ascii_digit())
            .ok_or(CodeError::NotADigit(c))? as u8;
    }
    Ok(digits)
}

fn write_digits(f: &mut fmt::Formatter<'_>, digits: &[u8; CODE_LENGTH]) -> fmt::Result {
    for d in digits {
        write!(f, "{}", d)?;
    }
    Ok(())
}

/// The hidden code: four distinct digits.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Secret([u8; CODE_LENGTH]);

impl Secret {
    pub fn from_digits(digits: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        let mut seen = DigitSet::empty();
        for &d in &digits {
            if d >= ALPHABET_SIZE {
                return Err(CodeError::DigitOutOfRange(d));
            }
            if seen.contains(d) {
                return Err(CodeError::RepeatedDigit(d));
            }
            seen.insert(d);
        }
        Ok(Self(digits))
    }

    pub fn parse(raw: &str) -> Result<Self, CodeError> {
        Self::from_digits(parse_digits(raw)?)
    }

    pub fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.0)
    }
}

// Keep the answer out of logs and panic messages.
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(****)")
    }
}

/// A player's submitted code. Digits may repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess([u8; CODE_LENGTH]);

impl Guess {
    pub fn from_digits(digits: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        match digits.iter().find(|&&d| d >= ALPHABET_SIZE) {
            Some(&d) => Err(CodeError::DigitOutOfRange(d)),
            None => Ok(Self(digits)),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, CodeError> {
        parse_digits(raw).map(Self)
    }

    pub fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    pub fn digit_set(&self) -> DigitSet {
        self.0.iter().copied().collect()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.0)
    }
}

/// Feedback for one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub bulls: u8,
    pub cows: u8,
}

impl Score {
    pub fn new(bulls: u8, cows: u8) -> Self {
        Self { bulls, cows }
    }

    pub fn total(&self) -> u8 {
        self.bulls + self.cows
    }

    pub fn is_win(&self) -> bool {
        usize::from(self.bulls) == CODE_LENGTH
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}A{}B", self.bulls, self.cows)
    }
}

// ============================================================================
// Digit sets
// ============================================================================

/// Set over the digit alphabet, one bit per digit.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    const FULL: u16 = (1 << ALPHABET_SIZE) - 1;

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn alphabet() -> Self {
        Self(Self::FULL)
    }

    pub fn insert(&mut self, digit: u8) {
        debug_assert!(digit < ALPHABET_SIZE);
        self.0 |= 1 << digit;
    }

    pub fn contains(&self, digit: u8) -> bool {
        digit < ALPHABET_SIZE && self.0 & (1 << digit) != 0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..ALPHABET_SIZE).filter(|&d| self.contains(d))
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }
}

impl FromIterator<u8> for DigitSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::empty();
        for d in iter {
            set.insert(d);
        }
        set
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// ============================================================================
// Owner name
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Player name cannot be empty")]
    Empty,

    #[error("Player name must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

/// Display name of the player who owns a session or ranking entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerName(String);

impl OwnerName {
    /// NFKC-normalize, trim, then check `1..=50` characters.
    pub fn new(raw: &str) -> Result<Self, NameError> {
        let normalized: String = raw.nfkc().collect();
        let trimmed = normalized.trim();

        let actual = trimmed.chars().count();
        if actual == 0 {
            return Err(NameError::Empty);
        }
        if actual > OWNER_NAME_MAX_LENGTH {
            return Err(NameError::TooLong {
                max: OWNER_NAME_MAX_LENGTH,
                actual,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for OwnerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Rankings
// ============================================================================

/// Identifier of a ranking row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RankingId(pub i64);

impl fmt::Display for RankingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Longest plausible game, in seconds.
pub const MAX_RANKED_DURATION_SECS: f64 = 86_400.0;

/// Most guesses a ranked game may record.
pub const MAX_RANKED_GUESSES: u32 = 1_000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingEditError {
    #[error(transparent)]
    Name(#[from] NameError),

    #[error("End time must be later than start time")]
    EndNotAfterStart,

    #[error("Duration must be greater than 0 and at most {max} seconds")]
    DurationOutOfRange { max: f64 },

    #[error("Guess count must be between 1 and {max}")]
    GuessCountOutOfRange { max: u32 },

    #[error("Timestamps must be within one year of now")]
    TimestampOutOfRange,
}

/// A validated administrative correction of a ranking row.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEdit {
    pub name: OwnerName,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub duration_secs: f64,
    pub guess_count: u32,
}

impl RankingEdit {
    pub fn new(
        name: &str,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
        duration_secs: f64,
        guess_count: u32,
        now: DateTime<Utc>,
    ) -> Result<Self, RankingEditError> {
        let name = OwnerName::new(name)?;

        if !(duration_secs > 0.0 && duration_secs <= MAX_RANKED_DURATION_SECS) {
            return Err(RankingEditError::DurationOutOfRange {
                max: MAX_RANKED_DURATION_SECS,
            });
        }
        if !(1..=MAX_RANKED_GUESSES).contains(&guess_count) {
            return Err(RankingEditError::GuessCountOutOfRange {
                max: MAX_RANKED_GUESSES,
            });
        }
        if started_at >= ended_at {
            return Err(RankingEditError::EndNotAfterStart);
        }

        let window = Duration::days(365);
        let in_window = |t: DateTime<Utc>| t >= now - window && t <= now + window;
        if !in_window(started_at) || !in_window(ended_at) {
            return Err(RankingEditError::TimestampOutOfRange);
        }

        Ok(Self {
            name,
            started_at,
            ended_at,
            duration_secs,
            guess_count,
        })
    }
}
