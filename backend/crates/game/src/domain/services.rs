//! Domain Services
//!
//! Pure game logic: secret generation and scoring.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::value_objects::{CODE_LENGTH, Guess, Score, Secret};

/// Draw a secret uniformly over all ordered selections of 4 distinct digits.
///
/// Shuffles the alphabet and takes the first four.
pub fn generate_secret<R: Rng + ?Sized>(rng: &mut R) -> Secret {
    let mut alphabet: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    alphabet.shuffle(rng);

    let mut digits = [0u8; CODE_LENGTH];
    digits.copy_from_slice(&alphabet[..CODE_LENGTH]);
    Secret::from_digits(digits).expect("shuffled alphabet yields distinct digits")
}

/// Score `guess` against `secret`.
///
/// A position that is not a bull counts as a cow whenever its digit occurs
/// anywhere in the secret. Repeated guess digits are therefore each counted,
/// rather than matched by multiset intersection.
pub fn score(secret: &Secret, guess: &Guess) -> Score {
    let mut result = Score::default();
    for (&s, &g) in secret.digits().iter().zip(guess.digits()) {
        if g == s {
            result.bulls += 1;
        } else if secret.contains(g) {
            result.cows += 1;
        }
    }
    result
}
