//! Mastermind feedback calculation
//!
//! Feedback for a guess is split into two counts:
//! - well placed: the guess digit equals the secret digit at the same position
//! - misplaced: the digit appears among the secret's unmatched positions
//!
//! No secret or guess occurrence is ever counted twice.

use super::code::{CODE_LENGTH, SecretCode};
use super::guess::Guess;

/// Feedback for one scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Score {
    /// Every position matches
    Exact,
    /// At least one position differs
    Partial { well_placed: u8, misplaced: u8 },
}

impl Score {
    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Count positions where guess and secret agree
    /// 2. Four agreements is an exact match
    /// 3. Tally digit values over the disagreeing positions, separately for
    ///    secret and guess
    /// 4. Misplaced is the sum over digit values of the smaller tally
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Guess, Score, SecretCode};
    ///
    /// let secret = SecretCode::from_digits([1, 1, 2, 3]).unwrap();
    /// let guess = Guess::from_digits([1, 4, 1, 1]).unwrap();
    ///
    /// assert_eq!(
    ///     Score::calculate(&secret, &guess),
    ///     Score::Partial { well_placed: 1, misplaced: 1 }
    /// );
    /// ```
    #[must_use]
    pub fn calculate(secret: &SecretCode, guess: &Guess) -> Self {
        let secret = secret.digits();
        let guess = guess.digits();

        let well_placed = secret.iter().zip(guess).filter(|(s, g)| s == g).count() as u8;
        if usize::from(well_placed) == CODE_LENGTH {
            return Self::Exact;
        }

        // Digits are at most 8, tables cover 0-9
        let mut secret_counts = [0u8; 10];
        let mut guess_counts = [0u8; 10];
        for (&s, &g) in secret.iter().zip(guess) {
            if s != g {
                secret_counts[usize::from(s)] += 1;
                guess_counts[usize::from(g)] += 1;
            }
        }

        let misplaced: u8 = secret_counts
            .iter()
            .zip(&guess_counts)
            .map(|(&s, &g)| s.min(g))
            .sum();

        Self::Partial {
            well_placed,
            misplaced,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Exact)
    }

    /// Number of well-placed digits (4 for an exact match)
    #[must_use]
    pub const fn well_placed(self) -> u8 {
        match self {
            Self::Exact => CODE_LENGTH as u8,
            Self::Partial { well_placed, .. } => well_placed,
        }
    }

    /// Number of misplaced digits (0 for an exact match)
    #[must_use]
    pub const fn misplaced(self) -> u8 {
        match self {
            Self::Exact => 0,
            Self::Partial { misplaced, .. } => misplaced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn score(secret: [u8; 4], guess: [u8; 4]) -> Score {
        let secret = SecretCode::from_digits(secret).unwrap();
        let guess = Guess::from_digits(guess).unwrap();
        Score::calculate(&secret, &guess)
    }

    #[test]
    fn score_exact_match() {
        assert_eq!(score([1, 2, 3, 4], [1, 2, 3, 4]), Score::Exact);
        assert_eq!(score([0, 0, 0, 0], [0, 0, 0, 0]), Score::Exact);
    }

    #[test]
    fn score_reversed_all_misplaced() {
        assert_eq!(
            score([1, 2, 3, 4], [4, 3, 2, 1]),
            Score::Partial {
                well_placed: 0,
                misplaced: 4
            }
        );
    }

    #[test]
    fn score_repeated_digits_no_double_counting() {
        // Position 0 matches; leftovers are {1,2,3} vs {4,1,1}, only one 1 overlaps
        assert_eq!(
            score([1, 1, 2, 3], [1, 4, 1, 1]),
            Score::Partial {
                well_placed: 1,
                misplaced: 1
            }
        );
    }

    #[test]
    fn score_no_overlap() {
        assert_eq!(
            score([1, 2, 3, 4], [5, 6, 7, 8]),
            Score::Partial {
                well_placed: 0,
                misplaced: 0
            }
        );
    }

    #[test]
    fn score_matched_digit_not_reused_as_misplaced() {
        // The 5 at position 1 is well placed, the other 5s have nothing left to match
        assert_eq!(
            score([0, 5, 1, 2], [5, 5, 5, 5]),
            Score::Partial {
                well_placed: 1,
                misplaced: 0
            }
        );
    }

    #[test]
    fn score_three_well_placed() {
        assert_eq!(
            score([1, 2, 3, 4], [1, 2, 3, 8]),
            Score::Partial {
                well_placed: 3,
                misplaced: 0
            }
        );
    }

    #[test]
    fn score_accessors() {
        assert!(Score::Exact.is_exact());
        assert_eq!(Score::Exact.well_placed(), 4);
        assert_eq!(Score::Exact.misplaced(), 0);

        let partial = score([1, 2, 3, 4], [2, 1, 3, 0]);
        assert!(!partial.is_exact());
        assert_eq!(partial.well_placed(), 1);
        assert_eq!(partial.misplaced(), 2);
    }

    /// Pairwise matching reference: greedily consume unmatched secret digits
    fn reference_misplaced(secret: [u8; 4], guess: [u8; 4]) -> u8 {
        let mut used = [false; 4];
        for i in 0..4 {
            if secret[i] == guess[i] {
                used[i] = true;
            }
        }
        let mut misplaced = 0;
        for i in 0..4 {
            if secret[i] == guess[i] {
                continue;
            }
            if let Some(j) = (0..4).find(|&j| !used[j] && secret[j] == guess[i]) {
                used[j] = true;
                misplaced += 1;
            }
        }
        misplaced
    }

    fn code_digits() -> impl Strategy<Value = [u8; 4]> {
        prop::array::uniform4(0u8..=8)
    }

    proptest! {
        #[test]
        fn score_self_is_exact(code in code_digits()) {
            prop_assert_eq!(score(code, code), Score::Exact);
        }

        #[test]
        fn score_counts_stay_in_bounds(secret in code_digits(), guess in code_digits()) {
            let result = score(secret, guess);
            prop_assert!(result.well_placed() <= 4);
            prop_assert!(result.misplaced() <= 4 - result.well_placed());
        }

        #[test]
        fn score_well_placed_counts_equal_positions(secret in code_digits(), guess in code_digits()) {
            let expected = secret.iter().zip(&guess).filter(|(s, g)| s == g).count() as u8;
            prop_assert_eq!(score(secret, guess).well_placed(), expected);
        }

        #[test]
        fn score_exact_only_when_equal(secret in code_digits(), guess in code_digits()) {
            prop_assert_eq!(score(secret, guess).is_exact(), secret == guess);
        }

        #[test]
        fn score_misplaced_matches_reference(secret in code_digits(), guess in code_digits()) {
            let result = score(secret, guess);
            if !result.is_exact() {
                prop_assert_eq!(result.misplaced(), reference_misplaced(secret, guess));
            }
        }

        #[test]
        fn score_total_is_symmetric(secret in code_digits(), guess in code_digits()) {
            let forward = score(secret, guess);
            let backward = score(guess, secret);
            prop_assert_eq!(forward, backward);
        }
    }
}
