//! Player guesses parsed from raw input lines

use super::code::{CODE_LENGTH, DigitError, MAX_DIGIT, parse_digit};
use std::fmt;

/// Why an input line was not accepted as a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// Fewer than four usable bytes on the line
    TooShort(usize),
    /// One of the first four bytes is not a digit in `0..=8`
    Digit { position: usize, source: DigitError },
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(len) => {
                write!(f, "Guess must be {CODE_LENGTH} digits, got {len} characters")
            }
            Self::Digit { position, source } => {
                write!(f, "Invalid character at position {}: {source}", position + 1)
            }
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TooShort(_) => None,
            Self::Digit { source, .. } => Some(source),
        }
    }
}

/// A four-digit guess, every digit in `0..=8`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guess([u8; CODE_LENGTH]);

impl Guess {
    /// Parse one line of input
    ///
    /// Only the first four bytes are interpreted; anything after them is
    /// ignored. A trailing `\n` (and `\r` before it) is not counted as usable.
    ///
    /// # Errors
    /// Returns `GuessError` if the line is shorter than four bytes or one of
    /// the first four bytes is not a digit in `0..=8`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Guess;
    ///
    /// let guess = Guess::parse(b"1234\n").unwrap();
    /// assert_eq!(guess.digits(), &[1, 2, 3, 4]);
    ///
    /// assert!(Guess::parse(b"12\n").is_err());
    /// assert!(Guess::parse(b"1923\n").is_err());
    /// ```
    pub fn parse(line: &[u8]) -> Result<Self, GuessError> {
        let line = trim_line_ending(line);

        if line.len() < CODE_LENGTH {
            return Err(GuessError::TooShort(line.len()));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (position, (slot, &byte)) in digits.iter_mut().zip(line).enumerate() {
            *slot = parse_digit(byte).map_err(|source| GuessError::Digit { position, source })?;
        }

        Ok(Self(digits))
    }

    /// Build a guess directly from digits
    ///
    /// # Errors
    /// Returns `GuessError::Digit` for the first digit above 8.
    pub fn from_digits(digits: [u8; CODE_LENGTH]) -> Result<Self, GuessError> {
        if let Some((position, &digit)) = digits.iter().enumerate().find(|(_, d)| **d > MAX_DIGIT) {
            return Err(GuessError::Digit {
                position,
                source: DigitError::OutOfRange(digit),
            });
        }
        Ok(Self(digits))
    }

    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_parse_valid() {
        assert_eq!(Guess::parse(b"1234").unwrap().digits(), &[1, 2, 3, 4]);
        assert_eq!(Guess::parse(b"0808\n").unwrap().digits(), &[0, 8, 0, 8]);
        assert_eq!(Guess::parse(b"5678\r\n").unwrap().digits(), &[5, 6, 7, 8]);
    }

    #[test]
    fn guess_parse_ignores_trailing_characters() {
        let guess = Guess::parse(b"12345678 and more\n").unwrap();
        assert_eq!(guess.digits(), &[1, 2, 3, 4]);
    }

    #[test]
    fn guess_parse_too_short() {
        assert_eq!(Guess::parse(b""), Err(GuessError::TooShort(0)));
        assert_eq!(Guess::parse(b"\n"), Err(GuessError::TooShort(0)));
        assert_eq!(Guess::parse(b"123\n"), Err(GuessError::TooShort(3)));
        assert_eq!(Guess::parse(b"12\r\n"), Err(GuessError::TooShort(2)));
    }

    #[test]
    fn guess_parse_rejects_nine() {
        assert_eq!(
            Guess::parse(b"1293\n"),
            Err(GuessError::Digit {
                position: 2,
                source: DigitError::OutOfRange(9),
            })
        );
    }

    #[test]
    fn guess_parse_rejects_non_digits() {
        assert_eq!(
            Guess::parse(b"12a4"),
            Err(GuessError::Digit {
                position: 2,
                source: DigitError::NotADigit(b'a'),
            })
        );
        assert!(Guess::parse(b" 1234").is_err());
        assert!(Guess::parse(b"-123").is_err());
        assert!(Guess::parse(&[0xff, b'1', b'2', b'3']).is_err());
    }

    #[test]
    fn guess_parse_reports_first_bad_position() {
        let err = Guess::parse(b"x9yz").unwrap_err();
        assert!(matches!(err, GuessError::Digit { position: 0, .. }));
    }

    #[test]
    fn guess_error_display() {
        assert_eq!(
            GuessError::TooShort(2).to_string(),
            "Guess must be 4 digits, got 2 characters"
        );
        let err = Guess::parse(b"1239").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid character at position 4: digit 9 is greater than 8"
        );
    }

    #[test]
    fn guess_from_digits() {
        assert!(Guess::from_digits([8, 0, 8, 0]).is_ok());
        assert!(Guess::from_digits([0, 0, 0, 9]).is_err());
    }

    #[test]
    fn guess_display_keeps_leading_zeros() {
        let guess = Guess::parse(b"0070\n").unwrap();
        assert_eq!(guess.to_string(), "0070");
    }
}
