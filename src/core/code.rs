//! Secret code representation
//!
//! A code is an ordered sequence of exactly four digits, each in `0..=8`.

use std::fmt;

/// Number of digits in a code
pub const CODE_LENGTH: usize = 4;

/// Largest digit allowed in a code
pub const MAX_DIGIT: u8 = 8;

/// Error for a single byte that cannot become a code digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitError {
    NotADigit(u8),
    OutOfRange(u8),
}

impl fmt::Display for DigitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotADigit(byte) => write!(f, "{:?} is not a digit", char::from(*byte)),
            Self::OutOfRange(digit) => {
                write!(f, "digit {digit} is greater than {MAX_DIGIT}")
            }
        }
    }
}

impl std::error::Error for DigitError {}

/// Convert one ASCII byte into a code digit
///
/// # Errors
/// Returns `DigitError::NotADigit` for anything outside `b'0'..=b'9'` and
/// `DigitError::OutOfRange` for `b'9'`.
pub const fn parse_digit(byte: u8) -> Result<u8, DigitError> {
    if !byte.is_ascii_digit() {
        return Err(DigitError::NotADigit(byte));
    }

    let digit = byte - b'0';
    if digit > MAX_DIGIT {
        return Err(DigitError::OutOfRange(digit));
    }

    Ok(digit)
}

/// The code the player has to find
///
/// Immutable once built; every digit is guaranteed to be in `0..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecretCode([u8; CODE_LENGTH]);

impl SecretCode {
    /// Build a code from four digits
    ///
    /// # Errors
    /// Returns `DigitError::OutOfRange` for the first digit above 8.
    pub fn from_digits(digits: [u8; CODE_LENGTH]) -> Result<Self, DigitError> {
        if let Some(&digit) = digits.iter().find(|&&d| d > MAX_DIGIT) {
            return Err(DigitError::OutOfRange(digit));
        }
        Ok(Self(digits))
    }

    /// Caller guarantees every digit is in `0..=8`
    pub(super) const fn from_valid_digits(digits: [u8; CODE_LENGTH]) -> Self {
        Self(digits)
    }

    /// Split a validated override into its place-value digits
    ///
    /// `1234` becomes `[1, 2, 3, 4]`, `42` becomes `[0, 0, 4, 2]`.
    ///
    /// # Errors
    /// Returns `DigitError::OutOfRange` if any decimal place holds a 9, or
    /// if the value has more than four digits.
    pub fn from_override(value: u16) -> Result<Self, DigitError> {
        if value > 9999 {
            return Err(DigitError::OutOfRange(9));
        }
        Self::from_digits([
            (value / 1000) as u8,
            ((value / 100) % 10) as u8,
            ((value / 10) % 10) as u8,
            (value % 10) as u8,
        ])
    }

    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }
}

impl fmt::Display for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
