//! Secret code generation

use super::code::{CODE_LENGTH, DigitError, MAX_DIGIT, SecretCode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Produces the secret code for a session
///
/// Random codes come from a generator seeded once, so every session started
/// from the same seed yields the same code.
pub struct CodeGenerator<R: Rng = StdRng> {
    rng: R,
}

impl CodeGenerator<StdRng> {
    /// Generator seeded from the wall clock
    ///
    /// Varies from session to session; not suitable for anything secret.
    #[must_use]
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos() as u64);
        Self::from_seed(seed)
    }

    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CodeGenerator<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Produce the secret: the override when given, otherwise four uniform
    /// digits in `0..=8`
    ///
    /// # Errors
    /// Returns `DigitError` if the override has a 9 in any decimal place or
    /// more than four digits. Overrides coming from `parse_args` never do.
    pub fn generate(&mut self, code_override: Option<u16>) -> Result<SecretCode, DigitError> {
        match code_override {
            Some(value) => SecretCode::from_override(value),
            None => Ok(self.random_code()),
        }
    }

    fn random_code(&mut self) -> SecretCode {
        let mut digits = [0u8; CODE_LENGTH];
        for digit in &mut digits {
            *digit = self.rng.random_range(0..=MAX_DIGIT);
        }
        SecretCode::from_valid_digits(digits)
    }
}
