//! Core domain types for Mastermind
//!
//! Pure, I/O-free types: codes, guesses, scoring and code generation.

mod code;
mod generator;
mod guess;
mod score;

pub use code::{CODE_LENGTH, DigitError, MAX_DIGIT, SecretCode, parse_digit};
pub use generator::CodeGenerator;
pub use guess::{Guess, GuessError};
pub use score::Score;
