//! Command-line option parsing
//!
//! The grammar is positional: either a lone `--help`, or zero, one or two
//! `FLAG VALUE` pairs where `FLAG` is `-c` (secret code) or `-t` (attempts).

use crate::core::{CODE_LENGTH, MAX_DIGIT};
use std::fmt;

/// Attempts allowed when `-t` is not given
pub const DEFAULT_ATTEMPTS: u8 = 10;

const CODE_FLAG: &str = "-c";
const ATTEMPTS_FLAG: &str = "-t";
const HELP_FLAG: &str = "--help";

/// Options for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Always in `1..=99`
    pub attempts_limit: u8,
    /// Validated override: at most four digits, none of them 9
    pub secret_override: Option<u16>,
    pub help_requested: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            attempts_limit: DEFAULT_ATTEMPTS,
            secret_override: None,
            help_requested: false,
        }
    }
}

impl GameOptions {
    const fn help() -> Self {
        Self {
            attempts_limit: DEFAULT_ATTEMPTS,
            secret_override: None,
            help_requested: true,
        }
    }
}

/// What is wrong with a `-c` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeDefect {
    /// Not a number, negative, or more than four digits
    NotFourDigits,
    /// One of the four decimal places holds a 9
    ContainsNine,
}

/// Error for an unusable command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    InvalidArgumentCount(usize),
    UnknownFlag(String),
    InvalidCode { value: String, defect: CodeDefect },
    InvalidAttempts(String),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgumentCount(count) => {
                write!(f, "Invalid command format: {count} arguments given")
            }
            Self::UnknownFlag(flag) => write!(f, "Unknown flag: {flag}"),
            Self::InvalidCode {
                value,
                defect: CodeDefect::NotFourDigits,
            } => write!(f, "The code must be {CODE_LENGTH} digits (got {value})"),
            Self::InvalidCode {
                value,
                defect: CodeDefect::ContainsNine,
            } => write!(f, "No digit may be greater than {MAX_DIGIT} (got {value})"),
            Self::InvalidAttempts(value) => {
                write!(f, "Attempts must be a number from 1 to 99 (got {value})")
            }
        }
    }
}

impl std::error::Error for OptionsError {}

/// Parse the arguments that follow the program name
///
/// # Errors
/// Returns the first `OptionsError` met, scanning pairs left to right.
///
/// # Examples
/// ```
/// use mastermind::options::parse_args;
///
/// let options = parse_args(&["-t", "5", "-c", "1234"]).unwrap();
/// assert_eq!(options.attempts_limit, 5);
/// assert_eq!(options.secret_override, Some(1234));
///
/// assert!(parse_args(&["-c", "9123"]).is_err());
/// ```
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<GameOptions, OptionsError> {
    if let [only] = args
        && only.as_ref() == HELP_FLAG
    {
        return Ok(GameOptions::help());
    }

    if !matches!(args.len(), 0 | 2 | 4) {
        return Err(OptionsError::InvalidArgumentCount(args.len()));
    }

    let mut options = GameOptions::default();
    for pair in args.chunks_exact(2) {
        let (flag, value) = (pair[0].as_ref(), pair[1].as_ref());
        match flag {
            CODE_FLAG => options.secret_override = Some(parse_code(value)?),
            ATTEMPTS_FLAG => options.attempts_limit = parse_attempts(value)?,
            other => return Err(OptionsError::UnknownFlag(other.to_string())),
        }
    }

    Ok(options)
}

/// Validate a `-c` value, treating it as zero-padded to four digits
fn parse_code(value: &str) -> Result<u16, OptionsError> {
    let invalid = |defect| OptionsError::InvalidCode {
        value: value.to_string(),
        defect,
    };

    let number = value
        .parse::<i64>()
        .map_err(|_| invalid(CodeDefect::NotFourDigits))?;
    let code = u16::try_from(number)
        .ok()
        .filter(|&code| code <= 9999)
        .ok_or_else(|| invalid(CodeDefect::NotFourDigits))?;

    let places = [code / 1000, (code / 100) % 10, (code / 10) % 10, code % 10];
    if places.contains(&9) {
        return Err(invalid(CodeDefect::ContainsNine));
    }

    Ok(code)
}

/// Validate a `-t` value: strictly between 0 and 100
fn parse_attempts(value: &str) -> Result<u8, OptionsError> {
    value
        .parse::<i64>()
        .ok()
        .filter(|attempts| (1..100).contains(attempts))
        .and_then(|attempts| u8::try_from(attempts).ok())
        .ok_or_else(|| OptionsError::InvalidAttempts(value.to_string()))
}
