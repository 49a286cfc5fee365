//! Text shared by every presenter

use crate::options::OptionsError;
use colored::{ColoredString, Colorize};

/// Usage text printed for `--help`
pub const MANUAL: &str = "\nUsage: mastermind [options]\n\
Options:\n\
\t--help\t\tDisplay this help message\n\
\t-c [CODE]\tManually select secret code answer - (4 digits 0-8: 1234)\n\
\t-t [ATTEMPTS]\tManually select maximum number of guess attempts - (number 1-99)\n\n";

const REQUIRED_FORMAT: &str = "--------\n\
REQUIRED FORMAT:\n\
mastermind [FLAG] [VALUE] [FLAG] [VALUE]\n\n\
PERMITTED FLAGS:\n\
Set Code:\n\
\t-c [CODE] (4 digits. 0-8)\n\
Set Attempts:\n\
\t-t [ATTEMPTS] (1-99)\n\
--------\n\n\
PROGRAM TERMINATED\n";

/// Message written to stderr when the command line is rejected
#[must_use]
pub fn usage_error(err: &OptionsError) -> String {
    format!("\n***ERROR***\n{err}\n\n{REQUIRED_FORMAT}")
}

/// Color for the round line: green with plenty left, yellow when it gets
/// close, red for the last attempts
#[must_use]
pub fn round_line(round: u8, remaining: u8) -> ColoredString {
    let line = format!("Round: {round}");
    match remaining {
        5.. => line.bright_green(),
        2..=4 => line.yellow(),
        _ => line.red(),
    }
}
