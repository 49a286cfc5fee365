//! Presenter abstraction
//!
//! Presenters only render; nothing they do feeds back into the game state.

use super::{DecoratedPresenter, PlainPresenter};
use crate::core::SecretCode;
use crate::game::TurnFeedback;
use std::io::{self, IsTerminal, Write};
use std::time::Duration;

/// Everything the game shows the player
pub trait Presenter {
    /// Print the `--help` manual
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn show_manual(&mut self) -> io::Result<()>;

    /// Greeting shown once before the first guess
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn show_intro(&mut self, attempts_limit: u8) -> io::Result<()>;

    /// # Errors
    /// Returns an error if writing fails.
    fn show_wrong_input(&mut self) -> io::Result<()>;

    /// # Errors
    /// Returns an error if writing fails.
    fn show_turn_feedback(&mut self, feedback: &TurnFeedback) -> io::Result<()>;

    /// # Errors
    /// Returns an error if writing fails.
    fn show_win(&mut self, secret: &SecretCode) -> io::Result<()>;

    /// # Errors
    /// Returns an error if writing fails.
    fn show_loss(&mut self) -> io::Result<()>;
}

/// Pick the presenter for this process: decorated on a terminal, plain when
/// stdout is piped or redirected
#[must_use]
pub fn select_presenter() -> Box<dyn Presenter> {
    let stdout = io::stdout();
    if stdout.is_terminal() {
        Box::new(DecoratedPresenter::new(stdout, true))
    } else {
        Box::new(PlainPresenter::new(stdout))
    }
}

/// Write `text` one character at a time, flushing after each
///
/// # Errors
/// Returns an error if writing or flushing fails.
pub fn print_slowly<W: Write + ?Sized>(out: &mut W, text: &str, delay: Duration) -> io::Result<()> {
    if delay.is_zero() {
        out.write_all(text.as_bytes())?;
        return out.flush();
    }

    let mut buf = [0u8; 4];
    for ch in text.chars() {
        out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        out.flush()?;
        std::thread::sleep(delay);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_slowly_writes_everything() {
        let mut out = Vec::new();
        print_slowly(&mut out, "héllo ██", Duration::ZERO).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "héllo ██");
    }

    #[test]
    fn print_slowly_with_delay_keeps_multibyte_chars() {
        let mut out = Vec::new();
        print_slowly(&mut out, "█é", Duration::from_micros(1)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "█é");
    }
}
