//! Colored, animated presenter for interactive terminals

use super::Presenter;
use super::formatters::{MANUAL, round_line};
use super::presenter::print_slowly;
use crate::core::SecretCode;
use crate::game::TurnFeedback;
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use std::time::Duration;

const BANNER: &str = "\n\n\
███    ███  █████  ███████ ████████ ███████ ██████  ███    ███ ██ ███    ██ ██████  \n\
████  ████ ██   ██ ██         ██    ██      ██   ██ ████  ████ ██ ████   ██ ██   ██ \n\
██ ████ ██ ███████ ███████    ██    █████   ██████  ██ ████ ██ ██ ██ ██  ██ ██   ██ \n\
██  ██  ██ ██   ██      ██    ██    ██      ██   ██ ██  ██  ██ ██ ██  ██ ██ ██   ██ \n\
██      ██ ██   ██ ███████    ██    ███████ ██   ██ ██      ██ ██ ██   ████ ██████  \n\
\x20                                                                          By ESQVR \n\n";

const LOCKDOWN: [&str; 5] = [
    "L     OOO   CCC  K  K  DDD    OOO   W     W  N   N \n",
    "L    O   O C     K K   D  D  O   O  W     W  NN  N \n",
    "L    O   O C     KK    D  D  O   O  W  W  W  N N N \n",
    "L    O   O C     K K   D  D  O   O   W W W   N  NN \n",
    "LLLL  OOO   CCC  K  K  DDD    OOO     W W    N   N \n",
];

const STARS: &str = "************************************";

/// Per-character pauses for the typewriter text
mod pace {
    use std::time::Duration;

    pub const INTRO: Duration = Duration::from_millis(20);
    pub const CORRECT: Duration = Duration::from_millis(100);
    pub const TITLE: Duration = Duration::from_millis(50);
    pub const TOO_MANY_ATTEMPTS: Duration = Duration::from_millis(60);
    pub const LOCKDOWN: Duration = Duration::from_millis(10);
}

/// Presenter with ANSI colors, a cleared screen and typewriter text
///
/// With `animated` off the typewriter text is written at once.
pub struct DecoratedPresenter<W: Write> {
    out: W,
    animated: bool,
}

impl<W: Write> DecoratedPresenter<W> {
    pub const fn new(out: W, animated: bool) -> Self {
        Self { out, animated }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn slowly(&mut self, text: &str, per_char: Duration) -> io::Result<()> {
        let delay = if self.animated { per_char } else { Duration::ZERO };
        print_slowly(&mut self.out, text, delay)
    }
}

impl<W: Write> Presenter for DecoratedPresenter<W> {
    fn show_manual(&mut self) -> io::Result<()> {
        write!(self.out, "{MANUAL}")?;
        self.out.flush()
    }

    fn show_intro(&mut self, attempts_limit: u8) -> io::Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        write!(self.out, "{}", BANNER.bright_green())?;

        self.slowly(
            "The computer has just chosen a secret code made of 4 digits between 0-8.\n",
            pace::INTRO,
        )?;
        self.slowly(
            "You need to guess the code before the computer permanently locks down - \
             but you have a limited number of tries.\n",
            pace::INTRO,
        )?;
        self.slowly(
            &format!("If you don't enter the correct code within {attempts_limit} guesses, you lose.\n\n"),
            pace::INTRO,
        )?;
        self.slowly(
            "For each guess the computer will display the number of digits that are in the correct location in the code.\n",
            pace::INTRO,
        )?;
        self.slowly(
            "The number of correct but misplaced digits will be displayed below that.\n\n",
            pace::INTRO,
        )?;
        writeln!(self.out, "{}", "Round 0".bright_green())?;
        self.out.flush()
    }

    fn show_wrong_input(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "Wrong Input!".red())?;
        self.out.flush()
    }

    fn show_turn_feedback(&mut self, feedback: &TurnFeedback) -> io::Result<()> {
        writeln!(
            self.out,
            "{}",
            format!("Correctly Placed Digits: {}", feedback.well_placed).cyan()
        )?;
        writeln!(
            self.out,
            "{}",
            format!("Misplaced Digits: {}", feedback.misplaced).magenta()
        )?;
        writeln!(self.out, "------------")?;
        writeln!(self.out, "{}", round_line(feedback.round, feedback.remaining()))?;
        self.out.flush()
    }

    fn show_win(&mut self, secret: &SecretCode) -> io::Result<()> {
        write!(self.out, "{}", format!("\nCODE:{secret}").bright_green())?;
        let correct = " ... CORRECT\n".bright_green().to_string();
        self.slowly(&correct, pace::CORRECT)?;
        writeln!(self.out, "\n{}", STARS.bright_green())?;
        let title = "!!! YOU ARE THE MASTERMIND !!! ".red().bold().to_string();
        self.slowly(&title, pace::TITLE)?;
        writeln!(self.out, "\n{}", STARS.bright_green())?;
        self.out.flush()
    }

    fn show_loss(&mut self) -> io::Result<()> {
        self.slowly("\n\n... ERROR: TOO MANY ATTEMPTS ...\n\n", pace::TOO_MANY_ATTEMPTS)?;
        for line in LOCKDOWN {
            let line = line.red().to_string();
            self.slowly(&line, pace::LOCKDOWN)?;
        }
        writeln!(self.out, "\n")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(show: impl FnOnce(&mut DecoratedPresenter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut presenter = DecoratedPresenter::new(Vec::new(), false);
        show(&mut presenter).unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn decorated_intro_mentions_attempts() {
        let text = render(|p| p.show_intro(7));
        assert!(text.contains("███"));
        assert!(text.contains("By ESQVR"));
        assert!(text.contains("within 7 guesses"));
        assert!(text.contains("Round 0"));
    }

    #[test]
    fn decorated_intro_clears_screen_first() {
        let text = render(|p| p.show_intro(10));
        assert!(text.starts_with("\x1b["));
    }

    #[test]
    fn decorated_turn_feedback() {
        let feedback = TurnFeedback {
            well_placed: 2,
            misplaced: 1,
            round: 4,
            attempts_limit: 10,
        };
        let text = render(|p| p.show_turn_feedback(&feedback));
        assert!(text.contains("Correctly Placed Digits: 2"));
        assert!(text.contains("Misplaced Digits: 1"));
        assert!(text.contains("Round: 4"));
    }

    #[test]
    fn decorated_win_reveals_code() {
        let secret = SecretCode::from_override(80).unwrap();
        let text = render(|p| p.show_win(&secret));
        assert!(text.contains("CODE:0080"));
        assert!(text.contains("CORRECT"));
        assert!(text.contains("YOU ARE THE MASTERMIND"));
    }

    #[test]
    fn decorated_loss_banner() {
        let text = render(|p| p.show_loss());
        assert!(text.contains("TOO MANY ATTEMPTS"));
        assert!(text.contains("LLLL  OOO"));
    }

    #[test]
    fn decorated_wrong_input_and_manual() {
        assert!(render(|p| p.show_wrong_input()).contains("Wrong Input!"));
        assert!(render(|p| p.show_manual()).contains("Usage: mastermind [options]"));
    }

    #[test]
    fn decorated_pace_per_message() {
        assert_eq!(pace::INTRO, Duration::from_millis(20));
        assert_eq!(pace::CORRECT, Duration::from_millis(100));
        assert_eq!(pace::TITLE, Duration::from_millis(50));
        assert_eq!(pace::TOO_MANY_ATTEMPTS, Duration::from_millis(60));
        assert_eq!(pace::LOCKDOWN, Duration::from_millis(10));
    }
}
