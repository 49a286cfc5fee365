//! Plain text presenter for pipes and redirected output

use super::Presenter;
use super::formatters::MANUAL;
use crate::core::SecretCode;
use crate::game::TurnFeedback;
use std::io::{self, Write};

pub struct PlainPresenter<W: Write> {
    out: W,
}

impl<W: Write> PlainPresenter<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for PlainPresenter<W> {
    fn show_manual(&mut self) -> io::Result<()> {
        self.out.write_all(MANUAL.as_bytes())?;
        self.out.flush()
    }

    fn show_intro(&mut self, _attempts_limit: u8) -> io::Result<()> {
        writeln!(self.out, "Will you find the secret code?")?;
        writeln!(self.out, "Please enter a valid guess")?;
        writeln!(self.out, "---")?;
        writeln!(self.out, "Round 0")?;
        self.out.flush()
    }

    fn show_wrong_input(&mut self) -> io::Result<()> {
        writeln!(self.out, "Wrong Input!")?;
        self.out.flush()
    }

    fn show_turn_feedback(&mut self, feedback: &TurnFeedback) -> io::Result<()> {
        writeln!(self.out, "Well placed pieces: {}", feedback.well_placed)?;
        writeln!(self.out, "Misplaced pieces: {}", feedback.misplaced)?;
        writeln!(self.out, "---")?;
        writeln!(self.out, "Round: {}", feedback.round)?;
        self.out.flush()
    }

    fn show_win(&mut self, _secret: &SecretCode) -> io::Result<()> {
        writeln!(self.out, "Congratulations! You did it!")?;
        self.out.flush()
    }

    fn show_loss(&mut self) -> io::Result<()> {
        writeln!(self.out, "Out of attempts! The code stays locked.")?;
        self.out.flush()
    }
}
