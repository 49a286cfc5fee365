//! Game state and the turn loop
//!
//! One line of input is one guess attempt. Malformed lines are rejected
//! without consuming a turn; a scored non-winning guess consumes one.
//! The loop ends on an exact match, when the attempts run out, or when the
//! input is exhausted.

use crate::core::{Guess, GuessError, Score, SecretCode};
use crate::output::Presenter;
use std::io::{self, BufRead};

/// Feedback shown after a scored, non-winning guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnFeedback {
    pub well_placed: u8,
    pub misplaced: u8,
    /// Turns consumed so far, including this one
    pub round: u8,
    pub attempts_limit: u8,
}

impl TurnFeedback {
    /// Attempts left after this round
    #[must_use]
    pub const fn remaining(&self) -> u8 {
        self.attempts_limit.saturating_sub(self.round)
    }
}

/// Result of submitting one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// Malformed guess, no turn consumed
    Rejected(GuessError),
    /// Scored and not a match, attempts remain
    Continue(TurnFeedback),
    Won,
    /// Scored, not a match, and that was the last attempt
    Lost,
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `guesses` counts every scored guess, the winning one included
    Won { guesses: u8 },
    Lost,
    /// Input ran out before a win or a loss
    EndOfInput,
}

/// State of a single session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret: SecretCode,
    attempts_limit: u8,
    turn: u8,
    won: bool,
}

impl GameState {
    #[must_use]
    pub const fn new(secret: SecretCode, attempts_limit: u8) -> Self {
        Self {
            secret,
            attempts_limit,
            turn: 0,
            won: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretCode {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn attempts_limit(&self) -> u8 {
        self.attempts_limit
    }

    /// Turns consumed by scored, non-winning guesses
    #[inline]
    #[must_use]
    pub const fn turn(&self) -> u8 {
        self.turn
    }

    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.won || self.turn >= self.attempts_limit
    }

    /// Validate, score and record one line of input
    ///
    /// Once the game is over every further line reports the terminal result
    /// again without touching the state.
    pub fn submit(&mut self, line: &[u8]) -> TurnResult {
        if self.won {
            return TurnResult::Won;
        }
        if self.turn >= self.attempts_limit {
            return TurnResult::Lost;
        }

        let guess = match Guess::parse(line) {
            Ok(guess) => guess,
            Err(err) => {
                tracing::debug!(error = %err, "guess rejected");
                return TurnResult::Rejected(err);
            }
        };

        let score = Score::calculate(&self.secret, &guess);
        tracing::debug!(
            %guess,
            well_placed = score.well_placed(),
            misplaced = score.misplaced(),
            "guess scored"
        );

        if score.is_exact() {
            self.won = true;
            return TurnResult::Won;
        }

        self.turn += 1;
        if self.turn >= self.attempts_limit {
            return TurnResult::Lost;
        }
        TurnResult::Continue(TurnFeedback {
            well_placed: score.well_placed(),
            misplaced: score.misplaced(),
            round: self.turn,
            attempts_limit: self.attempts_limit,
        })
    }

    /// Terminal outcome, if the game is over
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        if self.won {
            Some(Outcome::Won {
                guesses: self.turn + 1,
            })
        } else if self.is_over() {
            Some(Outcome::Lost)
        } else {
            None
        }
    }
}

/// Run the turn loop until the game ends or `input` is exhausted
///
/// # Errors
///
/// Returns an error if reading `input` or writing through `presenter` fails.
pub fn play<R, P>(state: &mut GameState, input: &mut R, presenter: &mut P) -> io::Result<Outcome>
where
    R: BufRead + ?Sized,
    P: Presenter + ?Sized,
{
    let mut line = Vec::new();

    while !state.is_over() {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            tracing::info!(turn = state.turn(), "input closed");
            return Ok(Outcome::EndOfInput);
        }

        match state.submit(&line) {
            TurnResult::Rejected(_) => presenter.show_wrong_input()?,
            TurnResult::Continue(feedback) => presenter.show_turn_feedback(&feedback)?,
            TurnResult::Won => {
                presenter.show_win(state.secret())?;
                tracing::info!(guesses = state.turn() + 1, "code found");
            }
            TurnResult::Lost => {
                presenter.show_loss()?;
                tracing::info!(attempts = state.attempts_limit(), "attempts exhausted");
            }
        }
    }

    Ok(state.outcome().unwrap_or(Outcome::EndOfInput))
}
