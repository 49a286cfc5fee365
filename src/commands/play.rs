//! One game session from secret generation to the final outcome

use crate::core::CodeGenerator;
use crate::game::{GameState, Outcome, play};
use crate::options::GameOptions;
use crate::output::Presenter;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::BufRead;

/// Run a full session with already validated options
///
/// # Errors
///
/// Returns an error if the code override is unusable, or if reading input or
/// writing output fails.
pub fn run_play<R, G, P>(
    options: &GameOptions,
    generator: &mut CodeGenerator<G>,
    input: &mut R,
    presenter: &mut P,
) -> Result<Outcome>
where
    R: BufRead + ?Sized,
    G: Rng,
    P: Presenter + ?Sized,
{
    let secret = generator
        .generate(options.secret_override)
        .context("invalid secret code override")?;

    tracing::info!(
        attempts_limit = options.attempts_limit,
        code_override = options.secret_override.is_some(),
        "session started"
    );

    let mut state = GameState::new(secret, options.attempts_limit);
    presenter
        .show_intro(state.attempts_limit())
        .context("failed to write intro")?;

    play(&mut state, input, presenter).context("game loop I/O failed")
}
