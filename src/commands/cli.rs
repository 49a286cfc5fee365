//! Process-level flow: options, manual, session, exit status

use super::run_play;
use crate::core::CodeGenerator;
use crate::options::parse_args;
use crate::output::Presenter;
use crate::output::formatters::usage_error;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{BufRead, Write};
use std::process::ExitCode;

/// Run the program for the arguments that follow the program name
///
/// A rejected command line is reported once on `errors` and yields a failing
/// exit code before the presenter is ever used.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run<S, G, R, P, E>(
    args: &[S],
    generator: &mut CodeGenerator<G>,
    input: &mut R,
    presenter: &mut P,
    errors: &mut E,
) -> Result<ExitCode>
where
    S: AsRef<str>,
    G: Rng,
    R: BufRead + ?Sized,
    P: Presenter + ?Sized,
    E: Write + ?Sized,
{
    let options = match parse_args(args) {
        Ok(options) => options,
        Err(err) => {
            tracing::debug!(error = %err, "rejected command line");
            errors
                .write_all(usage_error(&err).as_bytes())
                .and_then(|()| errors.flush())
                .context("failed to write usage error")?;
            return Ok(ExitCode::FAILURE);
        }
    };

    if options.help_requested {
        presenter.show_manual().context("failed to write manual")?;
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = run_play(&options, generator, input, presenter)?;
    tracing::info!(?outcome, "session finished");

    Ok(ExitCode::SUCCESS)
}
