//! Mastermind - CLI
//!
//! Guess the 4-digit secret code (digits 0-8) before the attempts run out.

use anyhow::Result;
use mastermind::{
    commands::run, core::CodeGenerator, logging::init_logging, output::select_presenter,
};
use std::io;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    run(
        args.as_slice(),
        &mut CodeGenerator::from_clock(),
        &mut io::stdin().lock(),
        select_presenter().as_mut(),
        &mut io::stderr(),
    )
}
