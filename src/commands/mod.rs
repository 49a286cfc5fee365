//! Command implementations

pub mod cli;
pub mod play;

pub use cli::run;
pub use play::run_play;
