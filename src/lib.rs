//! Mastermind
//!
//! A terminal Mastermind game: find a 4-digit secret code (digits 0-8) from
//! well-placed and misplaced feedback before the attempts run out.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Guess, Score, SecretCode};
//!
//! let secret = SecretCode::from_override(1234).unwrap();
//! let guess = Guess::parse(b"4321\n").unwrap();
//!
//! let score = Score::calculate(&secret, &guess);
//! assert_eq!(score, Score::Partial { well_placed: 0, misplaced: 4 });
//! ```

// Core domain types
pub mod core;

// Command-line options
pub mod options;

// Game state and turn loop
pub mod game;

// Command implementations
pub mod commands;

// Terminal output
pub mod output;

// Diagnostics
pub mod logging;
