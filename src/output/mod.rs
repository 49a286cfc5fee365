//! Terminal output
//!
//! A `Presenter` renders the game; the plain and decorated variants share the
//! same game core.

mod decorated;
pub mod formatters;
mod plain;
pub mod presenter;

pub use decorated::DecoratedPresenter;
pub use plain::PlainPresenter;
pub use presenter::{Presenter, select_presenter};
