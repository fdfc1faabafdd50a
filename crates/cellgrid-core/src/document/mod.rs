//! Document state and logic (UI-agnostic).

mod io;
mod ops;
mod state;

pub use ops::EditOutcome;
pub use state::{DEFAULT_ROWS, DisplaySink, Document};
