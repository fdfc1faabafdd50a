//! Error types for Cellgrid core.

use thiserror::Error;

use cellgrid_engine::engine::FormulaError;

/// Errors surfaced to whoever drives a [`crate::Document`].
///
/// Formula problems are normally reported through
/// [`crate::EditOutcome::Ignored`] instead; the `Formula` variant is for
/// callers that want to turn them into hard errors.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Invalid cell reference: {0}")]
    InvalidCellRef(String),

    #[error("Formula error: {0}")]
    Formula(#[from] FormulaError),
}

pub type Result<T> = std::result::Result<T, GridError>;
