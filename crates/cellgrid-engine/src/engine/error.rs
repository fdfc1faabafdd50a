//! Formula errors.

use thiserror::Error;

use super::parser::Function;

/// Reasons a formula produces no value.
///
/// None of these are fatal: the document treats them as "leave the cell
/// alone" and keeps accepting edits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("Formula is empty")]
    Empty,

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("{0} expects an argument")]
    MissingArguments(Function),

    #[error("Unbalanced parentheses in formula")]
    Unbalanced,

    #[error("Unexpected text in formula: {0}")]
    Syntax(String),

    #[error("{function} over an empty range: {range}")]
    EmptyRange { function: Function, range: String },
}
