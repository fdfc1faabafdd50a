//! Formula evaluation.
//!
//! Evaluation is a single pass over a borrowed [`CellStore`]: parse, resolve
//! the first argument, apply the function. Nothing is written back here;
//! committing the result is the document's job.

use super::cell::CellValue;
use super::error::FormulaError;
use super::format::format_number;
use super::parser::{FormulaCall, Function, parse_formula};
use super::range::{resolve_range, resolve_single};
use super::store::CellStore;

/// Parse and evaluate formula text against the store.
pub fn evaluate(store: &CellStore, formula: &str) -> Result<CellValue, FormulaError> {
    let call = parse_formula(formula)?;
    evaluate_call(store, &call)
}

/// Evaluate an already parsed formula.
pub fn evaluate_call(store: &CellStore, call: &FormulaCall) -> Result<CellValue, FormulaError> {
    if !call.ignored_args().is_empty() {
        log::debug!(
            "{}: ignoring extra arguments {:?}",
            call.function,
            call.ignored_args()
        );
    }

    let arg = call.first_arg();
    let value = match call.function {
        Function::Upper => CellValue::Text(resolve_single(store, arg).to_uppercase()),
        Function::Lower => CellValue::Text(resolve_single(store, arg).to_lowercase()),
        Function::Sum => CellValue::Number(resolve_range(store, arg).iter().sum()),
        Function::Average => {
            let values = resolve_range(store, arg);
            if values.is_empty() {
                CellValue::Number(0.0)
            } else {
                CellValue::Number(values.iter().sum::<f64>() / values.len() as f64)
            }
        }
        Function::Max => resolve_range(store, arg)
            .into_iter()
            .reduce(f64::max)
            .map(CellValue::Number)
            .ok_or_else(|| empty_range(call))?,
        Function::Min => resolve_range(store, arg)
            .into_iter()
            .reduce(f64::min)
            .map(CellValue::Number)
            .ok_or_else(|| empty_range(call))?,
        Function::Count => CellValue::Number(resolve_range(store, arg).len() as f64),
    };
    Ok(settle(value))
}

/// Non-finite numbers have no snapshot form, so they are kept as their
/// display marker (`#INF!`, `#NAN!`).
fn settle(value: CellValue) -> CellValue {
    match value {
        CellValue::Number(n) if !n.is_finite() => CellValue::Text(format_number(n)),
        other => other,
    }
}

fn empty_range(call: &FormulaCall) -> FormulaError {
    FormulaError::EmptyRange {
        function: call.function,
        range: call.first_arg().to_string(),
    }
}
