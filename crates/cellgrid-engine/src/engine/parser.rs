//! Formula parsing.
//!
//! A formula is a single function applied to an argument list:
//!
//! ```text
//! =SUM(A1:A10)
//! =upper(B2)
//! =SUMA1:A10
//! =AVERAGE C1:C4
//! ```
//!
//! The function name is case-insensitive and the argument text follows it
//! directly, wrapped in parentheses or not. Only the first
//! comma-separated argument is used by any function; the rest are kept on
//! [`FormulaCall::args`] but have no effect.

use std::fmt;

use super::error::FormulaError;

/// Functions a formula may call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    Sum,
    Average,
    Max,
    Min,
    Count,
    Upper,
    Lower,
}

impl Function {
    pub const ALL: [Function; 7] = [
        Function::Sum,
        Function::Average,
        Function::Max,
        Function::Min,
        Function::Count,
        Function::Upper,
        Function::Lower,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Function::Sum => "SUM",
            Function::Average => "AVERAGE",
            Function::Max => "MAX",
            Function::Min => "MIN",
            Function::Count => "COUNT",
            Function::Upper => "UPPER",
            Function::Lower => "LOWER",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Function> {
        Function::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormulaCall {
    pub function: Function,
    /// Trimmed comma-separated arguments; never empty.
    pub args: Vec<String>,
}

impl FormulaCall {
    /// The argument every function consumes.
    pub fn first_arg(&self) -> &str {
        self.args.first().map(String::as_str).unwrap_or_default()
    }

    /// Arguments beyond the first, which are accepted but unused.
    pub fn ignored_args(&self) -> &[String] {
        self.args.get(1..).unwrap_or_default()
    }
}

/// Parse formula text, with or without the leading `=`.
pub fn parse_formula(input: &str) -> Result<FormulaCall, FormulaError> {
    let body = input.trim();
    let body = body.strip_prefix('=').unwrap_or(body).trim_start();
    if body.is_empty() {
        return Err(FormulaError::Empty);
    }

    let (function, rest) = split_function(body).ok_or_else(|| unknown_function(body))?;

    let arg_text = parse_argument_blob(rest)?;
    let args: Vec<String> = arg_text.split(',').map(|a| a.trim().to_string()).collect();
    if args.first().is_none_or(|a| a.is_empty()) {
        return Err(FormulaError::MissingArguments(function));
    }

    Ok(FormulaCall { function, args })
}

/// Split off the longest function name `body` starts with.
fn split_function(body: &str) -> Option<(Function, &str)> {
    Function::ALL
        .into_iter()
        .filter(|f| {
            body.get(..f.name().len())
                .is_some_and(|head| head.eq_ignore_ascii_case(f.name()))
        })
        .max_by_key(|f| f.name().len())
        .map(|f| (f, &body[f.name().len()..]))
}

fn unknown_function(body: &str) -> FormulaError {
    let name_end = body
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(body.len());
    match &body[..name_end] {
        "" => FormulaError::Syntax(body.to_string()),
        name => FormulaError::UnknownFunction(name.to_string()),
    }
}

/// Extract the raw argument text following the function name.
fn parse_argument_blob(rest: &str) -> Result<&str, FormulaError> {
    let trimmed = rest.trim();
    if let Some(after_open) = trimmed.strip_prefix('(') {
        let close = after_open.find(')').ok_or(FormulaError::Unbalanced)?;
        let inner = &after_open[..close];
        if inner.contains('(') {
            return Err(FormulaError::Unbalanced);
        }
        let trailing = after_open[close + 1..].trim();
        if !trailing.is_empty() {
            return Err(FormulaError::Syntax(trailing.to_string()));
        }
        return Ok(inner);
    }

    if trimmed.contains(['(', ')']) {
        return Err(FormulaError::Unbalanced);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn call(function: Function, args: &[&str]) -> FormulaCall {
        FormulaCall {
            function,
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_parenthesized() {
        assert_eq!(
            parse_formula("=SUM(A1:A3)").unwrap(),
            call(Function::Sum, &["A1:A3"])
        );
        assert_eq!(
            parse_formula("AVERAGE( B1:B9 )").unwrap(),
            call(Function::Average, &["B1:B9"])
        );
    }

    #[test]
    fn test_parse_case_insensitive_name() {
        assert_eq!(parse_formula("=upper(A1)").unwrap().function, Function::Upper);
        assert_eq!(parse_formula("=Count(A1:A2)").unwrap().function, Function::Count);
    }

    #[test]
    fn test_parse_bare_arguments() {
        assert_eq!(
            parse_formula("=MAX C1:C4").unwrap(),
            call(Function::Max, &["C1:C4"])
        );
        assert_eq!(
            parse_formula("=SUMA1:A3").unwrap(),
            call(Function::Sum, &["A1:A3"])
        );
        assert_eq!(
            parse_formula("=upperB2").unwrap(),
            call(Function::Upper, &["B2"])
        );
        assert_eq!(
            parse_formula("=countA1:A9,B1").unwrap(),
            call(Function::Count, &["A1:A9", "B1"])
        );
    }

    #[test]
    fn test_parse_extra_arguments_kept_but_ignored() {
        let parsed = parse_formula("=SUM(A1:A3, B1:B3,7)").unwrap();
        assert_eq!(parsed.first_arg(), "A1:A3");
        assert_eq!(parsed.ignored_args(), &["B1:B3".to_string(), "7".to_string()]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_formula("="), Err(FormulaError::Empty));
        assert_eq!(
            parse_formula("=FOO(A1)"),
            Err(FormulaError::UnknownFunction("FOO".into()))
        );
        assert_eq!(
            parse_formula("=PRODUCTA1:A3"),
            Err(FormulaError::UnknownFunction("PRODUCTA1".into()))
        );
        assert_eq!(parse_formula("=SUM A1)"), Err(FormulaError::Unbalanced));
        assert_eq!(
            parse_formula("=SUM()"),
            Err(FormulaError::MissingArguments(Function::Sum))
        );
        assert_eq!(
            parse_formula("=MIN"),
            Err(FormulaError::MissingArguments(Function::Min))
        );
        assert_eq!(parse_formula("=SUM(A1:A3"), Err(FormulaError::Unbalanced));
        assert_eq!(parse_formula("=SUM((A1:A3)"), Err(FormulaError::Unbalanced));
        assert_eq!(
            parse_formula("=SUM(A1:A3) + 1"),
            Err(FormulaError::Syntax("+ 1".into()))
        );
        assert_eq!(
            parse_formula("=1+2"),
            Err(FormulaError::UnknownFunction("1".into()))
        );
        assert_eq!(parse_formula("=+"), Err(FormulaError::Syntax("+".into())));
    }

    #[test]
    fn test_function_names() {
        for function in Function::ALL {
            assert_eq!(Function::from_name(function.name()), Some(function));
            assert_eq!(
                Function::from_name(&function.name().to_lowercase()),
                Some(function)
            );
        }
    }
}
