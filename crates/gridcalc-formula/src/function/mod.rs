//! Function nodes
//!
//! A function names a computation over operand contents. Every arity renders
//! the same way: `<value>=<NAME>(<arg>,<arg>,...)`, where each argument is
//! the operand's argument text rather than its display string.

mod binary;
mod interval;

pub use binary::BinaryFunction;
pub use interval::IntervalFunction;

use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::EvaluationContext;
use gridcalc_core::Literal;

/// A named, evaluable content node
#[derive(Debug, Clone, PartialEq)]
pub enum Function {
    /// Exactly two operand contents
    Binary(BinaryFunction),
    /// One run of cells
    Interval(IntervalFunction),
}

impl Function {
    /// The function name (e.g. "ADD")
    pub fn name(&self) -> &str {
        match self {
            Function::Binary(f) => f.name(),
            Function::Interval(f) => f.name(),
        }
    }

    /// Compute the result of this function
    pub fn value(&self, ctx: &EvaluationContext) -> FormulaResult<Literal> {
        match self {
            Function::Binary(f) => f.value(ctx),
            Function::Interval(f) => f.value(ctx),
        }
    }

    /// Render the display string: `"<value>=<NAME>(<args>)"`
    pub fn render(&self, ctx: &EvaluationContext) -> FormulaResult<String> {
        match self {
            Function::Binary(f) => f.render(ctx),
            Function::Interval(f) => f.render(ctx),
        }
    }

    /// Render the argument text: `"<NAME>(<args>)"`
    pub fn argument_text(&self) -> String {
        match self {
            Function::Binary(f) => f.argument_text(),
            Function::Interval(f) => f.argument_text(),
        }
    }
}

impl From<BinaryFunction> for Function {
    fn from(function: BinaryFunction) -> Self {
        Function::Binary(function)
    }
}

impl From<IntervalFunction> for Function {
    fn from(function: IntervalFunction) -> Self {
        Function::Interval(function)
    }
}

/// Recover the argument text from a display string
///
/// A display string of the form `value=rest` yields `rest`; anything without
/// an `=` is returned unchanged. Only the first `=` splits, so
/// `"a=b=c"` yields `"b=c"`.
///
/// Content nodes expose [`argument_text`](crate::Content::argument_text)
/// directly; this is for display strings that arrive from elsewhere.
pub fn parse_argument(rendering: &str) -> &str {
    match rendering.split_once('=') {
        Some((_, argument)) => argument,
        None => rendering,
    }
}

/// Check a function name and return it trimmed
pub(crate) fn validate_name(name: &str) -> FormulaResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.contains(['=', '(', ')', ',']) {
        log::warn!("rejected function name {:?}", name);
        return Err(FormulaError::InvalidName(name.to_string()));
    }
    Ok(trimmed)
}

/// Assemble `NAME(arg1,arg2,...)`
pub(crate) fn call_text<I, S>(name: &str, args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::with_capacity(name.len() + 2);
    text.push_str(name);
    text.push('(');
    for (i, arg) in args.into_iter().enumerate() {
        if i > 0 {
            text.push(',');
        }
        text.push_str(arg.as_ref());
    }
    text.push(')');
    text
}
