//! Functions over a run of cells

use super::{call_text, validate_name};
use crate::error::FormulaResult;
use crate::evaluator::EvaluationContext;
use crate::functions::{registry, IntervalImpl};
use gridcalc_core::{CellRange, Literal};
use std::fmt;

/// A function folding the values of one cell range (e.g. `AVERAGE(0;0:0;3)`)
#[derive(Clone)]
pub struct IntervalFunction {
    name: String,
    implementation: IntervalImpl,
    range: CellRange,
}

impl IntervalFunction {
    /// Create a built-in interval function by name (case-insensitive)
    pub fn new(name: &str, range: CellRange) -> FormulaResult<Self> {
        let (name, implementation) = registry().interval(validate_name(name)?)?;
        Ok(Self {
            name: name.to_string(),
            implementation,
            range,
        })
    }

    /// Create an interval function with a caller-supplied fold
    pub fn with_implementation(
        name: &str,
        range: CellRange,
        implementation: IntervalImpl,
    ) -> FormulaResult<Self> {
        Ok(Self {
            name: validate_name(name)?.to_string(),
            implementation,
            range,
        })
    }

    /// The function name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The range the function reads
    pub fn range(&self) -> CellRange {
        self.range
    }

    /// Compute the result of this function
    pub fn value(&self, ctx: &EvaluationContext) -> FormulaResult<Literal> {
        log::trace!("evaluating {}", self.argument_text());
        let values = self
            .range
            .cells()
            .map(|address| ctx.get_cell_value(address))
            .collect::<FormulaResult<Vec<_>>>()?;
        (self.implementation)(&values)
    }

    /// Render the display string: `"<value>=<NAME>(<range>)"`
    pub fn render(&self, ctx: &EvaluationContext) -> FormulaResult<String> {
        Ok(format!("{}={}", self.value(ctx)?, self.argument_text()))
    }

    /// Render the argument text: `"<NAME>(<range>)"`
    pub fn argument_text(&self) -> String {
        call_text(&self.name, [self.range.to_string()])
    }
}

impl PartialEq for IntervalFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.range == other.range
    }
}

impl fmt::Debug for IntervalFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalFunction")
            .field("name", &self.name)
            .field("range", &self.range)
            .finish()
    }
}
