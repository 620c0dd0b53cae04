//! Two-operand functions

use super::{call_text, validate_name};
use crate::content::Content;
use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::EvaluationContext;
use crate::functions::{registry, BinaryImpl};
use gridcalc_core::Literal;
use std::fmt;

/// A function over exactly two operand contents
///
/// The operands are fixed at construction. Evaluating the function evaluates
/// both operands against the context and combines the two values with the
/// function's implementation; nothing is cached or mutated, so repeated calls
/// against an unchanged grid give equal results.
#[derive(Clone)]
pub struct BinaryFunction {
    name: String,
    implementation: BinaryImpl,
    left: Box<Content>,
    right: Box<Content>,
}

impl BinaryFunction {
    /// Create a built-in binary function by name (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use gridcalc_formula::{BinaryFunction, Content, EvaluationContext};
    ///
    /// let add = BinaryFunction::new("ADD", Content::from(5), Content::from(3)).unwrap();
    /// let ctx = EvaluationContext::simple();
    /// assert_eq!(add.render(&ctx).unwrap(), "8=ADD(5,3)");
    /// ```
    pub fn new(name: &str, left: Content, right: Content) -> FormulaResult<Self> {
        let (name, implementation) = registry().binary(validate_name(name)?)?;
        Ok(Self::build(name.to_string(), implementation, left, right))
    }

    /// Create a binary function with a caller-supplied combination step
    pub fn with_implementation(
        name: &str,
        left: Content,
        right: Content,
        implementation: BinaryImpl,
    ) -> FormulaResult<Self> {
        let name = validate_name(name)?;
        Ok(Self::build(name.to_string(), implementation, left, right))
    }

    /// Create a built-in binary function from operands that may be missing
    ///
    /// Fails with [`FormulaError::MissingOperand`] naming the first absent
    /// operand.
    pub fn try_new(
        name: &str,
        left: Option<Content>,
        right: Option<Content>,
    ) -> FormulaResult<Self> {
        let missing = |position: &'static str| {
            log::warn!("{} built without its {} operand", name, position);
            FormulaError::MissingOperand {
                function: name.to_string(),
                position,
            }
        };

        let left = left.ok_or_else(|| missing("left"))?;
        let right = right.ok_or_else(|| missing("right"))?;
        Self::new(name, left, right)
    }

    /// Create a built-in binary function from an argument list
    ///
    /// The list must hold exactly two contents.
    pub fn from_args(name: &str, args: Vec<Content>) -> FormulaResult<Self> {
        let [left, right]: [Content; 2] = args.try_into().map_err(|args: Vec<Content>| {
            log::warn!("{} called with {} arguments", name, args.len());
            FormulaError::ArgumentCount {
                function: name.to_string(),
                expected: "2".into(),
                actual: args.len(),
            }
        })?;
        Self::new(name, left, right)
    }

    fn build(name: String, implementation: BinaryImpl, left: Content, right: Content) -> Self {
        Self {
            name,
            implementation,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The function name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The left operand
    pub fn left(&self) -> &Content {
        &self.left
    }

    /// The right operand
    pub fn right(&self) -> &Content {
        &self.right
    }

    /// Compute the result of this function
    pub fn value(&self, ctx: &EvaluationContext) -> FormulaResult<Literal> {
        log::trace!("evaluating {}", self.argument_text());
        self.compute_value(ctx)
    }

    /// Evaluate both operands, then combine them
    fn compute_value(&self, ctx: &EvaluationContext) -> FormulaResult<Literal> {
        let left = self.left.value(ctx)?;
        let right = self.right.value(ctx)?;
        (self.implementation)(&left, &right)
    }

    /// Render the display string: `"<value>=<NAME>(<left>,<right>)"`
    pub fn render(&self, ctx: &EvaluationContext) -> FormulaResult<String> {
        Ok(format!("{}={}", self.value(ctx)?, self.argument_text()))
    }

    /// Render the argument text: `"<NAME>(<left>,<right>)"`
    pub fn argument_text(&self) -> String {
        call_text(
            &self.name,
            [self.left.argument_text(), self.right.argument_text()],
        )
    }
}

impl PartialEq for BinaryFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.left == other.left && self.right == other.right
    }
}

impl fmt::Debug for BinaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryFunction")
            .field("name", &self.name)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
