//! Content tree nodes
//!
//! Every cell holds a [`Content`]: a literal value, a reference to another
//! cell, or a function over further contents. Each node can be evaluated
//! down to a [`Literal`] and rendered in two ways:
//!
//! - its display string (`render`), e.g. `"12=0;1"` for a reference to a cell
//!   holding 12, or `"5=ADD(2,3)"` for a function
//! - its argument text (`argument_text`), the part an enclosing function
//!   echoes inside its parentheses, e.g. `"0;1"` or `"ADD(2,3)"`

use crate::error::FormulaResult;
use crate::evaluator::EvaluationContext;
use crate::function::{BinaryFunction, Function, IntervalFunction};
use gridcalc_core::{CellAddress, CellError, Literal};
use std::fmt;

/// A node in a formula tree
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Concrete value
    Literal(Literal),
    /// Reference to another cell
    Reference(Reference),
    /// Named function over operand contents
    Function(Function),
}

impl Content {
    /// Evaluate this node to a concrete value
    pub fn value(&self, ctx: &EvaluationContext) -> FormulaResult<Literal> {
        match self {
            Content::Literal(literal) => Ok(literal.clone()),
            Content::Reference(reference) => reference.value(ctx),
            Content::Function(function) => function.value(ctx),
        }
    }

    /// Render the display string of this node
    pub fn render(&self, ctx: &EvaluationContext) -> FormulaResult<String> {
        match self {
            Content::Literal(literal) => Ok(literal.to_string()),
            Content::Reference(reference) => reference.render(ctx),
            Content::Function(function) => function.render(ctx),
        }
    }

    /// Text this node contributes to an enclosing function's argument list
    ///
    /// Never includes a computed value, so it needs no evaluation context.
    pub fn argument_text(&self) -> String {
        match self {
            Content::Literal(literal) => literal.to_string(),
            Content::Reference(reference) => reference.argument_text(),
            Content::Function(function) => function.argument_text(),
        }
    }

    /// Check if this node is computed (a reference or a function)
    pub fn is_formula(&self) -> bool {
        !matches!(self, Content::Literal(_))
    }
}

impl From<Literal> for Content {
    fn from(literal: Literal) -> Self {
        Content::Literal(literal)
    }
}

impl From<f64> for Content {
    fn from(n: f64) -> Self {
        Content::Literal(n.into())
    }
}

impl From<i32> for Content {
    fn from(n: i32) -> Self {
        Content::Literal(n.into())
    }
}

impl From<i64> for Content {
    fn from(n: i64) -> Self {
        Content::Literal(n.into())
    }
}

impl From<bool> for Content {
    fn from(b: bool) -> Self {
        Content::Literal(b.into())
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Literal(s.into())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Literal(s.into())
    }
}

impl From<CellError> for Content {
    fn from(e: CellError) -> Self {
        Content::Literal(e.into())
    }
}

impl From<Reference> for Content {
    fn from(reference: Reference) -> Self {
        Content::Reference(reference)
    }
}

impl From<Function> for Content {
    fn from(function: Function) -> Self {
        Content::Function(function)
    }
}

impl From<BinaryFunction> for Content {
    fn from(function: BinaryFunction) -> Self {
        Content::Function(Function::Binary(function))
    }
}

impl From<IntervalFunction> for Content {
    fn from(function: IntervalFunction) -> Self {
        Content::Function(Function::Interval(function))
    }
}

/// A reference to the content of another cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reference {
    address: CellAddress,
}

impl Reference {
    /// Create a reference to `address`
    pub fn new(address: CellAddress) -> Self {
        Self { address }
    }

    /// Parse a reference from "row;col" notation
    pub fn parse(s: &str) -> FormulaResult<Self> {
        Ok(Self::new(CellAddress::parse(s)?))
    }

    /// The referenced address
    pub fn address(&self) -> CellAddress {
        self.address
    }

    /// Value of the referenced cell
    pub fn value(&self, ctx: &EvaluationContext) -> FormulaResult<Literal> {
        ctx.get_cell_value(self.address)
    }

    /// Display string: `"value=row;col"`
    pub fn render(&self, ctx: &EvaluationContext) -> FormulaResult<String> {
        Ok(format!("{}={}", self.value(ctx)?, self.address))
    }

    /// Argument text: the address alone
    pub fn argument_text(&self) -> String {
        self.address.to_string()
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

impl From<CellAddress> for Reference {
    fn from(address: CellAddress) -> Self {
        Reference::new(address)
    }
}
