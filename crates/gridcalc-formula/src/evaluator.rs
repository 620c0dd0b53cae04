//! Formula evaluator
//!
//! Evaluates content trees to produce literal values. Cell references are
//! resolved through a [`CellLookup`] snapshot owned by the caller; evaluation
//! never mutates it.

use crate::content::Content;
use crate::error::{FormulaError, FormulaResult};
use gridcalc_core::{CellAddress, Literal};

/// Read-only access to the contents of a grid
///
/// Implementors return `Ok(None)` for an empty cell and an error for an
/// address that lies outside the grid.
pub trait CellLookup {
    /// Get the content stored at `address`
    fn lookup(&self, address: CellAddress) -> FormulaResult<Option<&Content>>;
}

/// Context for formula evaluation
#[derive(Clone, Copy)]
pub struct EvaluationContext<'a> {
    /// Snapshot used to resolve cell references
    cells: Option<&'a dyn CellLookup>,
}

impl<'a> EvaluationContext<'a> {
    /// Create a new evaluation context over a grid snapshot
    pub fn new(cells: &'a dyn CellLookup) -> Self {
        Self { cells: Some(cells) }
    }

    /// Create a simple context without a grid (for testing)
    ///
    /// Any reference evaluated in this context fails with
    /// [`FormulaError::InvalidReference`].
    pub fn simple() -> Self {
        Self { cells: None }
    }

    /// Resolve a cell address to the content stored there
    pub fn resolve(&self, address: CellAddress) -> FormulaResult<Option<&'a Content>> {
        let cells = self.cells.ok_or_else(|| {
            FormulaError::InvalidReference(format!("No sheet context for reference {}", address))
        })?;

        cells.lookup(address)
    }

    /// Get the value of a cell, evaluating its content if needed
    ///
    /// An empty cell evaluates to [`Literal::Empty`].
    pub fn get_cell_value(&self, address: CellAddress) -> FormulaResult<Literal> {
        match self.resolve(address)? {
            Some(content) => content.value(self),
            None => {
                log::debug!("reference {} resolved to an empty cell", address);
                Ok(Literal::Empty)
            }
        }
    }
}

impl std::fmt::Debug for EvaluationContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvaluationContext")
            .field("has_cells", &self.cells.is_some())
            .finish()
    }
}

/// Evaluate a content tree
pub fn evaluate(content: &Content, ctx: &EvaluationContext) -> FormulaResult<Literal> {
    content.value(ctx)
}

/// Render a content tree as its display string
pub fn render(content: &Content, ctx: &EvaluationContext) -> FormulaResult<String> {
    content.render(ctx)
}
