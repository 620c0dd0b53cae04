//! Sheet display
//!
//! Renders the cells of a [`Sheet`] the way a grid shows them: one line per
//! cell, `row;col|display`. Evaluation failures never abort the pass; the
//! failing cell shows an error marker instead and is counted in the stats.
//!
//! # Example
//!
//! ```rust
//! use gridcalc::prelude::*;
//!
//! let mut sheet = Sheet::new(2, 2);
//! sheet.insert(CellAddress::new(0, 0), 5).unwrap();
//!
//! let range = CellRange::parse("0;0:0;1").unwrap();
//! let report = sheet.display_range(range, &DisplayOptions::default()).unwrap();
//! let lines: Vec<String> = report.cells.iter().map(|c| c.to_string()).collect();
//! assert_eq!(lines, vec!["0;0|5", "0;1|"]);
//! ```

use crate::{CellAddress, CellError, CellRange, Content, FormulaError, FormulaResult, Sheet};
use std::fmt;

/// Options for rendering sheet cells
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    /// Text shown in place of a cell whose evaluation failed
    pub error_marker: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            error_marker: CellError::Value.as_str().to_string(),
        }
    }
}

/// Statistics from a display pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayStats {
    /// Number of cells rendered (empty cells included)
    pub cells_rendered: usize,
    /// Number of cells holding a reference or a function
    pub formula_cells: usize,
    /// Number of cells whose evaluation failed
    pub errors: usize,
}

/// One rendered cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellDisplay {
    /// Cell address
    pub address: CellAddress,
    /// Display string, or the error marker
    pub text: String,
    /// Whether evaluation failed
    pub failed: bool,
}

impl fmt::Display for CellDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.address, self.text)
    }
}

/// Result of a display pass
#[derive(Debug, Clone, Default)]
pub struct DisplayReport {
    /// Rendered cells, in the order they were visited
    pub cells: Vec<CellDisplay>,
    /// Pass statistics
    pub stats: DisplayStats,
}

impl DisplayReport {
    fn push(
        &mut self,
        address: CellAddress,
        content: Option<&Content>,
        sheet: &Sheet,
        options: &DisplayOptions,
    ) {
        self.stats.cells_rendered += 1;
        if content.is_some_and(Content::is_formula) {
            self.stats.formula_cells += 1;
        }

        let (text, failed) = match sheet.render_at(address) {
            Ok(text) => (text, false),
            Err(e) => {
                log::warn!("cell {} failed to evaluate: {}", address, e);
                self.stats.errors += 1;
                (options.error_marker.clone(), true)
            }
        };

        self.cells.push(CellDisplay {
            address,
            text,
            failed,
        });
    }
}

/// Extension trait for Sheet to add display methods
pub trait SheetDisplayExt {
    /// Render every non-empty cell in row-major order
    fn display_cells(&self, options: &DisplayOptions) -> DisplayReport;

    /// Render every cell of a range, empty cells included
    ///
    /// Fails if the range extends past the sheet.
    fn display_range(
        &self,
        range: CellRange,
        options: &DisplayOptions,
    ) -> FormulaResult<DisplayReport>;
}

impl SheetDisplayExt for Sheet {
    fn display_cells(&self, options: &DisplayOptions) -> DisplayReport {
        let mut report = DisplayReport::default();
        for (address, content) in self.iter() {
            report.push(address, Some(content), self, options);
        }
        report
    }

    fn display_range(
        &self,
        range: CellRange,
        options: &DisplayOptions,
    ) -> FormulaResult<DisplayReport> {
        if !self.contains(range.start) || !self.contains(range.end) {
            return Err(FormulaError::InvalidReference(format!(
                "range {} is outside a {}x{} sheet",
                range,
                self.rows(),
                self.cols()
            )));
        }

        let mut report = DisplayReport::default();
        for address in range.cells() {
            report.push(address, self.get(address), self, options);
        }
        Ok(report)
    }
}
