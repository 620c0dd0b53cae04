//! # gridcalc
//!
//! Spreadsheet formula trees that evaluate and render themselves.
//!
//! Every cell holds a content node: a literal, a reference to another cell,
//! or a named function over further contents. Evaluating a node walks the
//! tree down to literal values; rendering a function produces the familiar
//! `value=NAME(args)` display string, where each argument is echoed as what
//! was referenced or combined rather than as its value.
//!
//! ## Example
//!
//! ```rust
//! use gridcalc::prelude::*;
//!
//! let mut sheet = Sheet::new(10, 10);
//! sheet.insert(CellAddress::new(0, 1), 12).unwrap();
//!
//! let inner = BinaryFunction::new("ADD", Content::from(2), Content::from(3)).unwrap();
//! let outer = BinaryFunction::new("MUL", inner.into(), Content::from(10)).unwrap();
//! sheet.insert(CellAddress::new(1, 0), outer).unwrap();
//!
//! assert_eq!(sheet.render_at(CellAddress::new(1, 0)).unwrap(), "50=MUL(ADD(2,3),10)");
//!
//! let report = sheet.display_cells(&DisplayOptions::default());
//! assert_eq!(report.cells[0].to_string(), "0;1|12");
//! ```

pub mod display;
pub mod prelude;

// Re-export display types
pub use display::{CellDisplay, DisplayOptions, DisplayReport, DisplayStats, SheetDisplayExt};

// Re-export core types
pub use gridcalc_core::{
    CellAddress, CellError, CellRange, Error, Literal, Result, MAX_COLS, MAX_ROWS,
};

// Re-export formula types
pub use gridcalc_formula::{
    evaluate, parse_argument, registry, render, BinaryFunction, BinaryImpl, CellLookup, Content,
    EvaluationContext, FormulaError, FormulaResult, Function, FunctionRegistry, IntervalFunction,
    IntervalImpl, Reference, Sheet,
};
