//! Prelude module - common imports for gridcalc users
//!
//! ```rust
//! use gridcalc::prelude::*;
//! ```

pub use crate::{
    // Formula tree types
    BinaryFunction,
    // Address types
    CellAddress,
    CellError,
    CellRange,
    Content,
    // Display types
    DisplayOptions,
    DisplayReport,
    EvaluationContext,
    FormulaError,
    FormulaResult,
    Function,
    IntervalFunction,
    // Values
    Literal,
    Reference,
    // Grid
    Sheet,
    // Extension traits
    SheetDisplayExt,
};
