//! # gridcalc-formula
//!
//! Formula content model and evaluator for gridcalc.
//!
//! This crate provides:
//! - Content trees (literals, references, functions)
//! - Evaluation against a grid snapshot ([`EvaluationContext`], [`Sheet`])
//! - Rendering of formulas as `value=NAME(args)` display strings
//! - Built-in binary and interval functions
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::CellAddress;
//! use gridcalc_formula::{BinaryFunction, Content, EvaluationContext, Reference, Sheet};
//!
//! let mut sheet = Sheet::new(10, 10);
//! sheet.insert(CellAddress::new(0, 1), 12).unwrap();
//!
//! let sub = BinaryFunction::new(
//!     "SUB",
//!     Reference::new(CellAddress::new(0, 1)).into(),
//!     Content::from(4),
//! )
//! .unwrap();
//!
//! let ctx = EvaluationContext::new(&sheet);
//! assert_eq!(sub.render(&ctx).unwrap(), "8=SUB(0;1,4)");
//! ```

pub mod content;
pub mod error;
pub mod evaluator;
pub mod function;
pub mod functions;
pub mod sheet;

pub use content::{Content, Reference};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate, render, CellLookup, EvaluationContext};
pub use function::{parse_argument, BinaryFunction, Function, IntervalFunction};
pub use functions::{registry, BinaryImpl, FunctionRegistry, IntervalImpl};
pub use sheet::Sheet;
