//! # gridcalc-core
//!
//! Core data structures for the gridcalc formula engine.
//!
//! This crate provides the leaf types every formula tree bottoms out at:
//! - [`Literal`] - A concrete value (numbers, text, booleans, errors)
//! - [`CellAddress`] and [`CellRange`] - Cell addressing in "row;col" notation
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::{CellAddress, CellRange, Literal};
//!
//! let addr = CellAddress::parse("0;1").unwrap();
//! assert_eq!(addr.to_string(), "0;1");
//!
//! let range = CellRange::parse("0;0:0;3").unwrap();
//! assert_eq!(range.len(), 4);
//!
//! assert_eq!(Literal::from(8).to_string(), "8");
//! ```

pub mod cell;
pub mod error;

// Re-exports for convenience
pub use cell::{CellAddress, CellError, CellRange, Literal};
pub use error::{Error, Result};

/// Maximum number of rows in a sheet
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a sheet
pub const MAX_COLS: u16 = 16_384;
