//! Cell-related types
//!
//! This module contains:
//! - [`Literal`] - A concrete value (number, text, boolean, error)
//! - [`CellAddress`] - A cell's location (e.g., "0;1")
//! - [`CellRange`] - A run of cells (e.g., "0;0:0;4")

mod address;
mod value;

pub use address::{CellAddress, CellRange, CellRangeIterator, ADDRESS_SEPARATOR, RANGE_SEPARATOR};
pub use value::{CellError, Literal};
