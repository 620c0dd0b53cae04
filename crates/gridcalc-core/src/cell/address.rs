//! Cell address and range types

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// Separator between the row and column of an address ("row;col")
pub const ADDRESS_SEPARATOR: char = ';';

/// Separator between the two ends of a range ("r;c:r;c")
pub const RANGE_SEPARATOR: char = ':';

/// A cell address in "row;col" notation (e.g., "0;1")
///
/// Both coordinates are 0-based and are rendered exactly as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row index (0-based)
    pub row: u32,
    /// Column index (0-based)
    pub col: u16,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from "row;col" notation
    ///
    /// # Examples
    /// ```
    /// use gridcalc_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("3;7").unwrap();
    /// assert_eq!(addr.row, 3);
    /// assert_eq!(addr.col, 7);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let (row_str, col_str) = s
            .split_once(ADDRESS_SEPARATOR)
            .ok_or_else(|| Error::InvalidAddress(format!("missing ';' in '{}'", s)))?;

        let row: u32 = row_str
            .trim()
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        let col: u32 = col_str
            .trim()
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid column number in '{}'", s)))?;

        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }

        if col >= MAX_COLS as u32 {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS as u32 - 1));
        }

        Ok(Self::new(row, col as u16))
    }

    /// Create a range from this address to another
    pub fn to(&self, other: CellAddress) -> Result<CellRange> {
        CellRange::new(*self, other)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.row, ADDRESS_SEPARATOR, self.col)
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A run of cells along one row or one column (e.g., "0;0:0;4")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRange {
    /// First cell of the run
    pub start: CellAddress,
    /// Last cell of the run (inclusive)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range
    ///
    /// The two ends must share a row or a column, and `start` must not come
    /// after `end`.
    pub fn new(start: CellAddress, end: CellAddress) -> Result<Self> {
        if start.row != end.row && start.col != end.col {
            return Err(Error::InvalidRange(format!(
                "{}{}{} is neither a row nor a column",
                start, RANGE_SEPARATOR, end
            )));
        }

        if start > end {
            return Err(Error::InvalidRange(format!(
                "{}{}{} is reversed",
                start, RANGE_SEPARATOR, end
            )));
        }

        Ok(Self { start, end })
    }

    /// Create a single-cell range
    pub fn single(addr: CellAddress) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    /// Parse a range from "r;c:r;c" notation
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some((start, end)) = s.split_once(RANGE_SEPARATOR) {
            Self::new(CellAddress::parse(start)?, CellAddress::parse(end)?)
        } else {
            // Single cell range
            let addr = CellAddress::parse(s)?;
            Ok(Self::single(addr))
        }
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.col >= self.start.col
            && addr.col <= self.end.col
    }

    /// Number of cells in the range
    pub fn len(&self) -> usize {
        let rows = (self.end.row - self.start.row) as usize + 1;
        let cols = (self.end.col - self.start.col) as usize + 1;
        rows * cols
    }

    /// A range always holds at least one cell
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over all cell addresses in the range, first to last
    pub fn cells(&self) -> CellRangeIterator {
        CellRangeIterator {
            range: *self,
            current_row: self.start.row,
            current_col: self.start.col,
            remaining: self.len(),
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start, RANGE_SEPARATOR, self.end)
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over cells in a range
pub struct CellRangeIterator {
    range: CellRange,
    current_row: u32,
    current_col: u16,
    remaining: usize,
}

impl Iterator for CellRangeIterator {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let addr = CellAddress::new(self.current_row, self.current_col);
        self.remaining -= 1;

        // Ranges are a single row or a single column
        if self.range.start.row == self.range.end.row {
            self.current_col = self.current_col.saturating_add(1);
        } else {
            self.current_row = self.current_row.saturating_add(1);
        }

        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CellRangeIterator {}
