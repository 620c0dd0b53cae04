//! In-memory grid snapshot
//!
//! A fixed-size grid of [`Content`] that formula trees resolve their
//! references against. Cells are stored sparsely; an absent entry is an
//! empty cell.

use crate::content::Content;
use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::{CellLookup, EvaluationContext};
use ahash::AHashMap;
use gridcalc_core::{CellAddress, Literal, MAX_COLS, MAX_ROWS};

/// A grid of cell contents with fixed dimensions
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    rows: u32,
    cols: u16,
    cells: AHashMap<CellAddress, Content>,
}

impl Sheet {
    /// Create an empty sheet of `rows` x `cols` cells
    ///
    /// Dimensions are clamped to [`MAX_ROWS`] and [`MAX_COLS`].
    pub fn new(rows: u32, cols: u16) -> Self {
        Self {
            rows: rows.min(MAX_ROWS),
            cols: cols.min(MAX_COLS),
            cells: AHashMap::new(),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Check if an address lies inside the sheet
    pub fn contains(&self, address: CellAddress) -> bool {
        address.row < self.rows && address.col < self.cols
    }

    fn check_bounds(&self, address: CellAddress) -> FormulaResult<()> {
        if self.contains(address) {
            Ok(())
        } else {
            Err(FormulaError::InvalidReference(format!(
                "{} is outside a {}x{} sheet",
                address, self.rows, self.cols
            )))
        }
    }

    /// Store content in a cell, returning what was there before
    pub fn insert(
        &mut self,
        address: CellAddress,
        content: impl Into<Content>,
    ) -> FormulaResult<Option<Content>> {
        self.check_bounds(address)?;
        Ok(self.cells.insert(address, content.into()))
    }

    /// Get the content of a cell (`None` when empty or outside the sheet)
    pub fn get(&self, address: CellAddress) -> Option<&Content> {
        self.cells.get(&address)
    }

    /// Empty a cell, returning its previous content
    pub fn clear(&mut self, address: CellAddress) -> Option<Content> {
        self.cells.remove(&address)
    }

    /// Number of non-empty cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if every cell is empty
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over non-empty cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (CellAddress, &Content)> {
        let mut cells: Vec<_> = self.cells.iter().map(|(a, c)| (*a, c)).collect();
        cells.sort_unstable_by_key(|(address, _)| *address);
        cells.into_iter()
    }

    /// Evaluate the cell at `address`
    pub fn value_at(&self, address: CellAddress) -> FormulaResult<Literal> {
        EvaluationContext::new(self).get_cell_value(address)
    }

    /// Render the display string of the cell at `address`
    ///
    /// An empty cell renders as the empty string.
    pub fn render_at(&self, address: CellAddress) -> FormulaResult<String> {
        self.check_bounds(address)?;
        match self.get(address) {
            Some(content) => content.render(&EvaluationContext::new(self)),
            None => Ok(String::new()),
        }
    }
}

impl CellLookup for Sheet {
    fn lookup(&self, address: CellAddress) -> FormulaResult<Option<&Content>> {
        self.check_bounds(address)?;
        Ok(self.get(address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Reference;
    use crate::function::BinaryFunction;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_and_get() {
        let mut sheet = Sheet::new(3, 3);
        assert!(sheet.is_empty());

        assert_eq!(sheet.insert(CellAddress::new(1, 1), 5).unwrap(), None);
        assert_eq!(
            sheet.insert(CellAddress::new(1, 1), 6).unwrap(),
            Some(Content::from(5))
        );
        assert_eq!(sheet.get(CellAddress::new(1, 1)), Some(&Content::from(6)));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn test_insert_outside_bounds() {
        let mut sheet = Sheet::new(3, 3);
        let err = sheet.insert(CellAddress::new(3, 0), 1).unwrap_err();
        assert_eq!(err.to_string(), "Invalid reference: 3;0 is outside a 3x3 sheet");
    }

    #[test]
    fn test_clear() {
        let mut sheet = Sheet::new(2, 2);
        sheet.insert(CellAddress::new(0, 0), "a").unwrap();

        assert_eq!(sheet.clear(CellAddress::new(0, 0)), Some(Content::from("a")));
        assert_eq!(sheet.clear(CellAddress::new(0, 0)), None);
        assert_eq!(sheet.value_at(CellAddress::new(0, 0)).unwrap(), Literal::Empty);
    }

    #[test]
    fn test_dimensions_are_clamped() {
        let sheet = Sheet::new(u32::MAX, u16::MAX);
        assert_eq!(sheet.rows(), MAX_ROWS);
        assert_eq!(sheet.cols(), MAX_COLS);
    }

    #[test]
    fn test_render_at() {
        let mut sheet = Sheet::new(3, 3);
        sheet.insert(CellAddress::new(0, 0), 12).unwrap();
        sheet
            .insert(CellAddress::new(0, 1), Reference::new(CellAddress::new(0, 0)))
            .unwrap();
        let sub = BinaryFunction::new(
            "SUB",
            Reference::new(CellAddress::new(0, 1)).into(),
            Content::from(4),
        )
        .unwrap();
        sheet.insert(CellAddress::new(0, 2), sub).unwrap();

        assert_eq!(sheet.render_at(CellAddress::new(0, 0)).unwrap(), "12");
        assert_eq!(sheet.render_at(CellAddress::new(0, 1)).unwrap(), "12=0;0");
        assert_eq!(sheet.render_at(CellAddress::new(0, 2)).unwrap(), "8=SUB(0;1,4)");
        assert_eq!(sheet.render_at(CellAddress::new(2, 2)).unwrap(), "");
        assert!(sheet.render_at(CellAddress::new(5, 5)).is_err());
    }

    #[test]
    fn test_iter_is_row_major() {
        let mut sheet = Sheet::new(3, 3);
        sheet.insert(CellAddress::new(2, 0), 3).unwrap();
        sheet.insert(CellAddress::new(0, 2), 2).unwrap();
        sheet.insert(CellAddress::new(0, 1), 1).unwrap();

        let addresses: Vec<_> = sheet.iter().map(|(address, _)| address).collect();
        assert_eq!(
            addresses,
            vec![
                CellAddress::new(0, 1),
                CellAddress::new(0, 2),
                CellAddress::new(2, 0)
            ]
        );
    }
}
