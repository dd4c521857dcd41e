//! Row types

use crate::cell::Cell;

/// A row of cells
///
/// Cells are stored densely in column order; index `i` of [`Row::cells`] is
/// the cell in column `i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub(crate) cells: Vec<Cell>,
    /// Custom height in points (None = sheet default)
    pub height: Option<f64>,
    /// Row is hidden
    pub hidden: bool,
    /// Outline/grouping level (0-7)
    pub outline_level: u8,
}

impl Row {
    /// Create a new empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom row height in points
    pub fn set_height(&mut self, height: f64) {
        self.height = Some(height);
    }

    /// Revert to the sheet default height
    pub fn clear_height(&mut self) {
        self.height = None;
    }

    /// Check if this row has a custom height
    pub fn is_custom_height(&self) -> bool {
        self.height.is_some()
    }

    /// Cells in column order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get a cell by column index, if it exists
    pub fn get(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    /// Number of materialized cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if row has any cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Grow the row so that `col` is a valid index, returning that cell
    pub(crate) fn ensure_cell(&mut self, col: usize) -> &mut Cell {
        if col >= self.cells.len() {
            self.cells.resize_with(col + 1, Cell::default);
        }
        &mut self.cells[col]
    }

    /// Append a new empty cell and return it
    pub(crate) fn push_cell(&mut self) -> &mut Cell {
        let idx = self.cells.len();
        self.ensure_cell(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_row() {
        let row = Row::new();
        assert!(row.is_empty());
        assert!(!row.is_custom_height());
        assert!(!row.hidden);
        assert_eq!(row.outline_level, 0);
    }

    #[test]
    fn test_height() {
        let mut row = Row::new();
        row.set_height(20.5);
        assert_eq!(row.height, Some(20.5));
        assert!(row.is_custom_height());

        row.clear_height();
        assert!(!row.is_custom_height());
    }

    #[test]
    fn test_ensure_cell_grows() {
        let mut row = Row::new();
        row.ensure_cell(3).set_string("x");
        assert_eq!(row.len(), 4);
        assert_eq!(row.get(3).map(|c| c.value.as_str()), Some("x"));
        assert_eq!(row.get(0), Some(&Cell::default()));

        row.push_cell();
        assert_eq!(row.len(), 5);
    }
}
