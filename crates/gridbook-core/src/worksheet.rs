//! Sheet type: the auto-growing grid of rows, columns and cells

use crate::cell::{cell_ref, Cell};
use crate::column::Col;
use crate::error::{Error, Result};
use crate::row::Row;
use crate::view::{AutoFilter, Pane, PanePosition, PaneState, Selection, SheetFormat, SheetView};

/// A single sheet
///
/// Indexing past the current extent grows the grid instead of failing: asking
/// for cell `(5, 3)` of an empty sheet materializes rows `0..=5`, cells
/// `0..=3` of row 5, and columns `0..=3`.
///
/// # Example
///
/// ```rust
/// use gridbook_core::Sheet;
///
/// let mut sheet = Sheet::new("Sheet1");
/// sheet.cell(0, 0).set_string("Hello");
/// sheet.cell(1, 2).set_float(3.5);
///
/// assert_eq!(sheet.max_row(), 2);
/// assert_eq!(sheet.max_col(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    rows: Vec<Row>,
    cols: Vec<Col>,
    max_row: usize,
    max_col: usize,
    selected: bool,
    views: Vec<SheetView>,
    format: SheetFormat,
    auto_filter: Option<AutoFilter>,
}

impl Sheet {
    /// Create a new empty sheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
            cols: Vec::new(),
            max_row: 0,
            max_col: 0,
            selected: false,
            views: Vec::new(),
            format: SheetFormat::default(),
            auto_filter: None,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the sheet is selected
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Set sheet selected state
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    // === Grid access ===

    /// Get a mutable cell, growing rows, cells and columns as needed
    pub fn cell(&mut self, row: usize, col: usize) -> &mut Cell {
        self.ensure_rows(row + 1);
        let width = self.rows[row].len().max(col + 1);
        self.ensure_cols(width);
        self.rows[row].ensure_cell(col)
    }

    /// Get a cell without growing the grid
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Get a mutable row, growing the sheet as needed
    pub fn row(&mut self, idx: usize) -> &mut Row {
        self.ensure_rows(idx + 1);
        &mut self.rows[idx]
    }

    /// Get a mutable column, growing the sheet as needed
    pub fn col(&mut self, idx: usize) -> &mut Col {
        self.ensure_cols(idx + 1);
        &mut self.cols[idx]
    }

    /// Append a new empty row
    pub fn add_row(&mut self) -> &mut Row {
        let idx = self.rows.len();
        self.row(idx)
    }

    /// Append a new empty cell to the given row
    pub fn add_cell(&mut self, row: usize) -> &mut Cell {
        self.ensure_rows(row + 1);
        let width = self.rows[row].len() + 1;
        self.ensure_cols(width);
        self.rows[row].push_cell()
    }

    /// Insert an empty row at `idx`, shifting later rows down
    ///
    /// `idx` may equal the row count, which appends.
    pub fn insert_row_at(&mut self, idx: usize) -> Result<&mut Row> {
        if idx > self.rows.len() {
            return Err(Error::IndexOutOfBounds {
                index: idx,
                len: self.rows.len(),
            });
        }
        self.rows.insert(idx, Row::new());
        self.max_row = self.rows.len();
        log::trace!("sheet '{}': inserted row at {}", self.name, idx);
        Ok(&mut self.rows[idx])
    }

    /// Remove the row at `idx`, shifting later rows up
    pub fn remove_row_at(&mut self, idx: usize) -> Result<()> {
        if idx >= self.rows.len() {
            return Err(Error::IndexOutOfBounds {
                index: idx,
                len: self.rows.len(),
            });
        }
        self.rows.remove(idx);
        self.max_row = self.rows.len();
        log::trace!("sheet '{}': removed row {}", self.name, idx);
        Ok(())
    }

    /// Set the width of columns `start..=end`
    pub fn set_col_width(&mut self, start: usize, end: usize, width: f64) -> Result<()> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        self.ensure_cols(end + 1);
        for col in &mut self.cols[start..=end] {
            col.set_width(width);
        }
        Ok(())
    }

    /// Rows in order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Columns in order
    pub fn cols(&self) -> &[Col] {
        &self.cols
    }

    /// Number of rows
    pub fn max_row(&self) -> usize {
        self.max_row
    }

    /// Number of columns
    pub fn max_col(&self) -> usize {
        self.max_col
    }

    // === Presentation ===

    /// Sheet views
    pub fn views(&self) -> &[SheetView] {
        &self.views
    }

    /// Mutable sheet views
    pub fn views_mut(&mut self) -> &mut Vec<SheetView> {
        &mut self.views
    }

    /// Default sizes and outline levels
    pub fn format(&self) -> &SheetFormat {
        &self.format
    }

    /// Mutable default sizes and outline levels
    pub fn format_mut(&mut self) -> &mut SheetFormat {
        &mut self.format
    }

    /// Auto-filter range, if any
    pub fn auto_filter(&self) -> Option<&AutoFilter> {
        self.auto_filter.as_ref()
    }

    /// Set the auto-filter range from two corner references
    pub fn set_auto_filter<S: Into<String>>(&mut self, top_left: S, bottom_right: S) {
        self.auto_filter = Some(AutoFilter::new(top_left, bottom_right));
    }

    /// Remove the auto-filter
    pub fn clear_auto_filter(&mut self) {
        self.auto_filter = None;
    }

    /// Freeze the first `row` rows and `col` columns of the first view
    ///
    /// Freezing at `(0, 0)` removes the pane.
    pub fn freeze_panes(&mut self, row: usize, col: usize) {
        if self.views.is_empty() {
            self.views.push(SheetView::default());
        }
        let view = &mut self.views[0];

        if row == 0 && col == 0 {
            view.pane = None;
            view.selection = None;
            return;
        }

        let active_pane = match (row, col) {
            (0, _) => PanePosition::TopRight,
            (_, 0) => PanePosition::BottomLeft,
            _ => PanePosition::BottomRight,
        };
        let top_left_cell = cell_ref(col, row);

        view.pane = Some(Pane {
            x_split: col as f64,
            y_split: row as f64,
            top_left_cell: top_left_cell.clone(),
            active_pane,
            state: PaneState::Frozen,
        });
        view.selection = Some(Selection {
            pane: active_pane,
            active_cell: top_left_cell.clone(),
            sqref: top_left_cell,
        });
    }

    fn ensure_rows(&mut self, count: usize) {
        if count > self.rows.len() {
            self.rows.resize_with(count, Row::new);
            self.max_row = self.rows.len();
        }
    }

    fn ensure_cols(&mut self, count: usize) {
        if count > self.cols.len() {
            let start = self.cols.len();
            self.cols.extend((start..count).map(|idx| Col::new(idx, idx)));
            self.max_col = self.cols.len();
        }
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new("Sheet1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellType;

    #[test]
    fn test_new_sheet() {
        let sheet = Sheet::new("Test");
        assert_eq!(sheet.name(), "Test");
        assert_eq!(sheet.max_row(), 0);
        assert_eq!(sheet.max_col(), 0);
        assert!(sheet.rows().is_empty());
        assert!(!sheet.is_selected());
    }

    #[test]
    fn test_cell_grows_grid() {
        let mut sheet = Sheet::new("Test");
        sheet.cell(5, 3).set_string("x");

        assert_eq!(sheet.rows().len(), 6);
        assert_eq!(sheet.max_row(), 6);
        assert_eq!(sheet.max_col(), 4);
        assert_eq!(sheet.rows()[5].len(), 4);
        assert!(sheet.rows()[0].is_empty());

        let cell = sheet.cell_at(5, 3).unwrap();
        assert_eq!(cell.value, "x");
        assert_eq!(cell.cell_type, CellType::String);
        assert!(sheet.cell_at(0, 0).is_none());
    }

    #[test]
    fn test_columns_are_unit_ranges() {
        let mut sheet = Sheet::new("Test");
        sheet.col(2);

        let cols = sheet.cols();
        assert_eq!(cols.len(), 3);
        for (i, col) in cols.iter().enumerate() {
            assert_eq!((col.min, col.max), (i, i));
        }
    }

    #[test]
    fn test_add_row_and_cell() {
        let mut sheet = Sheet::new("Test");
        sheet.add_row();
        sheet.add_cell(0).set_int(1);
        sheet.add_cell(0).set_int(2);

        assert_eq!(sheet.max_row(), 1);
        assert_eq!(sheet.max_col(), 2);
        assert_eq!(sheet.cell_at(0, 1).map(|c| c.value.as_str()), Some("2"));
    }

    #[test]
    fn test_insert_row_at() {
        let mut sheet = Sheet::new("Test");
        sheet.cell(0, 0).set_string("first");
        sheet.cell(1, 0).set_string("second");

        sheet.insert_row_at(1).unwrap().set_height(30.0);
        assert_eq!(sheet.max_row(), 3);
        assert_eq!(sheet.rows()[1].height, Some(30.0));
        assert_eq!(sheet.cell_at(2, 0).map(|c| c.value.as_str()), Some("second"));

        // appending at len is allowed
        sheet.insert_row_at(3).unwrap();
        assert_eq!(sheet.max_row(), 4);

        assert_eq!(
            sheet.insert_row_at(9).unwrap_err(),
            Error::IndexOutOfBounds { index: 9, len: 4 }
        );
    }

    #[test]
    fn test_remove_row_at() {
        let mut sheet = Sheet::new("Test");
        sheet.cell(0, 0).set_string("a");
        sheet.cell(1, 0).set_string("b");

        sheet.remove_row_at(0).unwrap();
        assert_eq!(sheet.max_row(), 1);
        assert_eq!(sheet.cell_at(0, 0).map(|c| c.value.as_str()), Some("b"));

        assert_eq!(
            sheet.remove_row_at(1).unwrap_err(),
            Error::IndexOutOfBounds { index: 1, len: 1 }
        );
    }

    #[test]
    fn test_set_col_width() {
        let mut sheet = Sheet::new("Test");
        sheet.set_col_width(1, 3, 20.0).unwrap();

        assert_eq!(sheet.max_col(), 4);
        assert_eq!(sheet.cols()[0].width, None);
        for col in &sheet.cols()[1..=3] {
            assert_eq!(col.width, Some(20.0));
        }

        assert_eq!(
            sheet.set_col_width(5, 2, 10.0).unwrap_err(),
            Error::InvalidRange { start: 5, end: 2 }
        );
    }

    #[test]
    fn test_freeze_panes() {
        let mut sheet = Sheet::new("Test");
        sheet.freeze_panes(1, 0);

        let pane = sheet.views()[0].pane.as_ref().unwrap();
        assert_eq!(pane.y_split, 1.0);
        assert_eq!(pane.x_split, 0.0);
        assert_eq!(pane.top_left_cell, "A2");
        assert_eq!(pane.active_pane, PanePosition::BottomLeft);
        assert_eq!(pane.state, PaneState::Frozen);

        sheet.freeze_panes(0, 0);
        assert!(sheet.views()[0].pane.is_none());
    }

    #[test]
    fn test_auto_filter() {
        let mut sheet = Sheet::new("Test");
        sheet.set_auto_filter("A1", "C10");
        assert_eq!(sheet.auto_filter().unwrap().reference(), "A1:C10");

        sheet.clear_auto_filter();
        assert!(sheet.auto_filter().is_none());
    }

    #[test]
    fn test_views_mut() {
        let mut sheet = Sheet::new("Test");
        sheet.views_mut().push(SheetView {
            zoom_scale: Some(150),
            ..SheetView::default()
        });
        sheet.freeze_panes(1, 1);

        assert_eq!(sheet.views().len(), 1);
        assert_eq!(sheet.views()[0].zoom_scale, Some(150));
        assert!(sheet.views()[0].pane.is_some());
    }
}
