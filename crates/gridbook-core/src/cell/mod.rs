//! Cell-related types and utilities
//!
//! This module contains:
//! - [`Cell`] - A single grid cell: raw value, type tag, formatting and merge span
//! - [`CellType`] - The closed set of value interpretations
//! - [`CellAddress`] / [`CellRange`] - A1-style positions and ranges
//! - the coordinate codec ([`cell_ref`], [`parse_cell_ref`], ...)

mod address;
mod value;

pub use address::{
    cell_ref, column_letters, letters_to_column, parse_cell_ref, row_number, CellAddress,
    CellRange,
};
pub use value::{CellError, CellType};

use crate::style::Style;
use crate::validation::DataValidation;
use chrono::NaiveDateTime;

/// A single spreadsheet cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    /// Raw payload; its meaning depends on `cell_type`
    pub value: String,
    /// Value interpretation
    pub cell_type: CellType,
    /// Formula text without the leading `=`
    pub formula: Option<String>,
    /// Per-cell number format code override
    pub number_format: Option<String>,
    /// Per-cell style; the owning column's style applies when absent
    pub style: Option<Style>,
    /// Extra columns spanned when this cell is a merge origin
    pub h_merge: usize,
    /// Extra rows spanned when this cell is a merge origin
    pub v_merge: usize,
    /// Validation rule applied to just this cell
    pub data_validation: Option<DataValidation>,
}

impl Cell {
    /// Create an empty numeric cell
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a shared-string value
    pub fn set_string<S: Into<String>>(&mut self, value: S) {
        self.value = value.into();
        self.formula = None;
        self.cell_type = CellType::String;
    }

    /// Set an inline-string value
    pub fn set_inline_string<S: Into<String>>(&mut self, value: S) {
        self.value = value.into();
        self.formula = None;
        self.cell_type = CellType::InlineString;
    }

    /// Set a floating point value
    pub fn set_float(&mut self, value: f64) {
        self.set_numeric(value.to_string());
    }

    /// Set an integer value
    pub fn set_int(&mut self, value: i64) {
        self.set_numeric(value.to_string());
    }

    /// Set a boolean value
    pub fn set_bool(&mut self, value: bool) {
        self.value = if value { "1" } else { "0" }.to_string();
        self.formula = None;
        self.cell_type = CellType::Bool;
    }

    /// Set an error value
    pub fn set_error(&mut self, error: CellError) {
        self.value = error.as_str().to_string();
        self.formula = None;
        self.cell_type = CellType::Error;
    }

    /// Set a date/time value, stored as ISO-8601 text
    pub fn set_date_time(&mut self, value: NaiveDateTime) {
        self.value = value.format("%Y-%m-%dT%H:%M:%S").to_string();
        self.formula = None;
        self.cell_type = CellType::Date;
    }

    /// Set a formula with a numeric result
    pub fn set_formula(&mut self, formula: &str) {
        self.value = "0".to_string();
        self.formula = Some(strip_equals(formula));
        self.cell_type = CellType::Numeric;
    }

    /// Set a formula with a string result
    pub fn set_string_formula(&mut self, formula: &str) {
        self.value.clear();
        self.formula = Some(strip_equals(formula));
        self.cell_type = CellType::StringFormula;
    }

    /// Make this cell the origin of a merge spanning `h` extra columns and `v` extra rows
    pub fn merge(&mut self, h: usize, v: usize) {
        self.h_merge = h;
        self.v_merge = v;
    }

    /// Check if this cell is a merge origin
    pub fn is_merge_origin(&self) -> bool {
        self.h_merge > 0 || self.v_merge > 0
    }

    /// Last `(row, col)` covered by the merge that starts at `(row, col)`
    ///
    /// Spans are clamped to the last row and column a worksheet can hold.
    pub fn merge_end(&self, row: usize, col: usize) -> (usize, usize) {
        (
            row.saturating_add(self.v_merge).min(crate::MAX_ROW_INDEX).max(row),
            col.saturating_add(self.h_merge).min(crate::MAX_COLS - 1).max(col),
        )
    }

    /// Set the per-cell style
    pub fn set_style(&mut self, style: Style) {
        self.style = Some(style);
    }

    /// Set the per-cell number format code
    pub fn set_number_format<S: Into<String>>(&mut self, code: S) {
        self.number_format = Some(code.into());
    }

    /// Attach a validation rule to this cell
    pub fn set_data_validation(&mut self, rule: DataValidation) {
        self.data_validation = Some(rule);
    }

    fn set_numeric(&mut self, value: String) {
        self.value = value;
        self.formula = None;
        self.cell_type = CellType::Numeric;
    }
}

fn strip_equals(formula: &str) -> String {
    formula.strip_prefix('=').unwrap_or(formula).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_default_cell_is_numeric() {
        let cell = Cell::new();
        assert_eq!(cell.cell_type, CellType::Numeric);
        assert!(cell.value.is_empty());
        assert!(!cell.is_merge_origin());
    }

    #[test]
    fn test_typed_setters() {
        let mut cell = Cell::new();

        cell.set_int(42);
        assert_eq!((cell.value.as_str(), cell.cell_type), ("42", CellType::Numeric));

        cell.set_float(3.5);
        assert_eq!(cell.value, "3.5");

        cell.set_bool(true);
        assert_eq!((cell.value.as_str(), cell.cell_type), ("1", CellType::Bool));

        cell.set_error(CellError::Na);
        assert_eq!((cell.value.as_str(), cell.cell_type), ("#N/A", CellType::Error));

        cell.set_inline_string("hi");
        assert_eq!(cell.cell_type, CellType::InlineString);
        assert!(cell.cell_type.is_shared_string());
    }

    #[test]
    fn test_merge_end_is_clamped() {
        let mut cell = Cell::new();
        cell.merge(1, 2);
        assert_eq!(cell.merge_end(3, 4), (5, 5));

        cell.merge(usize::MAX, usize::MAX);
        assert_eq!(
            cell.merge_end(10, 10),
            (crate::MAX_ROW_INDEX, crate::MAX_COLS - 1)
        );
    }

    #[test]
    fn test_date_time_is_iso() {
        let mut cell = Cell::new();
        let dt = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        cell.set_date_time(dt);
        assert_eq!(cell.value, "2024-03-09T14:05:00");
        assert_eq!(cell.cell_type, CellType::Date);
    }

    #[test]
    fn test_formula_strips_equals() {
        let mut cell = Cell::new();
        cell.set_formula("=SUM(A1:A3)");
        assert_eq!(cell.formula.as_deref(), Some("SUM(A1:A3)"));
        assert_eq!(cell.cell_type, CellType::Numeric);

        cell.set_string_formula("CONCAT(A1,B1)");
        assert_eq!(cell.formula.as_deref(), Some("CONCAT(A1,B1)"));
        assert_eq!(cell.cell_type, CellType::StringFormula);
    }
}
