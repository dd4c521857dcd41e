//! Column types

use crate::style::Style;
use crate::validation::DataValidation;
use crate::MAX_ROW_INDEX;

/// Column metadata
///
/// A column covers the inclusive range `[min, max]` of zero-based column
/// indices. Columns created by the sheet are always unit ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct Col {
    /// First column index (0-based)
    pub min: usize,
    /// Last column index (0-based, inclusive)
    pub max: usize,
    /// Custom width (None = sheet default)
    pub width: Option<f64>,
    /// Column is hidden
    pub hidden: bool,
    /// Column is collapsed (in outline)
    pub collapsed: bool,
    /// Outline/grouping level (0-7)
    pub outline_level: u8,
    /// Style applied to cells of this column that carry no style of their own
    pub style: Style,
    /// Number format code applied to the column
    pub number_format: Option<String>,
    pub(crate) data_validations: Vec<ColumnValidation>,
}

/// A validation rule applied to a row span of a column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnValidation {
    pub rule: DataValidation,
    /// First row index (0-based)
    pub min_row: usize,
    /// Last row index (0-based, inclusive)
    pub max_row: usize,
}

impl Col {
    /// Create a column covering `[min, max]` with default settings
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            width: None,
            hidden: false,
            collapsed: false,
            outline_level: 0,
            style: Style::default(),
            number_format: None,
            data_validations: Vec::new(),
        }
    }

    /// Set a custom width
    pub fn set_width(&mut self, width: f64) {
        self.width = Some(width);
    }

    /// Check if this column has a custom width
    pub fn is_custom_width(&self) -> bool {
        self.width.is_some()
    }

    /// Set the column style
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Set the column number format code
    pub fn set_number_format<S: Into<String>>(&mut self, format: S) {
        self.number_format = Some(format.into());
    }

    /// Set the outline level
    pub fn set_outline_level(&mut self, level: u8) {
        self.outline_level = level;
    }

    /// Validation rules of this column, in insertion order
    pub fn data_validations(&self) -> &[ColumnValidation] {
        &self.data_validations
    }

    /// Apply a validation rule to rows `start_row..=end_row` of this column
    ///
    /// `end_row = None` extends the rule through the last sheet row. Existing
    /// rules that overlap the new span are truncated, split around it, or
    /// dropped when fully covered, so row spans never overlap.
    pub fn set_data_validation(
        &mut self,
        rule: DataValidation,
        start_row: usize,
        end_row: Option<usize>,
    ) {
        let end_row = end_row.unwrap_or(MAX_ROW_INDEX);
        if start_row > end_row {
            log::warn!(
                "column {} validation has inverted row range {}..={}",
                self.min,
                start_row,
                end_row
            );
        }

        let mut kept = Vec::with_capacity(self.data_validations.len() + 2);
        for mut existing in self.data_validations.drain(..) {
            if existing.max_row < start_row || existing.min_row > end_row {
                kept.push(existing);
            } else if start_row <= existing.min_row && end_row >= existing.max_row {
                // fully covered
                continue;
            } else if start_row >= existing.min_row {
                let mut footer = existing.clone();
                if start_row > existing.min_row {
                    existing.max_row = start_row - 1;
                    kept.push(existing);
                }
                if end_row < footer.max_row {
                    footer.min_row = end_row + 1;
                    kept.push(footer);
                }
            } else {
                existing.min_row = end_row + 1;
                kept.push(existing);
            }
        }

        kept.push(ColumnValidation {
            rule,
            min_row: start_row,
            max_row: end_row,
        });
        self.data_validations = kept;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spans(col: &Col) -> Vec<(usize, usize)> {
        col.data_validations()
            .iter()
            .map(|v| (v.min_row, v.max_row))
            .collect()
    }

    fn rule(tag: &str) -> DataValidation {
        DataValidation::custom(tag)
    }

    #[test]
    fn test_new_column() {
        let col = Col::new(2, 2);
        assert_eq!((col.min, col.max), (2, 2));
        assert!(!col.is_custom_width());
        assert_eq!(col.style, Style::default());
        assert!(col.data_validations().is_empty());
    }

    #[test]
    fn test_open_ended_validation() {
        let mut col = Col::new(0, 0);
        col.set_data_validation(rule("A"), 2, None);
        assert_eq!(spans(&col), vec![(2, MAX_ROW_INDEX)]);
    }

    #[test]
    fn test_inverted_range_is_stored_as_given() {
        let mut col = Col::new(0, 0);
        col.set_data_validation(rule("A"), 20, Some(30));
        col.set_data_validation(rule("B"), 5, Some(2));
        assert_eq!(spans(&col), vec![(20, 30), (5, 2)]);
    }

    #[test]
    fn test_disjoint_validations_kept() {
        let mut col = Col::new(0, 0);
        col.set_data_validation(rule("A"), 0, Some(4));
        col.set_data_validation(rule("B"), 10, Some(20));
        assert_eq!(spans(&col), vec![(0, 4), (10, 20)]);
    }

    #[test]
    fn test_covering_validation_drops_existing() {
        let mut col = Col::new(0, 0);
        col.set_data_validation(rule("A"), 3, Some(5));
        col.set_data_validation(rule("B"), 0, Some(10));
        assert_eq!(spans(&col), vec![(0, 10)]);
        assert_eq!(col.data_validations()[0].rule, rule("B"));
    }

    #[test]
    fn test_inner_validation_splits_existing() {
        let mut col = Col::new(0, 0);
        col.set_data_validation(rule("A"), 0, Some(10));
        col.set_data_validation(rule("B"), 4, Some(6));
        assert_eq!(spans(&col), vec![(0, 3), (7, 10), (4, 6)]);
        assert_eq!(col.data_validations()[1].rule, rule("A"));
    }

    #[test]
    fn test_tail_overlap_truncates_existing() {
        let mut col = Col::new(0, 0);
        col.set_data_validation(rule("A"), 0, Some(10));
        col.set_data_validation(rule("B"), 5, Some(15));
        assert_eq!(spans(&col), vec![(0, 4), (5, 15)]);
    }

    #[test]
    fn test_head_overlap_moves_existing_start() {
        let mut col = Col::new(0, 0);
        col.set_data_validation(rule("A"), 5, Some(15));
        col.set_data_validation(rule("B"), 0, Some(10));
        assert_eq!(spans(&col), vec![(11, 15), (0, 10)]);
    }
}
