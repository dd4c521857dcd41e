//! Worksheet document model
//!
//! A [`WorksheetDocument`] is the compiled form of a sheet: every value the
//! `worksheet` part needs, already resolved to style ids, shared-string
//! indices and reference strings. [`super::writer`] turns it into XML.

use gridbook_core::{parse_cell_ref, DataValidation, Result};

use crate::options::{HeaderFooter, PageMargins, PageSetup, PrintOptions};

/// Compiled worksheet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WorksheetDocument {
    pub sheet_pr: SheetPr,
    /// Used range, e.g. `A1:D3` (or `A1` for an empty sheet)
    pub dimension: String,
    pub sheet_views: Vec<SheetViewRecord>,
    pub sheet_format: SheetFormatPr,
    pub cols: Vec<ColRecord>,
    pub rows: Vec<RowRecord>,
    pub data_validations: Option<Vec<ValidationRecord>>,
    /// Auto-filter range as `TopLeft:BottomRight`
    pub auto_filter: Option<String>,
    pub merge_cells: Option<MergeCells>,
    pub print_options: PrintOptions,
    pub page_margins: PageMargins,
    pub page_setup: PageSetup,
    pub header_footer: HeaderFooter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SheetPr {
    pub filter_mode: bool,
    pub fit_to_page: bool,
}

/// A `<sheetView>` element
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SheetViewRecord {
    pub window_protection: bool,
    pub show_formulas: bool,
    pub show_grid_lines: bool,
    pub show_row_col_headers: bool,
    pub show_zeros: bool,
    pub right_to_left: bool,
    pub tab_selected: bool,
    pub show_outline_symbols: bool,
    pub default_grid_color: bool,
    pub view: String,
    pub top_left_cell: String,
    pub color_id: u32,
    pub zoom_scale: u32,
    pub zoom_scale_normal: u32,
    pub zoom_scale_page_layout_view: u32,
    pub workbook_view_id: u32,
    pub pane: Option<PaneRecord>,
    pub selections: Vec<SelectionRecord>,
}

impl Default for SheetViewRecord {
    fn default() -> Self {
        Self {
            window_protection: false,
            show_formulas: false,
            show_grid_lines: true,
            show_row_col_headers: true,
            show_zeros: true,
            right_to_left: false,
            tab_selected: false,
            show_outline_symbols: true,
            default_grid_color: true,
            view: "normal".to_string(),
            top_left_cell: "A1".to_string(),
            color_id: 64,
            zoom_scale: 100,
            zoom_scale_normal: 100,
            zoom_scale_page_layout_view: 100,
            workbook_view_id: 0,
            pane: None,
            selections: vec![SelectionRecord::default()],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PaneRecord {
    pub x_split: f64,
    pub y_split: f64,
    pub top_left_cell: String,
    pub active_pane: &'static str,
    pub state: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectionRecord {
    pub pane: &'static str,
    pub active_cell: String,
    pub active_cell_id: u32,
    pub sqref: String,
}

impl Default for SelectionRecord {
    fn default() -> Self {
        Self {
            pane: "topLeft",
            active_cell: "A1".to_string(),
            active_cell_id: 0,
            sqref: "A1".to_string(),
        }
    }
}

/// `<sheetFormatPr>`; zero widths and levels are omitted when written
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SheetFormatPr {
    pub default_col_width: f64,
    pub default_row_height: f64,
    pub outline_level_col: u8,
    pub outline_level_row: u8,
}

/// A `<col>` element; `min`/`max` are 1-based
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColRecord {
    pub collapsed: bool,
    pub hidden: bool,
    pub max: usize,
    pub min: usize,
    pub style: u32,
    pub width: f64,
    pub custom_width: bool,
    pub outline_level: u8,
}

/// A `<row>` element
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RowRecord {
    /// 1-based row number
    pub r: usize,
    pub hidden: bool,
    pub cells: Vec<CellRecord>,
    /// Custom height; `customHeight` is written whenever this is set
    pub ht: Option<f64>,
    pub outline_level: u8,
}

/// A `<c>` element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CellRecord {
    /// Cell reference, e.g. `B3`
    pub r: String,
    /// Cell format id (omitted when 0)
    pub s: u32,
    /// Type tag (omitted when empty)
    pub t: &'static str,
    pub f: Option<String>,
    /// Value (omitted when empty)
    pub v: String,
}

/// A `<dataValidation>` element
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationRecord {
    pub allow_blank: bool,
    pub show_input_message: bool,
    pub show_error_message: bool,
    pub error_style: Option<&'static str>,
    pub error_title: Option<String>,
    pub operator: Option<&'static str>,
    pub error: Option<String>,
    pub prompt_title: Option<String>,
    pub prompt: Option<String>,
    pub validation_type: &'static str,
    pub sqref: String,
    pub formula1: String,
    pub formula2: Option<String>,
}

impl ValidationRecord {
    /// Build the record for a rule applied to `sqref`
    pub fn new(rule: &DataValidation, sqref: String) -> Self {
        Self {
            allow_blank: rule.allow_blank,
            show_input_message: rule.show_input_message,
            show_error_message: rule.show_error_message,
            error_style: rule.error_style.map(|s| s.xlsx_style()),
            error_title: rule.error_title.clone(),
            operator: rule.validation_type.operator().map(|op| op.xlsx_operator()),
            error: rule.error.clone(),
            prompt_title: rule.prompt_title.clone(),
            prompt: rule.prompt.clone(),
            validation_type: rule.validation_type.xlsx_type(),
            sqref,
            formula1: rule.validation_type.formula1().to_string(),
            formula2: rule
                .validation_type
                .formula2()
                .filter(|f| !f.is_empty())
                .map(str::to_string),
        }
    }
}

/// `<mergeCells>`: one `Origin:End` reference per merged region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MergeCells {
    pub cells: Vec<String>,
}

impl MergeCells {
    pub fn count(&self) -> usize {
        self.cells.len()
    }

    /// Extra columns and rows spanned by the region whose origin is `origin`
    ///
    /// Returns `(0, 0)` when no region starts at `origin`.
    pub fn extent(&self, origin: &str) -> Result<(usize, usize)> {
        let prefix = format!("{}:", origin);
        let Some(region) = self.cells.iter().find(|r| r.starts_with(&prefix)) else {
            return Ok((0, 0));
        };

        let end = &region[prefix.len()..];
        let (start_col, start_row) = parse_cell_ref(origin)?;
        let (end_col, end_row) = parse_cell_ref(end)?;
        Ok((
            end_col.saturating_sub(start_col),
            end_row.saturating_sub(start_row),
        ))
    }
}
