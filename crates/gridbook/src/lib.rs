//! # gridbook
//!
//! A Rust library for building spreadsheets in memory and compiling them to
//! OOXML `worksheet` documents.
//!
//! ## Features
//!
//! - Auto-growing grid: indexing a cell creates the rows, cells and columns
//!   leading up to it
//! - Cell styling (fonts, fills, borders, alignment) and number formats,
//!   deduplicated into a workbook-wide style table
//! - Merged cells, data validation, frozen panes and auto-filters
//! - Deterministic XML output with the attribute omission rules spreadsheet
//!   readers expect
//!
//! ## Example
//!
//! ```rust
//! use gridbook::prelude::*;
//!
//! let mut sheet = Sheet::new("Report");
//! sheet.cell(0, 0).set_string("Region");
//! sheet.cell(0, 1).set_string("Sales");
//! sheet.cell(1, 0).set_string("North");
//! sheet.cell(1, 1).set_float(1250.5);
//! sheet.cell(1, 1).set_number_format("#,##0.00");
//!
//! let mut strings = SharedStringTable::new();
//! let mut styles = StyleTable::new();
//! let doc = sheet.compile(&mut strings, &mut styles);
//!
//! assert_eq!(doc.dimension, "A1:B2");
//! assert_eq!(strings.len(), 3);
//! ```

pub mod prelude;

// Re-export core types
pub use gridbook_core::{
    // Coordinate codec
    cell_ref,
    column_letters,
    letters_to_column,
    parse_cell_ref,
    row_number,
    // Merged cells
    densify_merges,
    merge_regions,

    Alignment,
    AutoFilter,
    BorderEdge,
    BorderLineStyle,
    BorderStyle,
    // Grid types
    Cell,
    CellAddress,
    CellError,
    CellRange,
    CellType,
    Col,
    Color,
    ColumnValidation,
    // Data validation types
    DataValidation,
    // Error types
    Error,
    FillStyle,
    FontStyle,
    HorizontalAlignment,
    Pane,
    PanePosition,
    PaneState,
    PatternType,
    Result,
    Row,
    Selection,
    Sheet,
    SheetFormat,
    SheetView,
    // Style types
    Style,
    Underline,
    ValidationErrorStyle,
    ValidationKind,
    ValidationOperator,
    ValidationType,
    VerticalAlignment,

    MAX_COLS,
    // Constants
    MAX_ROW_INDEX,
};

// Re-export compiler types
pub use gridbook_xlsx::{
    CellXf, CompileOptions, HeaderFooter, NumberFormatRegistry, PageMargins, PageOrder,
    PageOrientation, PageSetup, PrintOptions, SharedStringTable, StyleTable, WorksheetCompiler,
    WorksheetDocument, XlsxError, XlsxResult,
};

/// Extension trait for Sheet to compile it against workbook tables
pub trait SheetCompileExt {
    /// Compile with default options
    fn compile(
        &mut self,
        strings: &mut SharedStringTable,
        styles: &mut StyleTable,
    ) -> WorksheetDocument;

    /// Compile with custom options
    fn compile_with_options(
        &mut self,
        strings: &mut SharedStringTable,
        styles: &mut StyleTable,
        options: CompileOptions,
    ) -> WorksheetDocument;
}

impl SheetCompileExt for Sheet {
    fn compile(
        &mut self,
        strings: &mut SharedStringTable,
        styles: &mut StyleTable,
    ) -> WorksheetDocument {
        WorksheetCompiler::new(strings, styles).compile(self)
    }

    fn compile_with_options(
        &mut self,
        strings: &mut SharedStringTable,
        styles: &mut StyleTable,
        options: CompileOptions,
    ) -> WorksheetDocument {
        WorksheetCompiler::with_options(strings, styles, options).compile(self)
    }
}
