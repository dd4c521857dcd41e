//! # gridbook-core
//!
//! Core data structures for the gridbook spreadsheet library.
//!
//! This crate provides the in-memory grid that the worksheet compiler in
//! `gridbook-xlsx` turns into a document:
//! - [`Sheet`], [`Row`], [`Col`], [`Cell`] - The auto-growing grid
//! - [`CellAddress`] and [`CellRange`] - A1-style addressing
//! - [`Style`] - Compiled cell formatting (font, fill, border, alignment)
//! - [`DataValidation`] - Input validation rules
//! - [`merge`] - Merged-cell region handling
//!
//! ## Example
//!
//! ```rust
//! use gridbook_core::{Sheet, Style};
//!
//! let mut sheet = Sheet::new("Sheet1");
//!
//! // Indexing grows the grid (0-based row, col)
//! sheet.cell(0, 0).set_string("Hello");
//! sheet.cell(0, 1).set_float(42.0);
//!
//! // A bold header spanning two columns
//! let header = sheet.cell(1, 0);
//! header.set_string("Total");
//! header.set_style(Style::new().bold(true));
//! header.merge(1, 0);
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod merge;
pub mod row;
pub mod style;
pub mod validation;
pub mod view;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{
    cell_ref, column_letters, letters_to_column, parse_cell_ref, row_number, Cell, CellAddress,
    CellError, CellRange, CellType,
};
pub use column::{Col, ColumnValidation};
pub use error::{Error, Result};
pub use merge::{densify_merges, merge_regions};
pub use row::Row;
pub use validation::{
    DataValidation, ValidationErrorStyle, ValidationKind, ValidationOperator, ValidationType,
};
pub use view::{AutoFilter, Pane, PanePosition, PaneState, Selection, SheetFormat, SheetView};
pub use worksheet::Sheet;

// Re-export all style types for convenience
pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, FillStyle, FontStyle,
    HorizontalAlignment, PatternType, Style, Underline, VerticalAlignment,
};

/// Index of the last row in a worksheet (Excel 2007+ limit)
pub const MAX_ROW_INDEX: usize = 1_048_575;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: usize = 16_384;
