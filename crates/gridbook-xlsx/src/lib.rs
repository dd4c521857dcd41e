//! # gridbook-xlsx
//!
//! Compiles gridbook sheets into OOXML `worksheet` documents.
//!
//! A workbook owns one [`StyleTable`] and one [`SharedStringTable`]; each
//! sheet is compiled against them with a [`WorksheetCompiler`], producing a
//! [`WorksheetDocument`] that can be written as XML.
//!
//! ## Example
//!
//! ```rust
//! use gridbook_core::{Sheet, Style};
//! use gridbook_xlsx::{SharedStringTable, StyleTable, WorksheetCompiler};
//!
//! let mut sheet = Sheet::new("Sheet1");
//! sheet.cell(0, 0).set_string("Name");
//! sheet.cell(0, 0).set_style(Style::new().bold(true));
//! sheet.cell(1, 0).set_float(12.5);
//!
//! let mut strings = SharedStringTable::new();
//! let mut styles = StyleTable::new();
//! let doc = WorksheetCompiler::new(&mut strings, &mut styles).compile(&mut sheet);
//!
//! let xml = doc.to_xml();
//! assert!(xml.contains(r#"<dimension ref="A1:A2"/>"#));
//! ```

pub mod error;
pub mod number_format;
pub mod options;
pub mod shared_strings;
pub mod styles;
pub mod worksheet;

pub use error::{XlsxError, XlsxResult};
pub use number_format::NumberFormatRegistry;
pub use options::{
    CompileOptions, HeaderFooter, PageMargins, PageOrder, PageOrientation, PageSetup,
    PrintOptions,
};
pub use shared_strings::SharedStringTable;
pub use styles::{CellXf, StyleTable};
pub use worksheet::{WorksheetCompiler, WorksheetDocument};
