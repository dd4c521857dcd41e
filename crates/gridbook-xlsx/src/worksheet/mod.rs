//! Worksheet part: the compiler, its document model and the XML writer

mod compiler;
pub mod document;
mod writer;

pub use compiler::WorksheetCompiler;
pub use document::{
    CellRecord, ColRecord, MergeCells, PaneRecord, RowRecord, SelectionRecord, SheetFormatPr,
    SheetPr, SheetViewRecord, ValidationRecord, WorksheetDocument,
};
