//! Prelude module - common imports for gridbook users
//!
//! ```rust
//! use gridbook::prelude::*;
//! ```

pub use crate::{
    // Style types
    Alignment,
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

    // Compiler types
    CompileOptions,
    // Data validation types
    DataValidation,

    // Error types
    Error,
    FillStyle,
    FontStyle,
    HorizontalAlignment,
    Result,
    Row,
    SharedStringTable,
    Sheet,
    // Extension traits
    SheetCompileExt,
    Style,
    StyleTable,
    ValidationErrorStyle,
    ValidationOperator,
    VerticalAlignment,
    WorksheetCompiler,
    WorksheetDocument,
    XlsxError,
};
