//! Cell type tags and error values

use std::fmt;

/// How a cell's raw value is interpreted
///
/// This set is closed: every cell is exactly one of these, so anything that
/// switches on the type handles all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellType {
    /// Number stored as its decimal text (the implicit default)
    #[default]
    Numeric,
    /// Text stored in the shared-string table
    String,
    /// Text written inline; promoted to a shared string on output
    InlineString,
    /// Boolean stored as "0"/"1"
    Bool,
    /// Error literal such as "#N/A"
    Error,
    /// ISO-8601 date/time text
    Date,
    /// Formula whose cached result is a string
    StringFormula,
}

impl CellType {
    /// Check whether the value is routed through the shared-string table
    pub fn is_shared_string(&self) -> bool {
        matches!(self, CellType::String | CellType::InlineString)
    }
}

/// Excel error values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellError {
    /// #NULL! - Incorrect range operator
    Null,
    /// #DIV/0! - Division by zero
    Div0,
    /// #VALUE! - Wrong type of argument or operand
    Value,
    /// #REF! - Invalid cell reference
    Ref,
    /// #NAME? - Unrecognized formula name
    Name,
    /// #NUM! - Invalid numeric value
    Num,
    /// #N/A - Value not available
    Na,
}

impl CellError {
    /// Get the display string for this error
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::Null => "#NULL!",
            CellError::Div0 => "#DIV/0!",
            CellError::Value => "#VALUE!",
            CellError::Ref => "#REF!",
            CellError::Name => "#NAME?",
            CellError::Num => "#NUM!",
            CellError::Na => "#N/A",
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
