//! Data validation
//!
//! A [`DataValidation`] restricts what may be entered into a cell. Rules are
//! attached either to a single [`Cell`](crate::Cell) or to a row span of a
//! [`Col`](crate::Col); the worksheet compiler derives the `sqref` from where
//! the rule is attached.
//!
//! ## Example
//!
//! ```rust
//! use gridbook_core::{DataValidation, Sheet, ValidationErrorStyle};
//!
//! let mut sheet = Sheet::new("Sheet1");
//!
//! let rule = DataValidation::drop_list(&["Yes", "No", "Maybe"])
//!     .unwrap()
//!     .with_error(ValidationErrorStyle::Stop, "Invalid value", "Pick from the list");
//!
//! sheet.cell(0, 0).set_data_validation(rule);
//! ```

use crate::error::{Error, Result};

/// Longest formula text a list validation may carry
pub const MAX_VALIDATION_FORMULA_LEN: usize = 257;

/// Data validation rule
#[derive(Debug, Clone, PartialEq)]
pub struct DataValidation {
    /// Type of validation and its formulas
    pub validation_type: ValidationType,
    /// Allow blank/empty cells
    pub allow_blank: bool,

    /// Show input prompt when the cell is selected
    pub show_input_message: bool,
    pub prompt_title: Option<String>,
    pub prompt: Option<String>,

    /// Show error alert when invalid data is entered
    pub show_error_message: bool,
    pub error_style: Option<ValidationErrorStyle>,
    pub error_title: Option<String>,
    pub error: Option<String>,
}

impl Default for DataValidation {
    fn default() -> Self {
        Self {
            validation_type: ValidationType::None,
            allow_blank: true,
            show_input_message: false,
            prompt_title: None,
            prompt: None,
            show_error_message: false,
            error_style: None,
            error_title: None,
            error: None,
        }
    }
}

impl DataValidation {
    /// Create a new data validation with no restrictions
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list validation from a source formula or range reference
    pub fn list(source: impl Into<String>) -> Self {
        Self {
            validation_type: ValidationType::List {
                source: source.into(),
            },
            ..Self::default()
        }
    }

    /// Create a drop-down list of literal choices
    ///
    /// The choices are joined into a single quoted formula, which spreadsheet
    /// applications limit to [`MAX_VALIDATION_FORMULA_LEN`] characters.
    pub fn drop_list(keys: &[&str]) -> Result<Self> {
        let formula = format!("\"{}\"", keys.join(","));
        if formula.chars().count() > MAX_VALIDATION_FORMULA_LEN {
            return Err(Error::ValidationFormulaTooLong {
                len: formula.chars().count(),
                max: MAX_VALIDATION_FORMULA_LEN,
            });
        }
        Ok(Self::list(formula))
    }

    /// Create a whole number validation
    pub fn whole_number(operator: ValidationOperator, value1: impl Into<String>) -> Self {
        Self::bounded(ValidationKind::Whole, operator, value1.into(), None)
    }

    /// Create a whole number validation with between/not between operator
    pub fn whole_number_between(
        operator: ValidationOperator,
        value1: impl Into<String>,
        value2: impl Into<String>,
    ) -> Self {
        Self::bounded(
            ValidationKind::Whole,
            operator,
            value1.into(),
            Some(value2.into()),
        )
    }

    /// Create a decimal number validation
    pub fn decimal(operator: ValidationOperator, value1: impl Into<String>) -> Self {
        Self::bounded(ValidationKind::Decimal, operator, value1.into(), None)
    }

    /// Create a date validation
    pub fn date(operator: ValidationOperator, value1: impl Into<String>) -> Self {
        Self::bounded(ValidationKind::Date, operator, value1.into(), None)
    }

    /// Create a time validation
    pub fn time(operator: ValidationOperator, value1: impl Into<String>) -> Self {
        Self::bounded(ValidationKind::Time, operator, value1.into(), None)
    }

    /// Create a text length validation
    pub fn text_length(operator: ValidationOperator, value1: impl Into<String>) -> Self {
        Self::bounded(ValidationKind::TextLength, operator, value1.into(), None)
    }

    /// Create a numeric range validation of the given kind
    pub fn range(kind: ValidationKind, operator: ValidationOperator, low: i64, high: i64) -> Self {
        Self::bounded(kind, operator, low.to_string(), Some(high.to_string()))
    }

    /// Create a custom formula validation
    pub fn custom(formula: impl Into<String>) -> Self {
        Self {
            validation_type: ValidationType::Custom {
                formula: formula.into(),
            },
            ..Self::default()
        }
    }

    fn bounded(
        kind: ValidationKind,
        operator: ValidationOperator,
        value1: String,
        value2: Option<String>,
    ) -> Self {
        Self {
            validation_type: ValidationType::Bounded {
                kind,
                operator,
                value1,
                value2,
            },
            ..Self::default()
        }
    }

    /// Set whether blank cells are allowed
    pub fn with_allow_blank(mut self, allow: bool) -> Self {
        self.allow_blank = allow;
        self
    }

    /// Show an input prompt when the cell is selected
    pub fn with_input(mut self, title: impl Into<String>, message: impl Into<String>) -> Self {
        self.show_input_message = true;
        self.prompt_title = Some(title.into());
        self.prompt = Some(message.into());
        self
    }

    /// Show an error alert when invalid data is entered
    pub fn with_error(
        mut self,
        style: ValidationErrorStyle,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.show_error_message = true;
        self.error_style = Some(style);
        self.error_title = Some(title.into());
        self.error = Some(message.into());
        self
    }
}

/// Types of data validation
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ValidationType {
    /// No validation (any value allowed)
    #[default]
    None,

    /// Must be from a list
    List {
        /// A quoted comma-separated list or a range reference
        source: String,
    },

    /// Comparison against one or two bounds
    Bounded {
        kind: ValidationKind,
        operator: ValidationOperator,
        value1: String,
        value2: Option<String>,
    },

    /// Custom formula validation
    Custom {
        /// Formula that returns TRUE/FALSE
        formula: String,
    },
}

impl ValidationType {
    /// Get the XLSX type string for this validation type
    pub fn xlsx_type(&self) -> &'static str {
        match self {
            ValidationType::None => "none",
            ValidationType::List { .. } => "list",
            ValidationType::Bounded { kind, .. } => kind.xlsx_type(),
            ValidationType::Custom { .. } => "custom",
        }
    }

    /// Comparison operator, for types that have one
    pub fn operator(&self) -> Option<ValidationOperator> {
        match self {
            ValidationType::Bounded { operator, .. } => Some(*operator),
            _ => None,
        }
    }

    /// First formula (empty for `None`)
    pub fn formula1(&self) -> &str {
        match self {
            ValidationType::None => "",
            ValidationType::List { source } => source,
            ValidationType::Bounded { value1, .. } => value1,
            ValidationType::Custom { formula } => formula.strip_prefix('=').unwrap_or(formula),
        }
    }

    /// Second formula, only used by between/not-between comparisons
    pub fn formula2(&self) -> Option<&str> {
        match self {
            ValidationType::Bounded { value2, .. } => value2.as_deref(),
            _ => None,
        }
    }
}

/// Value kinds that can be compared against bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    Whole,
    Decimal,
    Date,
    Time,
    TextLength,
}

impl ValidationKind {
    fn xlsx_type(&self) -> &'static str {
        match self {
            ValidationKind::Whole => "whole",
            ValidationKind::Decimal => "decimal",
            ValidationKind::Date => "date",
            ValidationKind::Time => "time",
            ValidationKind::TextLength => "textLength",
        }
    }
}

/// Comparison operators for validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationOperator {
    /// Value must be between value1 and value2
    #[default]
    Between,
    /// Value must NOT be between value1 and value2
    NotBetween,
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
}

impl ValidationOperator {
    /// Get the XLSX operator string
    pub fn xlsx_operator(&self) -> &'static str {
        match self {
            ValidationOperator::Between => "between",
            ValidationOperator::NotBetween => "notBetween",
            ValidationOperator::Equal => "equal",
            ValidationOperator::NotEqual => "notEqual",
            ValidationOperator::GreaterThan => "greaterThan",
            ValidationOperator::LessThan => "lessThan",
            ValidationOperator::GreaterThanOrEqual => "greaterThanOrEqual",
            ValidationOperator::LessThanOrEqual => "lessThanOrEqual",
        }
    }
}

/// Error alert styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationErrorStyle {
    /// Reject invalid data (default)
    #[default]
    Stop,
    /// Warn but allow
    Warning,
    /// Just inform
    Information,
}

impl ValidationErrorStyle {
    /// Get the XLSX error style string
    pub fn xlsx_style(&self) -> &'static str {
        match self {
            ValidationErrorStyle::Stop => "stop",
            ValidationErrorStyle::Warning => "warning",
            ValidationErrorStyle::Information => "information",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_list_quotes_choices() {
        let v = DataValidation::drop_list(&["Yes", "No", "Maybe"]).unwrap();
        assert_eq!(v.validation_type.xlsx_type(), "list");
        assert_eq!(v.validation_type.formula1(), "\"Yes,No,Maybe\"");
        assert_eq!(v.validation_type.formula2(), None);
        assert!(v.allow_blank);
    }

    #[test]
    fn test_drop_list_too_long() {
        let long = "x".repeat(300);
        let err = DataValidation::drop_list(&[long.as_str()]).unwrap_err();
        assert_eq!(
            err,
            Error::ValidationFormulaTooLong {
                len: 302,
                max: MAX_VALIDATION_FORMULA_LEN
            }
        );
    }

    #[test]
    fn test_range_validation() {
        let v = DataValidation::range(
            ValidationKind::Whole,
            ValidationOperator::Between,
            1,
            100,
        );
        assert_eq!(v.validation_type.xlsx_type(), "whole");
        assert_eq!(v.validation_type.operator(), Some(ValidationOperator::Between));
        assert_eq!(v.validation_type.formula1(), "1");
        assert_eq!(v.validation_type.formula2(), Some("100"));
    }

    #[test]
    fn test_custom_strips_equals() {
        let v = DataValidation::custom("=MOD(A1,5)=0");
        assert_eq!(v.validation_type.formula1(), "MOD(A1,5)=0");
        assert_eq!(v.validation_type.operator(), None);
    }

    #[test]
    fn test_with_messages() {
        let v = DataValidation::list("$A$1:$A$3")
            .with_input("Choose", "Select a value from the list")
            .with_error(ValidationErrorStyle::Warning, "Error", "Invalid selection");

        assert!(v.show_input_message);
        assert_eq!(v.prompt_title.as_deref(), Some("Choose"));
        assert_eq!(v.prompt.as_deref(), Some("Select a value from the list"));
        assert!(v.show_error_message);
        assert_eq!(v.error_style, Some(ValidationErrorStyle::Warning));
        assert_eq!(v.error.as_deref(), Some("Invalid selection"));
    }
}
