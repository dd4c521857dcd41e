//! Font style types

use super::Color;

/// Font settings of a style
#[derive(Debug, Clone)]
pub struct FontStyle {
    /// Font family name (e.g., "Calibri", "Arial")
    pub name: String,
    /// Font size in points
    pub size: f64,
    /// Font family class (0 = not applicable, 2 = swiss, ...)
    pub family: u8,
    /// Character set
    pub charset: u8,
    pub bold: bool,
    pub italic: bool,
    pub underline: Underline,
    pub strikethrough: bool,
    pub color: Color,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            name: "Verdana".to_string(),
            size: 12.0,
            family: 0,
            charset: 0,
            bold: false,
            italic: false,
            underline: Underline::None,
            strikethrough: false,
            color: Color::Auto,
        }
    }
}

impl FontStyle {
    /// Create a new default font
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Set font size
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl FontStyle {
    /// Bit pattern used for equality and hashing: `-0.0` folds into `0.0`
    /// and every NaN into one canonical NaN
    fn size_key(&self) -> u64 {
        if self.size == 0.0 {
            0.0f64.to_bits()
        } else if self.size.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.size.to_bits()
        }
    }
}

impl PartialEq for FontStyle {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.size_key() == other.size_key()
            && self.family == other.family
            && self.charset == other.charset
            && self.bold == other.bold
            && self.italic == other.italic
            && self.underline == other.underline
            && self.strikethrough == other.strikethrough
            && self.color == other.color
    }
}

impl std::hash::Hash for FontStyle {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size_key().hash(state);
        self.family.hash(state);
        self.charset.hash(state);
        self.bold.hash(state);
        self.italic.hash(state);
        self.underline.hash(state);
        self.strikethrough.hash(state);
        self.color.hash(state);
    }
}

impl Eq for FontStyle {}

/// Underline style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Underline {
    #[default]
    None,
    Single,
    Double,
    /// Single accounting underline (extends to cell width)
    SingleAccounting,
    DoubleAccounting,
}
