//! Cell styling types
//!
//! This module contains types for cell formatting:
//! - [`Style`] - Complete (compiled) cell style
//! - [`FontStyle`] - Font settings
//! - [`FillStyle`] - Background fill
//! - [`BorderStyle`] - Cell borders
//! - [`Alignment`] - Text alignment
//! - [`Color`] - Color representation
//!
//! A [`Style`] is a plain value: two styles are interchangeable exactly when
//! they compare equal, which is what the workbook style tables key on.

mod alignment;
mod border;
mod color;
mod fill;
mod font;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use border::{BorderEdge, BorderLineStyle, BorderStyle};
pub use color::Color;
pub use fill::{FillStyle, PatternType};
pub use font::{FontStyle, Underline};

/// Complete cell style
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub font: FontStyle,
    pub fill: FillStyle,
    pub border: BorderStyle,
    pub alignment: Alignment,
}

impl Style {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Split the style into its font, fill, border and alignment parts
    pub fn components(&self) -> (&FontStyle, &FillStyle, &BorderStyle, &Alignment) {
        (&self.font, &self.fill, &self.border, &self.alignment)
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font.bold = bold;
        self
    }

    /// Set font to italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.font.italic = italic;
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.font.size = size;
        self
    }

    /// Set font name
    pub fn font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.font.name = name.into();
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.font.color = color;
        self
    }

    /// Set fill color (solid fill)
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = FillStyle::Solid { color };
        self
    }

    /// Set the border
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.alignment.horizontal = align;
        self
    }

    /// Set vertical alignment
    pub fn vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.alignment.vertical = align;
        self
    }

    /// Enable text wrapping
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.alignment.wrap_text = wrap;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        let a = Style::new().bold(true).fill_color(Color::RED);
        let b = Style::new().bold(true).fill_color(Color::RED);
        let c = Style::new().italic(true);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_components() {
        let style = Style::new()
            .font_name("Arial")
            .border(BorderStyle::all(BorderLineStyle::Thin, Color::BLACK))
            .wrap_text(true);
        let (font, fill, border, alignment) = style.components();

        assert_eq!(font.name, "Arial");
        assert!(fill.is_none());
        assert!(!border.is_empty());
        assert!(alignment.wrap_text);
    }
}
