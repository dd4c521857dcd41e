//! Workbook style table (the interning side of styles.xml)
//!
//! Fonts, fills, borders and cell formats each live in an append-only table.
//! Interning a value returns the index of a structurally equal entry when one
//! exists, otherwise the value is appended. Indices are assigned in first-seen
//! order, so the same sequence of calls always produces the same table.

use std::hash::Hash;

use ahash::AHashMap;
use gridbook_core::style::{Alignment, BorderStyle, FillStyle, FontStyle, Style};

use crate::number_format::NumberFormatRegistry;

/// A cell format record (`<xf>` in `<cellXfs>`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CellXf {
    pub font_id: u32,
    pub fill_id: u32,
    pub border_id: u32,
    pub num_fmt_id: u32,
    pub apply_number_format: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub alignment: Alignment,
}

impl CellXf {
    /// A blank record carrying only a number format
    pub fn with_number_format(num_fmt_id: u32) -> Self {
        Self {
            num_fmt_id,
            apply_number_format: num_fmt_id != 0,
            ..Self::default()
        }
    }
}

/// Append-only deduplicating table
#[derive(Debug, Clone)]
struct Interner<T> {
    items: Vec<T>,
    index_map: AHashMap<T, u32>,
}

impl<T> Default for Interner<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index_map: AHashMap::new(),
        }
    }
}

impl<T: Clone + Eq + Hash> Interner<T> {
    /// Returns the index and whether the value was newly added
    fn intern(&mut self, value: &T) -> (u32, bool) {
        if let Some(&idx) = self.index_map.get(value) {
            return (idx, false);
        }
        let idx = self.items.len() as u32;
        self.items.push(value.clone());
        self.index_map.insert(value.clone(), idx);
        (idx, true)
    }

    fn items(&self) -> &[T] {
        &self.items
    }
}

/// Deduplicated style components shared by every sheet of a workbook
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    fonts: Interner<FontStyle>,
    fills: Interner<FillStyle>,
    borders: Interner<BorderStyle>,
    cell_xfs: Interner<CellXf>,
    number_formats: NumberFormatRegistry,
}

impl StyleTable {
    /// Create an empty style table
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or add a font
    pub fn intern_font(&mut self, font: &FontStyle) -> u32 {
        let (id, added) = self.fonts.intern(font);
        if added {
            log::trace!("font {} = {} {}pt", id, font.name, font.size);
        }
        id
    }

    /// Get or add a fill
    pub fn intern_fill(&mut self, fill: &FillStyle) -> u32 {
        let (id, added) = self.fills.intern(fill);
        if added {
            log::trace!("fill {} = {:?}", id, fill);
        }
        id
    }

    /// Get or add a border
    pub fn intern_border(&mut self, border: &BorderStyle) -> u32 {
        let (id, added) = self.borders.intern(border);
        if added {
            log::trace!("border {} = {:?}", id, border);
        }
        id
    }

    /// Get or add a cell format record
    pub fn intern_cell_xf(&mut self, xf: &CellXf) -> u32 {
        let (id, added) = self.cell_xfs.intern(xf);
        if added {
            log::trace!(
                "cellXf {} = font {} fill {} border {} numFmt {}",
                id,
                xf.font_id,
                xf.fill_id,
                xf.border_id,
                xf.num_fmt_id
            );
        }
        id
    }

    /// Get or assign the id of a number format code
    pub fn intern_number_format(&mut self, code: &str) -> u32 {
        self.number_formats.intern(code)
    }

    /// Make sure the `none` and light-gray fills are in the fill table
    ///
    /// Spreadsheet readers expect both, and `none` must keep index 0, so this
    /// runs before anything else is interned in a compile.
    pub fn ensure_legacy_fills(&mut self) {
        self.intern_fill(&FillStyle::None);
        self.intern_fill(&FillStyle::light_gray());
    }

    /// Resolve a complete style plus number format to a cell format id
    pub fn resolve_style(&mut self, style: &Style, num_fmt_id: u32) -> u32 {
        let (font, fill, border, alignment) = style.components();
        let font_id = self.intern_font(font);
        let fill_id = self.intern_fill(fill);
        self.intern_fill(&FillStyle::light_gray());
        let border_id = self.intern_border(border);

        let xf = CellXf {
            font_id,
            fill_id,
            border_id,
            num_fmt_id,
            apply_number_format: num_fmt_id != 0,
            alignment: *alignment,
        };
        self.intern_cell_xf(&xf)
    }

    /// Resolve a bare number format override to a cell format id
    pub fn resolve_number_format(&mut self, num_fmt_id: u32) -> u32 {
        self.intern_cell_xf(&CellXf::with_number_format(num_fmt_id))
    }

    /// Fonts in index order
    pub fn fonts(&self) -> &[FontStyle] {
        self.fonts.items()
    }

    /// Fills in index order
    pub fn fills(&self) -> &[FillStyle] {
        self.fills.items()
    }

    /// Borders in index order
    pub fn borders(&self) -> &[BorderStyle] {
        self.borders.items()
    }

    /// Cell formats in index order
    pub fn cell_xfs(&self) -> &[CellXf] {
        self.cell_xfs.items()
    }

    /// The number format registry
    pub fn number_formats(&self) -> &NumberFormatRegistry {
        &self.number_formats
    }
}
