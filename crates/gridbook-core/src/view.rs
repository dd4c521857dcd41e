//! Sheet presentation state: views, panes, selection, default sizes and
//! auto-filter.

/// A window onto the sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetView {
    /// Split or frozen pane
    pub pane: Option<Pane>,
    /// Active cell and selected range
    pub selection: Option<Selection>,
    /// Zoom percentage (None = 100)
    pub zoom_scale: Option<u32>,
}

/// Split or frozen pane settings
#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    /// Horizontal split position (columns when frozen)
    pub x_split: f64,
    /// Vertical split position (rows when frozen)
    pub y_split: f64,
    /// Top-left visible cell of the bottom-right pane
    pub top_left_cell: String,
    pub active_pane: PanePosition,
    pub state: PaneState,
}

/// Quadrant of a split window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanePosition {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl PanePosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanePosition::TopLeft => "topLeft",
            PanePosition::TopRight => "topRight",
            PanePosition::BottomLeft => "bottomLeft",
            PanePosition::BottomRight => "bottomRight",
        }
    }
}

/// Pane state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneState {
    #[default]
    Split,
    Frozen,
}

impl PaneState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaneState::Split => "split",
            PaneState::Frozen => "frozen",
        }
    }
}

/// Selection within a view
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub pane: PanePosition,
    pub active_cell: String,
    /// Selected range(s) as a space separated reference list
    pub sqref: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            pane: PanePosition::TopLeft,
            active_cell: "A1".to_string(),
            sqref: "A1".to_string(),
        }
    }
}

/// Sheet-wide default sizes and outline levels
///
/// Zero means "not set" for every field; the compiler fills in configured
/// defaults and writes the outline levels it observes back here.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SheetFormat {
    pub default_col_width: f64,
    pub default_row_height: f64,
    pub outline_level_col: u8,
    pub outline_level_row: u8,
}

/// Auto-filter range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoFilter {
    pub top_left_cell: String,
    pub bottom_right_cell: String,
}

impl AutoFilter {
    /// Create an auto-filter spanning the two corner references
    pub fn new<S: Into<String>>(top_left_cell: S, bottom_right_cell: S) -> Self {
        Self {
            top_left_cell: top_left_cell.into(),
            bottom_right_cell: bottom_right_cell.into(),
        }
    }

    /// The filter range as `TopLeft:BottomRight`
    pub fn reference(&self) -> String {
        format!("{}:{}", self.top_left_cell, self.bottom_right_cell)
    }
}
