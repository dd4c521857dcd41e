//! Worksheet compile options

/// Options applied to every worksheet document a compiler produces
#[derive(Debug, Clone, PartialEq)]
pub struct CompileOptions {
    /// Width written for columns without a custom width (default: 9.5)
    pub default_col_width: f64,
    /// Default row height used when the sheet sets none (default: 12.85)
    pub default_row_height: f64,
    pub page_margins: PageMargins,
    pub page_setup: PageSetup,
    pub header_footer: HeaderFooter,
    pub print_options: PrintOptions,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            default_col_width: 9.5,
            default_row_height: 12.85,
            page_margins: PageMargins::default(),
            page_setup: PageSetup::default(),
            header_footer: HeaderFooter::default(),
            print_options: PrintOptions::default(),
        }
    }
}

/// Page margins in inches
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PageMargins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub header: f64,
    pub footer: f64,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self {
            left: 0.7875,
            right: 0.7875,
            top: 1.05277777777778,
            bottom: 1.05277777777778,
            header: 0.7875,
            footer: 0.7875,
        }
    }
}

/// Print page setup
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PageSetup {
    /// Paper size code (9 = A4)
    pub paper_size: String,
    /// Scale percentage (10-400)
    pub scale: u32,
    pub first_page_number: u32,
    pub fit_to_width: u32,
    pub fit_to_height: u32,
    pub page_order: PageOrder,
    pub orientation: PageOrientation,
    pub use_printer_defaults: bool,
    pub black_and_white: bool,
    pub draft: bool,
    /// How cell comments are printed (`none`, `atEnd`, `asDisplayed`)
    pub cell_comments: String,
    pub use_first_page_number: bool,
    pub horizontal_dpi: u32,
    pub vertical_dpi: u32,
    pub copies: u32,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            paper_size: "9".to_string(),
            scale: 100,
            first_page_number: 1,
            fit_to_width: 1,
            fit_to_height: 1,
            page_order: PageOrder::DownThenOver,
            orientation: PageOrientation::Portrait,
            use_printer_defaults: false,
            black_and_white: false,
            draft: false,
            cell_comments: "none".to_string(),
            use_first_page_number: true,
            horizontal_dpi: 300,
            vertical_dpi: 300,
            copies: 1,
        }
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PageOrientation {
    #[default]
    Portrait,
    Landscape,
}

impl PageOrientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageOrientation::Portrait => "portrait",
            PageOrientation::Landscape => "landscape",
        }
    }
}

/// Order in which pages are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PageOrder {
    #[default]
    DownThenOver,
    OverThenDown,
}

impl PageOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageOrder::DownThenOver => "downThenOver",
            PageOrder::OverThenDown => "overThenDown",
        }
    }
}

/// Page header and footer text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HeaderFooter {
    pub different_first: bool,
    pub different_odd_even: bool,
    pub odd_header: String,
    pub odd_footer: String,
}

impl Default for HeaderFooter {
    fn default() -> Self {
        Self {
            different_first: false,
            different_odd_even: false,
            odd_header: "&C&\"Times New Roman,Regular\"&12&A".to_string(),
            odd_footer: "&C&\"Times New Roman,Regular\"&12Page &P".to_string(),
        }
    }
}

/// Print options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PrintOptions {
    pub headings: bool,
    pub grid_lines: bool,
    pub grid_lines_set: bool,
    pub horizontal_centered: bool,
    pub vertical_centered: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            headings: false,
            grid_lines: false,
            grid_lines_set: true,
            horizontal_centered: false,
            vertical_centered: false,
        }
    }
}
