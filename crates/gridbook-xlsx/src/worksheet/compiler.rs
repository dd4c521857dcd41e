//! Sheet to worksheet-document compiler
//!
//! Compilation runs in fixed stages: merge densification, views and format
//! defaults, columns, rows and cells, then the summary fields (dimension,
//! outline levels, auto-filter). Running totals for one call live in a
//! [`CompileContext`]; the style and shared-string tables are borrowed from
//! the caller because they are shared by every sheet of a workbook.

use gridbook_core::{cell_ref, column_letters, densify_merges, CellType, Sheet};

use crate::number_format::same_format;
use crate::options::CompileOptions;
use crate::shared_strings::SharedStringTable;
use crate::styles::StyleTable;

use super::document::{
    CellRecord, ColRecord, MergeCells, PaneRecord, RowRecord, SelectionRecord, SheetFormatPr,
    SheetPr, SheetViewRecord, ValidationRecord, WorksheetDocument,
};

/// Per-call accumulators
#[derive(Debug, Default)]
struct CompileContext {
    /// Resolved cell format id of each column, by column index
    col_xf_ids: Vec<u32>,
    /// Largest row index seen
    max_row: usize,
    /// Largest column index seen
    max_col: usize,
    max_outline_col: u8,
    max_outline_row: u8,
    validations: Vec<ValidationRecord>,
    merges: Vec<String>,
}

/// Compiles sheets against shared workbook tables
///
/// # Example
///
/// ```rust
/// use gridbook_core::Sheet;
/// use gridbook_xlsx::{SharedStringTable, StyleTable, WorksheetCompiler};
///
/// let mut sheet = Sheet::new("Sheet1");
/// sheet.cell(0, 0).set_string("Hi");
///
/// let mut strings = SharedStringTable::new();
/// let mut styles = StyleTable::new();
/// let doc = WorksheetCompiler::new(&mut strings, &mut styles).compile(&mut sheet);
///
/// assert_eq!(doc.dimension, "A1");
/// assert_eq!(doc.rows[0].cells[0].v, "0");
/// ```
pub struct WorksheetCompiler<'a> {
    strings: &'a mut SharedStringTable,
    styles: &'a mut StyleTable,
    options: CompileOptions,
}

impl<'a> WorksheetCompiler<'a> {
    /// Create a compiler with default options
    pub fn new(strings: &'a mut SharedStringTable, styles: &'a mut StyleTable) -> Self {
        Self::with_options(strings, styles, CompileOptions::default())
    }

    /// Create a compiler with custom options
    pub fn with_options(
        strings: &'a mut SharedStringTable,
        styles: &'a mut StyleTable,
        options: CompileOptions,
    ) -> Self {
        Self {
            strings,
            styles,
            options,
        }
    }

    /// Compile a sheet into a worksheet document
    ///
    /// The sheet is mutated: cells covered by merged regions are
    /// materialized and the observed outline levels are written back to its
    /// [`SheetFormat`](gridbook_core::SheetFormat).
    pub fn compile(&mut self, sheet: &mut Sheet) -> WorksheetDocument {
        let mut ctx = CompileContext::default();
        self.styles.ensure_legacy_fills();

        densify_merges(sheet);

        let sheet_views = self.sheet_views(sheet);
        let mut sheet_format = self.sheet_format(sheet);
        let cols = self.columns(sheet, &mut ctx);
        let rows = self.rows(sheet, &mut ctx);

        sheet.format_mut().outline_level_col = ctx.max_outline_col;
        sheet.format_mut().outline_level_row = ctx.max_outline_row;
        sheet_format.outline_level_col = ctx.max_outline_col;
        sheet_format.outline_level_row = ctx.max_outline_row;

        let dimension = match (ctx.max_col, ctx.max_row) {
            (0, 0) => "A1".to_string(),
            (col, row) => format!("A1:{}", cell_ref(col, row)),
        };

        log::debug!(
            "compiled sheet '{}': {} cols, {} rows, dimension {}",
            sheet.name(),
            cols.len(),
            rows.len(),
            dimension
        );

        WorksheetDocument {
            sheet_pr: SheetPr::default(),
            dimension,
            sheet_views,
            sheet_format,
            cols,
            rows,
            data_validations: (!ctx.validations.is_empty()).then_some(ctx.validations),
            auto_filter: sheet.auto_filter().map(|f| f.reference()),
            merge_cells: (!ctx.merges.is_empty()).then_some(MergeCells { cells: ctx.merges }),
            print_options: self.options.print_options,
            page_margins: self.options.page_margins,
            page_setup: self.options.page_setup.clone(),
            header_footer: self.options.header_footer.clone(),
        }
    }

    fn sheet_views(&self, sheet: &Sheet) -> Vec<SheetViewRecord> {
        let mut records = vec![SheetViewRecord::default(); sheet.views().len().max(1)];

        for (record, view) in records.iter_mut().zip(sheet.views()) {
            if let Some(pane) = &view.pane {
                record.pane = Some(PaneRecord {
                    x_split: pane.x_split,
                    y_split: pane.y_split,
                    top_left_cell: pane.top_left_cell.clone(),
                    active_pane: pane.active_pane.as_str(),
                    state: pane.state.as_str(),
                });
            }
            if let Some(selection) = &view.selection {
                record.selections = vec![SelectionRecord {
                    pane: selection.pane.as_str(),
                    active_cell: selection.active_cell.clone(),
                    active_cell_id: 0,
                    sqref: selection.sqref.clone(),
                }];
            }
            if let Some(zoom) = view.zoom_scale {
                record.zoom_scale = zoom;
            }
        }

        if sheet.is_selected() {
            records[0].tab_selected = true;
        }
        records
    }

    fn sheet_format(&self, sheet: &Sheet) -> SheetFormatPr {
        let format = sheet.format();
        SheetFormatPr {
            default_col_width: format.default_col_width,
            default_row_height: if format.default_row_height != 0.0 {
                format.default_row_height
            } else {
                self.options.default_row_height
            },
            outline_level_col: 0,
            outline_level_row: 0,
        }
    }

    fn columns(&mut self, sheet: &Sheet, ctx: &mut CompileContext) -> Vec<ColRecord> {
        let mut records = Vec::with_capacity(sheet.cols().len());

        for (idx, col) in sheet.cols().iter().enumerate() {
            let num_fmt_id = self
                .styles
                .intern_number_format(col.number_format.as_deref().unwrap_or(""));
            let xf_id = self.styles.resolve_style(&col.style, num_fmt_id);
            ctx.col_xf_ids.push(xf_id);

            let width = col.width.filter(|w| *w != 0.0);
            records.push(ColRecord {
                collapsed: col.collapsed,
                hidden: col.hidden,
                max: col.max + 1,
                min: col.min + 1,
                style: xf_id,
                width: width.unwrap_or(self.options.default_col_width),
                custom_width: width.is_some(),
                outline_level: col.outline_level,
            });
            ctx.max_outline_col = ctx.max_outline_col.max(col.outline_level);

            let letters = column_letters(idx);
            for validation in col.data_validations() {
                let sqref = if validation.min_row == validation.max_row {
                    format!("{}{}", letters, validation.min_row + 1)
                } else {
                    format!(
                        "{}{}:{}{}",
                        letters,
                        validation.min_row + 1,
                        letters,
                        validation.max_row + 1
                    )
                };
                ctx.validations.push(ValidationRecord::new(&validation.rule, sqref));
            }
        }

        records
    }

    fn rows(&mut self, sheet: &Sheet, ctx: &mut CompileContext) -> Vec<RowRecord> {
        let mut records = Vec::with_capacity(sheet.rows().len());

        for (r, row) in sheet.rows().iter().enumerate() {
            ctx.max_row = ctx.max_row.max(r);
            ctx.max_outline_row = ctx.max_outline_row.max(row.outline_level);

            let mut record = RowRecord {
                r: r + 1,
                hidden: row.hidden,
                cells: Vec::with_capacity(row.len()),
                ht: row.height,
                outline_level: row.outline_level,
            };

            for (c, cell) in row.cells().iter().enumerate() {
                ctx.max_col = ctx.max_col.max(c);

                let cell_fmt = cell.number_format.as_deref().unwrap_or("");
                let col_fmt = sheet
                    .cols()
                    .get(c)
                    .and_then(|col| col.number_format.as_deref())
                    .unwrap_or("");
                let num_fmt_id = self.styles.intern_number_format(cell_fmt);

                // a style wins over a differing number format
                let xf_id = if let Some(style) = &cell.style {
                    self.styles.resolve_style(style, num_fmt_id)
                } else if !cell_fmt.is_empty() && !same_format(col_fmt, cell_fmt) {
                    self.styles.resolve_number_format(num_fmt_id)
                } else {
                    ctx.col_xf_ids.get(c).copied().unwrap_or(0)
                };

                let reference = cell_ref(c, r);
                let (t, v) = match cell.cell_type {
                    CellType::Numeric => ("", cell.value.clone()),
                    CellType::String | CellType::InlineString => {
                        let v = if cell.value.is_empty() {
                            String::new()
                        } else {
                            self.strings.add_string(&cell.value).to_string()
                        };
                        ("s", v)
                    }
                    CellType::Bool => ("b", cell.value.clone()),
                    CellType::Error => ("e", cell.value.clone()),
                    CellType::Date => ("d", cell.value.clone()),
                    CellType::StringFormula => ("str", cell.value.clone()),
                };

                if let Some(rule) = &cell.data_validation {
                    ctx.validations.push(ValidationRecord::new(rule, reference.clone()));
                }
                if cell.is_merge_origin() {
                    let (end_row, end_col) = cell.merge_end(r, c);
                    let end = cell_ref(end_col, end_row);
                    ctx.merges.push(format!("{}:{}", reference, end));
                }

                record.cells.push(CellRecord {
                    r: reference,
                    s: xf_id,
                    t,
                    f: cell.formula.clone().filter(|f| !f.is_empty()),
                    v,
                });
            }

            records.push(record);
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridbook_core::style::{Color, FillStyle, Style};
    use gridbook_core::{CellError, DataValidation, SheetView};
    use pretty_assertions::assert_eq;

    fn compile(sheet: &mut Sheet) -> (WorksheetDocument, SharedStringTable, StyleTable) {
        let mut strings = SharedStringTable::new();
        let mut styles = StyleTable::new();
        let doc = WorksheetCompiler::new(&mut strings, &mut styles).compile(sheet);
        (doc, strings, styles)
    }

    #[test]
    fn test_empty_sheet() {
        let mut sheet = Sheet::new("Empty");
        let (doc, _, styles) = compile(&mut sheet);

        assert_eq!(doc.dimension, "A1");
        assert!(doc.cols.is_empty());
        assert!(doc.rows.is_empty());
        assert!(doc.data_validations.is_none());
        assert!(doc.merge_cells.is_none());
        assert_eq!(doc.sheet_views.len(), 1);
        assert_eq!(doc.sheet_format.default_row_height, 12.85);
        assert!(styles.fills().contains(&FillStyle::light_gray()));
    }

    #[test]
    fn test_oversized_merge_reference() {
        let mut sheet = Sheet::new("Wide");
        sheet.cell(0, 1).merge(usize::MAX, 0);

        let (doc, _, _) = compile(&mut sheet);

        assert_eq!(doc.merge_cells.as_ref().unwrap().cells, vec!["B1:XFD1"]);
        assert_eq!(doc.dimension, "A1:XFD1");
    }

    #[test]
    fn test_merge_scenario() {
        let mut sheet = Sheet::new("Test");
        sheet.cell(0, 0).set_string("Hi");
        sheet.cell(1, 2).merge(1, 1);

        let (doc, strings, _) = compile(&mut sheet);

        assert_eq!(doc.dimension, "A1:D3");
        assert_eq!(doc.merge_cells.as_ref().unwrap().cells, vec!["C2:D3"]);
        assert_eq!(doc.rows.len(), 3);
        assert_eq!(doc.rows[1].cells.len(), 4);
        assert_eq!(doc.rows[2].cells.len(), 4);
        assert_eq!(doc.cols.len(), 4);

        let hi = &doc.rows[0].cells[0];
        assert_eq!((hi.r.as_str(), hi.t, hi.v.as_str()), ("A1", "s", "0"));
        assert_eq!(strings.get(0), Some("Hi"));
    }

    #[test]
    fn test_cell_types() {
        let mut sheet = Sheet::new("Types");
        sheet.cell(0, 0).set_float(1.5);
        sheet.cell(0, 1).set_bool(false);
        sheet.cell(0, 2).set_error(CellError::Div0);
        sheet.cell(0, 3).set_inline_string("inline");
        sheet.cell(0, 4).set_string("");
        sheet.cell(0, 5).set_formula("=A1*2");
        sheet.cell(0, 6).set_string_formula("UPPER(D1)");
        sheet.cell(0, 7).cell_type = CellType::Date;

        let (doc, strings, _) = compile(&mut sheet);
        let cells = &doc.rows[0].cells;

        let tags: Vec<(&str, &str)> = cells.iter().map(|c| (c.t, c.v.as_str())).collect();
        assert_eq!(
            tags,
            vec![
                ("", "1.5"),
                ("b", "0"),
                ("e", "#DIV/0!"),
                ("s", "0"),
                ("s", ""),
                ("", "0"),
                ("str", ""),
                ("d", ""),
            ]
        );
        assert_eq!(cells[5].f.as_deref(), Some("A1*2"));
        assert_eq!(strings.len(), 1);
    }

    #[test]
    fn test_format_precedence() {
        let mut sheet = Sheet::new("Formats");
        sheet.col(0).set_number_format("0.00");
        sheet.cell(0, 0).set_float(1.0);
        sheet.cell(1, 0).set_number_format("0.00");
        sheet.cell(2, 0).set_number_format("0%");
        {
            let cell = sheet.cell(3, 0);
            cell.set_number_format("0%");
            cell.set_style(Style::new().fill_color(Color::RED));
        }
        sheet.cell(0, 1).set_number_format("general");

        let (doc, _, styles) = compile(&mut sheet);
        let col_xf = doc.cols[0].style;
        let xf = |r: usize, c: usize| doc.rows[r].cells[c].s;

        // inherits the column format
        assert_eq!(xf(0, 0), col_xf);
        // same code as the column
        assert_eq!(xf(1, 0), col_xf);
        // bare number format override
        let pct = xf(2, 0);
        assert_ne!(pct, col_xf);
        assert_eq!(styles.cell_xfs()[pct as usize].num_fmt_id, 9);
        assert_eq!(styles.cell_xfs()[pct as usize].fill_id, 0);
        // style path keeps the cell's own number format
        let styled = &styles.cell_xfs()[xf(3, 0) as usize];
        assert_eq!(styled.num_fmt_id, 9);
        assert_ne!(styled.fill_id, 0);
        // "general" matches an unset column format
        assert_eq!(xf(0, 1), doc.cols[1].style);
    }

    #[test]
    fn test_column_records() {
        let mut sheet = Sheet::new("Cols");
        sheet.set_col_width(1, 1, 20.0).unwrap();
        sheet.col(2).set_outline_level(2);
        sheet.col(2).hidden = true;

        let (doc, _, _) = compile(&mut sheet);

        assert_eq!(doc.cols.len(), 3);
        assert_eq!((doc.cols[0].min, doc.cols[0].max), (1, 1));
        assert_eq!(doc.cols[0].width, 9.5);
        assert!(!doc.cols[0].custom_width);
        assert_eq!(doc.cols[1].width, 20.0);
        assert!(doc.cols[1].custom_width);
        assert!(doc.cols[2].hidden);
        assert_eq!(doc.sheet_format.outline_level_col, 2);
        assert_eq!(sheet.format().outline_level_col, 2);
        assert_eq!(sheet.cols()[0].width, None);
    }

    #[test]
    fn test_row_records() {
        let mut sheet = Sheet::new("Rows");
        sheet.row(0).set_height(30.0);
        sheet.row(1).outline_level = 1;
        sheet.row(2).hidden = true;

        let (doc, _, _) = compile(&mut sheet);

        assert_eq!(doc.rows[0].ht, Some(30.0));
        assert_eq!(doc.rows[1].ht, None);
        assert_eq!(doc.rows[1].outline_level, 1);
        assert!(doc.rows[2].hidden);
        assert_eq!(doc.sheet_format.outline_level_row, 1);
        assert_eq!(sheet.format().outline_level_row, 1);
        assert_eq!(doc.dimension, "A1:A3");
    }

    #[test]
    fn test_validations() {
        let mut sheet = Sheet::new("Validations");
        let yes_no = DataValidation::drop_list(&["Yes", "No"]).unwrap();
        sheet.col(1).set_data_validation(yes_no.clone(), 1, Some(9));
        sheet.col(1).set_data_validation(yes_no.clone(), 12, Some(12));
        sheet.cell(0, 0).set_data_validation(yes_no);

        let (doc, _, _) = compile(&mut sheet);
        let sqrefs: Vec<&str> = doc
            .data_validations
            .as_ref()
            .unwrap()
            .iter()
            .map(|v| v.sqref.as_str())
            .collect();

        // column rules come first, then cell rules in row order
        assert_eq!(sqrefs, vec!["B2:B10", "B13", "A1"]);
    }

    #[test]
    fn test_views_and_auto_filter() {
        let mut sheet = Sheet::new("Views");
        sheet.set_selected(true);
        sheet.freeze_panes(1, 1);
        sheet.set_auto_filter("A1", "C5");
        sheet.format_mut().default_row_height = 15.0;
        sheet.format_mut().default_col_width = 11.0;

        let (doc, _, _) = compile(&mut sheet);
        let view = &doc.sheet_views[0];

        assert!(view.tab_selected);
        let pane = view.pane.as_ref().unwrap();
        assert_eq!((pane.x_split, pane.y_split), (1.0, 1.0));
        assert_eq!(pane.active_pane, "bottomRight");
        assert_eq!(pane.state, "frozen");
        assert_eq!(view.selections[0].active_cell, "B2");
        assert_eq!(doc.auto_filter.as_deref(), Some("A1:C5"));
        assert_eq!(doc.sheet_format.default_row_height, 15.0);
        assert_eq!(doc.sheet_format.default_col_width, 11.0);
    }

    #[test]
    fn test_view_zoom() {
        let mut sheet = Sheet::new("Zoom");
        sheet.views_mut().push(SheetView {
            zoom_scale: Some(75),
            ..SheetView::default()
        });
        sheet.views_mut().push(SheetView::default());

        let (doc, _, _) = compile(&mut sheet);

        let zooms: Vec<u32> = doc.sheet_views.iter().map(|v| v.zoom_scale).collect();
        assert_eq!(zooms, vec![75, 100]);
    }

    #[test]
    fn test_shared_tables_across_sheets() {
        let mut strings = SharedStringTable::new();
        let mut styles = StyleTable::new();
        let bold = Style::new().bold(true);

        let mut first = Sheet::new("One");
        first.cell(0, 0).set_string("shared");
        first.cell(0, 0).set_style(bold.clone());
        let mut second = Sheet::new("Two");
        second.cell(0, 0).set_string("shared");
        second.cell(0, 0).set_style(bold);

        let a = WorksheetCompiler::new(&mut strings, &mut styles).compile(&mut first);
        let b = WorksheetCompiler::new(&mut strings, &mut styles).compile(&mut second);

        assert_eq!(a.rows[0].cells[0], b.rows[0].cells[0]);
        assert_eq!(strings.len(), 1);
        assert_eq!(strings.count(), 2);
    }
}
