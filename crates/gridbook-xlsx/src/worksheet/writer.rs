//! Worksheet XML writer
//!
//! Elements are written in schema order. Optional attributes are left out
//! when they hold their zero value, and booleans are written as `1`/`0`.

use std::io::Write;

use quick_xml::escape::escape;

use crate::error::XlsxResult;

use super::document::{
    CellRecord, ColRecord, RowRecord, SheetViewRecord, ValidationRecord, WorksheetDocument,
};

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

impl WorksheetDocument {
    /// Serialize the document as `worksheet` XML
    pub fn to_xml(&self) -> String {
        let mut content = String::with_capacity(1024 + self.rows.len() * 64);
        content.push_str(XML_HEADER);
        content.push_str(&format!(
            "\n<worksheet xmlns=\"{}\" xmlns:r=\"{}\">",
            MAIN_NS, REL_NS
        ));

        content.push_str(&format!(
            "<sheetPr filterMode=\"{}\"><pageSetUpPr fitToPage=\"{}\"/></sheetPr>",
            flag(self.sheet_pr.filter_mode),
            flag(self.sheet_pr.fit_to_page)
        ));
        content.push_str(&format!(
            "<dimension ref=\"{}\"/>",
            escape(self.dimension.as_str())
        ));

        content.push_str("<sheetViews>");
        for view in &self.sheet_views {
            write_sheet_view(&mut content, view);
        }
        content.push_str("</sheetViews>");

        write_sheet_format(&mut content, self);

        if !self.cols.is_empty() {
            content.push_str("<cols>");
            for col in &self.cols {
                write_col(&mut content, col);
            }
            content.push_str("</cols>");
        }

        if self.rows.is_empty() {
            content.push_str("<sheetData/>");
        } else {
            content.push_str("<sheetData>");
            for row in &self.rows {
                write_row(&mut content, row);
            }
            content.push_str("</sheetData>");
        }

        if let Some(validations) = &self.data_validations {
            content.push_str(&format!(
                "<dataValidations count=\"{}\">",
                validations.len()
            ));
            for validation in validations {
                write_data_validation(&mut content, validation);
            }
            content.push_str("</dataValidations>");
        }

        if let Some(filter) = &self.auto_filter {
            content.push_str(&format!("<autoFilter ref=\"{}\"/>", escape(filter.as_str())));
        }

        if let Some(merges) = &self.merge_cells {
            content.push_str(&format!("<mergeCells count=\"{}\">", merges.count()));
            for region in &merges.cells {
                content.push_str(&format!("<mergeCell ref=\"{}\"/>", escape(region.as_str())));
            }
            content.push_str("</mergeCells>");
        }

        write_page_layout(&mut content, self);

        content.push_str("</worksheet>");
        content
    }

    /// Write the document as `worksheet` XML
    pub fn write_to<W: Write>(&self, mut writer: W) -> XlsxResult<()> {
        writer.write_all(self.to_xml().as_bytes())?;
        Ok(())
    }
}

fn write_sheet_view(content: &mut String, view: &SheetViewRecord) {
    content.push_str(&format!(
        "<sheetView windowProtection=\"{}\" showFormulas=\"{}\" showGridLines=\"{}\" \
         showRowColHeaders=\"{}\" showZeros=\"{}\" rightToLeft=\"{}\" tabSelected=\"{}\" \
         showOutlineSymbols=\"{}\" defaultGridColor=\"{}\" view=\"{}\" topLeftCell=\"{}\" \
         colorId=\"{}\" zoomScale=\"{}\" zoomScaleNormal=\"{}\" zoomScalePageLayoutView=\"{}\" \
         workbookViewId=\"{}\">",
        flag(view.window_protection),
        flag(view.show_formulas),
        flag(view.show_grid_lines),
        flag(view.show_row_col_headers),
        flag(view.show_zeros),
        flag(view.right_to_left),
        flag(view.tab_selected),
        flag(view.show_outline_symbols),
        flag(view.default_grid_color),
        escape(view.view.as_str()),
        escape(view.top_left_cell.as_str()),
        view.color_id,
        view.zoom_scale,
        view.zoom_scale_normal,
        view.zoom_scale_page_layout_view,
        view.workbook_view_id
    ));

    if let Some(pane) = &view.pane {
        content.push_str(&format!(
            "<pane xSplit=\"{}\" ySplit=\"{}\" topLeftCell=\"{}\" activePane=\"{}\" state=\"{}\"/>",
            pane.x_split,
            pane.y_split,
            escape(pane.top_left_cell.as_str()),
            pane.active_pane,
            pane.state
        ));
    }
    for selection in &view.selections {
        content.push_str(&format!(
            "<selection pane=\"{}\" activeCell=\"{}\" activeCellId=\"{}\" sqref=\"{}\"/>",
            selection.pane,
            escape(selection.active_cell.as_str()),
            selection.active_cell_id,
            escape(selection.sqref.as_str())
        ));
    }

    content.push_str("</sheetView>");
}

fn write_sheet_format(content: &mut String, doc: &WorksheetDocument) {
    let format = &doc.sheet_format;
    content.push_str("<sheetFormatPr");
    if format.default_col_width != 0.0 {
        content.push_str(&format!(" defaultColWidth=\"{}\"", format.default_col_width));
    }
    content.push_str(&format!(" defaultRowHeight=\"{}\"", format.default_row_height));
    if format.outline_level_col != 0 {
        content.push_str(&format!(" outlineLevelCol=\"{}\"", format.outline_level_col));
    }
    if format.outline_level_row != 0 {
        content.push_str(&format!(" outlineLevelRow=\"{}\"", format.outline_level_row));
    }
    content.push_str("/>");
}

fn write_col(content: &mut String, col: &ColRecord) {
    content.push_str(&format!(
        "<col collapsed=\"{}\" hidden=\"{}\" max=\"{}\" min=\"{}\" style=\"{}\" width=\"{}\"",
        flag(col.collapsed),
        flag(col.hidden),
        col.max,
        col.min,
        col.style,
        col.width
    ));
    if col.custom_width {
        content.push_str(" customWidth=\"1\"");
    }
    if col.outline_level != 0 {
        content.push_str(&format!(" outlineLevel=\"{}\"", col.outline_level));
    }
    content.push_str("/>");
}

fn write_row(content: &mut String, row: &RowRecord) {
    content.push_str(&format!("<row r=\"{}\"", row.r));
    if row.hidden {
        content.push_str(" hidden=\"1\"");
    }
    if let Some(ht) = row.ht {
        content.push_str(&format!(" ht=\"{}\" customHeight=\"1\"", ht));
    }
    if row.outline_level != 0 {
        content.push_str(&format!(" outlineLevel=\"{}\"", row.outline_level));
    }

    if row.cells.is_empty() {
        content.push_str("/>");
        return;
    }

    content.push('>');
    for cell in &row.cells {
        write_cell(content, cell);
    }
    content.push_str("</row>");
}

fn write_cell(content: &mut String, cell: &CellRecord) {
    content.push_str(&format!("<c r=\"{}\"", cell.r));
    if cell.s != 0 {
        content.push_str(&format!(" s=\"{}\"", cell.s));
    }
    if !cell.t.is_empty() {
        content.push_str(&format!(" t=\"{}\"", cell.t));
    }

    if cell.f.is_none() && cell.v.is_empty() {
        content.push_str("/>");
        return;
    }

    content.push('>');
    if let Some(formula) = &cell.f {
        content.push_str(&format!("<f>{}</f>", escape(formula.as_str())));
    }
    if !cell.v.is_empty() {
        content.push_str(&format!("<v>{}</v>", escape(cell.v.as_str())));
    }
    content.push_str("</c>");
}

fn write_data_validation(content: &mut String, validation: &ValidationRecord) {
    content.push_str("<dataValidation");
    if validation.allow_blank {
        content.push_str(" allowBlank=\"1\"");
    }
    if validation.show_input_message {
        content.push_str(" showInputMessage=\"1\"");
    }
    if validation.show_error_message {
        content.push_str(" showErrorMessage=\"1\"");
    }
    if let Some(style) = validation.error_style {
        content.push_str(&format!(" errorStyle=\"{}\"", style));
    }
    if let Some(title) = &validation.error_title {
        content.push_str(&format!(" errorTitle=\"{}\"", escape(title.as_str())));
    }
    if let Some(operator) = validation.operator {
        content.push_str(&format!(" operator=\"{}\"", operator));
    }
    if let Some(error) = &validation.error {
        content.push_str(&format!(" error=\"{}\"", escape(error.as_str())));
    }
    if let Some(title) = &validation.prompt_title {
        content.push_str(&format!(" promptTitle=\"{}\"", escape(title.as_str())));
    }
    if let Some(prompt) = &validation.prompt {
        content.push_str(&format!(" prompt=\"{}\"", escape(prompt.as_str())));
    }
    content.push_str(&format!(" type=\"{}\"", validation.validation_type));
    if !validation.sqref.is_empty() {
        content.push_str(&format!(" sqref=\"{}\"", escape(validation.sqref.as_str())));
    }
    content.push('>');

    content.push_str(&format!(
        "<formula1>{}</formula1>",
        escape(validation.formula1.as_str())
    ));
    if let Some(formula2) = &validation.formula2 {
        content.push_str(&format!("<formula2>{}</formula2>", escape(formula2.as_str())));
    }
    content.push_str("</dataValidation>");
}

fn write_page_layout(content: &mut String, doc: &WorksheetDocument) {
    let print = &doc.print_options;
    content.push_str(&format!(
        "<printOptions headings=\"{}\" gridLines=\"{}\" gridLinesSet=\"{}\" \
         horizontalCentered=\"{}\" verticalCentered=\"{}\"/>",
        flag(print.headings),
        flag(print.grid_lines),
        flag(print.grid_lines_set),
        flag(print.horizontal_centered),
        flag(print.vertical_centered)
    ));

    let margins = &doc.page_margins;
    content.push_str(&format!(
        "<pageMargins left=\"{}\" right=\"{}\" top=\"{}\" bottom=\"{}\" header=\"{}\" footer=\"{}\"/>",
        margins.left, margins.right, margins.top, margins.bottom, margins.header, margins.footer
    ));

    let setup = &doc.page_setup;
    content.push_str(&format!(
        "<pageSetup paperSize=\"{}\" scale=\"{}\" firstPageNumber=\"{}\" fitToWidth=\"{}\" \
         fitToHeight=\"{}\" pageOrder=\"{}\" orientation=\"{}\" usePrinterDefaults=\"{}\" \
         blackAndWhite=\"{}\" draft=\"{}\" cellComments=\"{}\" useFirstPageNumber=\"{}\" \
         horizontalDpi=\"{}\" verticalDpi=\"{}\" copies=\"{}\"/>",
        escape(setup.paper_size.as_str()),
        setup.scale,
        setup.first_page_number,
        setup.fit_to_width,
        setup.fit_to_height,
        setup.page_order.as_str(),
        setup.orientation.as_str(),
        flag(setup.use_printer_defaults),
        flag(setup.black_and_white),
        flag(setup.draft),
        escape(setup.cell_comments.as_str()),
        flag(setup.use_first_page_number),
        setup.horizontal_dpi,
        setup.vertical_dpi,
        setup.copies
    ));

    let hf = &doc.header_footer;
    content.push_str(&format!(
        "<headerFooter differentFirst=\"{}\" differentOddEven=\"{}\">\
         <oddHeader>{}</oddHeader><oddFooter>{}</oddFooter></headerFooter>",
        flag(hf.different_first),
        flag(hf.different_odd_even),
        escape(hf.odd_header.as_str()),
        escape(hf.odd_footer.as_str())
    ));
}
