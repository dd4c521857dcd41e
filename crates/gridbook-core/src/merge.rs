//! Merged-cell regions
//!
//! A cell with a non-zero `h_merge` or `v_merge` is the origin of a merged
//! region. The worksheet format expects every cell covered by a region to
//! exist, so [`densify_merges`] materializes the missing ones before a sheet
//! is compiled.

use std::collections::BTreeMap;

use crate::cell::{CellAddress, CellRange};
use crate::worksheet::Sheet;

/// Collect merge origins with the last cell of their region, row-major
fn merge_origins(sheet: &Sheet) -> BTreeMap<CellAddress, CellAddress> {
    let mut origins = BTreeMap::new();
    for (r, row) in sheet.rows().iter().enumerate() {
        for (c, cell) in row.cells().iter().enumerate() {
            if cell.is_merge_origin() {
                let (end_row, end_col) = cell.merge_end(r, c);
                origins.insert(CellAddress::new(r, c), CellAddress::new(end_row, end_col));
            }
        }
    }
    origins
}

/// Materialize every cell covered by a merged region
///
/// Returns the number of cells created. Running it twice creates nothing the
/// second time.
pub fn densify_merges(sheet: &mut Sheet) -> usize {
    let origins = merge_origins(sheet);
    let mut created = 0;

    for (origin, end) in &origins {
        for row in origin.row..=end.row {
            for col in origin.col..=end.col {
                if sheet.cell_at(row, col).is_none() {
                    created += 1;
                }
                sheet.cell(row, col);
            }
        }
    }

    log::debug!(
        "sheet '{}': {} merge regions, {} cells created",
        sheet.name(),
        origins.len(),
        created
    );
    created
}

/// The merged regions of a sheet, in row-major order of their origins
pub fn merge_regions(sheet: &Sheet) -> Vec<CellRange> {
    merge_origins(sheet)
        .into_iter()
        .map(|(origin, end)| CellRange::new(origin, end))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_densify_creates_covered_cells() {
        let mut sheet = Sheet::new("Test");
        sheet.cell(0, 0).set_string("a");
        sheet.cell(1, 2).merge(1, 1);

        let created = densify_merges(&mut sheet);

        // D2, C3 and D3 are new
        assert_eq!(created, 3);
        assert_eq!(sheet.max_row(), 3);
        assert_eq!(sheet.max_col(), 4);
        for (r, c) in [(1, 2), (1, 3), (2, 2), (2, 3)] {
            assert!(sheet.cell_at(r, c).is_some(), "missing cell {r},{c}");
        }
        assert!(!sheet.cell_at(2, 3).unwrap().is_merge_origin());
    }

    #[test]
    fn test_densify_is_idempotent() {
        let mut sheet = Sheet::new("Test");
        sheet.cell(0, 0).merge(2, 0);

        assert_eq!(densify_merges(&mut sheet), 2);
        let snapshot = sheet.clone();
        assert_eq!(densify_merges(&mut sheet), 0);
        assert_eq!(sheet, snapshot);
    }

    #[test]
    fn test_merge_regions_row_major() {
        let mut sheet = Sheet::new("Test");
        sheet.cell(3, 0).merge(0, 1);
        sheet.cell(0, 4).merge(1, 0);
        sheet.cell(0, 1).merge(1, 1);

        let regions: Vec<String> = merge_regions(&sheet)
            .iter()
            .map(|r| r.to_a1_string())
            .collect();
        assert_eq!(regions, vec!["B1:C2", "E1:F1", "A4:A5"]);
    }

    #[test]
    fn test_oversized_span_is_clamped() {
        let mut sheet = Sheet::new("Test");
        sheet.cell(0, 1).merge(usize::MAX, 0);

        assert_eq!(densify_merges(&mut sheet), crate::MAX_COLS - 2);
        assert_eq!(sheet.max_col(), crate::MAX_COLS);

        let regions: Vec<String> = merge_regions(&sheet)
            .iter()
            .map(|r| r.to_a1_string())
            .collect();
        assert_eq!(regions, vec!["B1:XFD1"]);
    }

    #[test]
    fn test_no_merges() {
        let mut sheet = Sheet::new("Test");
        sheet.cell(2, 2);
        assert_eq!(densify_merges(&mut sheet), 0);
        assert!(merge_regions(&sheet).is_empty());
    }
}
