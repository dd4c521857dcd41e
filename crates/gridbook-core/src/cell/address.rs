//! Cell reference codec and address/range types
//!
//! Cell references are uppercase column letters immediately followed by a
//! 1-based decimal row number ("A1", "AA104"). Internally every coordinate is
//! zero-based.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Format zero-based `(col, row)` as an A1-style reference
///
/// ```
/// use gridbook_core::cell_ref;
///
/// assert_eq!(cell_ref(0, 0), "A1");
/// assert_eq!(cell_ref(26, 0), "AA1");
/// assert_eq!(cell_ref(0, 9), "A10");
/// ```
pub fn cell_ref(col: usize, row: usize) -> String {
    let mut s = column_letters(col);
    s.push_str(&row_number(row));
    s
}

/// Parse an A1-style reference into zero-based `(col, row)`
///
/// Only `[A-Z]+[0-9]+` is accepted: no `$` markers, no lowercase, and the
/// row number must be at least 1.
pub fn parse_cell_ref(s: &str) -> Result<(usize, usize)> {
    let bytes = s.as_bytes();
    let split = bytes
        .iter()
        .position(|b| !b.is_ascii_uppercase())
        .unwrap_or(bytes.len());

    let (letters, digits) = s.split_at(split);
    if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::malformed(s));
    }

    let col = letters_to_column(letters)?;
    let row: usize = digits.parse().map_err(|_| Error::malformed(s))?;
    if row == 0 {
        return Err(Error::malformed(s));
    }

    Ok((col, row - 1))
}

/// Convert a zero-based column index to letters (0 = A, 25 = Z, 26 = AA)
pub fn column_letters(col: usize) -> String {
    let mut buf = Vec::new();
    let mut n = col + 1;

    while n > 0 {
        n -= 1;
        buf.push(b'A' + (n % 26) as u8);
        n /= 26;
    }

    buf.reverse();
    // Only ASCII uppercase bytes were pushed.
    buf.into_iter().map(char::from).collect()
}

/// Format a zero-based row index as its 1-based row number
pub fn row_number(row: usize) -> String {
    (row + 1).to_string()
}

/// Convert uppercase column letters to a zero-based index (A = 0, AA = 26)
pub fn letters_to_column(letters: &str) -> Result<usize> {
    if letters.is_empty() {
        return Err(Error::malformed(letters));
    }

    let mut col: usize = 0;
    for b in letters.bytes() {
        if !b.is_ascii_uppercase() {
            return Err(Error::malformed(letters));
        }
        col = col
            .checked_mul(26)
            .and_then(|c| c.checked_add((b - b'A') as usize + 1))
            .ok_or_else(|| Error::malformed(letters))?;
    }

    Ok(col - 1)
}

/// A single cell position
///
/// Ordering is row-major, matching the order cells are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Row index (0-based)
    pub row: usize,
    /// Column index (0-based)
    pub col: usize,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parse an A1-style reference
    pub fn parse(s: &str) -> Result<Self> {
        let (col, row) = parse_cell_ref(s)?;
        Ok(Self { row, col })
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        cell_ref(self.col, self.row)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangular range of cells (e.g., "A1:B10")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Top-left address
    pub start: CellAddress,
    /// Bottom-right address
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range, normalizing the corners
    pub fn new(a: CellAddress, b: CellAddress) -> Self {
        Self {
            start: CellAddress::new(a.row.min(b.row), a.col.min(b.col)),
            end: CellAddress::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Create a range from row/column indices
    pub fn from_indices(start_row: usize, start_col: usize, end_row: usize, end_col: usize) -> Self {
        Self::new(
            CellAddress::new(start_row, start_col),
            CellAddress::new(end_row, end_col),
        )
    }

    /// Parse "A1:B2" or a single "A1"
    pub fn parse(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((a, b)) => Ok(Self::new(CellAddress::parse(a)?, CellAddress::parse(b)?)),
            None => {
                let addr = CellAddress::parse(s)?;
                Ok(Self::new(addr, addr))
            }
        }
    }

    /// Format as "A1:B2", or "A1" for a single cell
    pub fn to_a1_string(&self) -> String {
        if self.start == self.end {
            self.start.to_a1_string()
        } else {
            format!("{}:{}", self.start, self.end)
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(25), "Z");
        assert_eq!(column_letters(26), "AA");
        assert_eq!(column_letters(27), "AB");
        assert_eq!(column_letters(701), "ZZ");
        assert_eq!(column_letters(702), "AAA");
        assert_eq!(column_letters(16383), "XFD");
    }

    #[test]
    fn test_cell_ref() {
        assert_eq!(cell_ref(0, 0), "A1");
        assert_eq!(cell_ref(26, 0), "AA1");
        assert_eq!(cell_ref(0, 9), "A10");
        assert_eq!(cell_ref(26, 103), "AA104");
    }

    #[test]
    fn test_parse_cell_ref() {
        assert_eq!(parse_cell_ref("A1").unwrap(), (0, 0));
        assert_eq!(parse_cell_ref("C2").unwrap(), (2, 1));
        assert_eq!(parse_cell_ref("XFD1048576").unwrap(), (16383, 1048575));
    }

    #[test]
    fn test_parse_cell_ref_errors() {
        for bad in ["", "A", "1", "A0", "a1", "$A$1", "A1B", "1A", "A-1", "A 1"] {
            assert_eq!(
                parse_cell_ref(bad),
                Err(Error::MalformedReference(bad.to_string())),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_range_display() {
        assert_eq!(CellRange::from_indices(0, 0, 0, 0).to_string(), "A1");
        assert_eq!(CellRange::from_indices(2, 1, 3, 2).to_string(), "B3:C4");
        assert_eq!(CellRange::parse("C4:B3").unwrap().to_string(), "B3:C4");
    }

    #[test]
    fn test_address_ordering_is_row_major() {
        let mut addrs = vec![
            CellAddress::new(1, 0),
            CellAddress::new(0, 5),
            CellAddress::new(0, 1),
        ];
        addrs.sort();
        assert_eq!(
            addrs,
            vec![
                CellAddress::new(0, 1),
                CellAddress::new(0, 5),
                CellAddress::new(1, 0)
            ]
        );
    }

    proptest! {
        #[test]
        fn cell_ref_round_trips(col in 0usize..100_000, row in 0usize..10_000_000) {
            prop_assert_eq!(parse_cell_ref(&cell_ref(col, row)).unwrap(), (col, row));
        }
    }
}
