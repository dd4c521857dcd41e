//! Number format registry
//!
//! Format codes that match one of the built-in formats map to the built-in
//! id; every other code gets a custom id starting at
//! [`FIRST_CUSTOM_NUM_FMT_ID`], deduplicated by exact code string.

use ahash::AHashMap;

/// First id available for custom number formats
pub const FIRST_CUSTOM_NUM_FMT_ID: u32 = 164;

/// Built-in number formats every spreadsheet reader knows by id
const BUILTIN_FORMATS: &[(u32, &str)] = &[
    (0, "General"),
    (1, "0"),
    (2, "0.00"),
    (3, "#,##0"),
    (4, "#,##0.00"),
    (9, "0%"),
    (10, "0.00%"),
    (11, "0.00E+00"),
    (12, "# ?/?"),
    (13, "# ??/??"),
    (14, "mm-dd-yy"),
    (15, "d-mmm-yy"),
    (16, "d-mmm"),
    (17, "mmm-yy"),
    (18, "h:mm AM/PM"),
    (19, "h:mm:ss AM/PM"),
    (20, "h:mm"),
    (21, "h:mm:ss"),
    (22, "m/d/yy h:mm"),
    (37, "#,##0 ;(#,##0)"),
    (38, "#,##0 ;[Red](#,##0)"),
    (39, "#,##0.00;(#,##0.00)"),
    (40, "#,##0.00;[Red](#,##0.00)"),
    (45, "mm:ss"),
    (46, "[h]:mm:ss"),
    (47, "mmss.0"),
    (48, "##0.0E+0"),
    (49, "@"),
];

/// Look up the code of a built-in format id
pub fn builtin_format_code(id: u32) -> Option<&'static str> {
    BUILTIN_FORMATS
        .iter()
        .find(|(builtin, _)| *builtin == id)
        .map(|(_, code)| *code)
}

fn builtin_format_id(code: &str) -> Option<u32> {
    BUILTIN_FORMATS
        .iter()
        .find(|(_, builtin)| *builtin == code)
        .map(|(id, _)| *id)
}

/// Check if a code means the General format (empty or `general` in any case)
pub fn is_general(code: &str) -> bool {
    code.is_empty() || code.eq_ignore_ascii_case("general")
}

/// Compare two format codes, treating every spelling of General as equal
pub fn same_format(a: &str, b: &str) -> bool {
    if is_general(a) || is_general(b) {
        return is_general(a) && is_general(b);
    }
    a == b
}

/// Registry of the number formats used by a workbook
#[derive(Debug, Clone)]
pub struct NumberFormatRegistry {
    /// Custom formats in id order
    custom: Vec<(u32, String)>,
    index_map: AHashMap<String, u32>,
    next_id: u32,
}

impl Default for NumberFormatRegistry {
    fn default() -> Self {
        Self {
            custom: Vec::new(),
            index_map: AHashMap::new(),
            next_id: FIRST_CUSTOM_NUM_FMT_ID,
        }
    }
}

impl NumberFormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or assign the id of a format code
    pub fn intern(&mut self, code: &str) -> u32 {
        if is_general(code) {
            return 0;
        }
        if let Some(id) = builtin_format_id(code) {
            return id;
        }
        if let Some(&id) = self.index_map.get(code) {
            return id;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.custom.push((id, code.to_string()));
        self.index_map.insert(code.to_string(), id);
        log::trace!("numFmt {} = {:?}", id, code);
        id
    }

    /// Look up the code for an id, built-in or custom
    pub fn code(&self, id: u32) -> Option<&str> {
        builtin_format_code(id).or_else(|| {
            self.custom
                .iter()
                .find(|(custom, _)| *custom == id)
                .map(|(_, code)| code.as_str())
        })
    }

    /// Custom formats in id order, as written to `<numFmts>`
    pub fn custom_formats(&self) -> &[(u32, String)] {
        &self.custom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_is_zero() {
        let mut reg = NumberFormatRegistry::new();
        assert_eq!(reg.intern(""), 0);
        assert_eq!(reg.intern("General"), 0);
        assert_eq!(reg.intern("GENERAL"), 0);
        assert!(reg.custom_formats().is_empty());
    }

    #[test]
    fn test_builtin_ids() {
        let mut reg = NumberFormatRegistry::new();
        assert_eq!(reg.intern("0.00"), 2);
        assert_eq!(reg.intern("0%"), 9);
        assert_eq!(reg.intern("@"), 49);
        assert_eq!(reg.code(14), Some("mm-dd-yy"));
        assert!(reg.custom_formats().is_empty());
    }

    #[test]
    fn test_custom_ids_from_164() {
        let mut reg = NumberFormatRegistry::new();
        assert_eq!(reg.intern("0.000"), 164);
        assert_eq!(reg.intern("yyyy-mm-dd"), 165);
        assert_eq!(reg.intern("0.000"), 164);

        assert_eq!(reg.code(165), Some("yyyy-mm-dd"));
        assert_eq!(
            reg.custom_formats(),
            &[(164, "0.000".to_string()), (165, "yyyy-mm-dd".to_string())]
        );
    }

    #[test]
    fn test_same_format() {
        assert!(same_format("", "General"));
        assert!(same_format("general", "GENERAL"));
        assert!(same_format("0.00", "0.00"));
        assert!(!same_format("0.00", ""));
        assert!(!same_format("0.00", "0.0"));
    }
}
