//! Dialect-neutral column type codes.
//!
//! Columns carry a numeric type code rather than a dialect specific type
//! name. The values are the ones JDBC drivers report, so metadata read by any
//! driver that speaks those codes can be compared directly.

use std::collections::BTreeMap;

pub const BIT: i32 = -7;
pub const TINYINT: i32 = -6;
pub const SMALLINT: i32 = 5;
pub const INTEGER: i32 = 4;
pub const BIGINT: i32 = -5;
pub const FLOAT: i32 = 6;
pub const REAL: i32 = 7;
pub const DOUBLE: i32 = 8;
pub const NUMERIC: i32 = 2;
pub const DECIMAL: i32 = 3;
pub const CHAR: i32 = 1;
pub const VARCHAR: i32 = 12;
pub const LONGVARCHAR: i32 = -1;
pub const DATE: i32 = 91;
pub const TIME: i32 = 92;
pub const TIMESTAMP: i32 = 93;
pub const BINARY: i32 = -2;
pub const VARBINARY: i32 = -3;
pub const LONGVARBINARY: i32 = -4;
pub const NULL: i32 = 0;
pub const OTHER: i32 = 1111;
pub const BLOB: i32 = 2004;
pub const CLOB: i32 = 2005;
pub const BOOLEAN: i32 = 16;
pub const NCHAR: i32 = -15;
pub const NVARCHAR: i32 = -9;
pub const NCLOB: i32 = 2011;

const ALL: &[(i32, &str)] = &[
    (BIT, "BIT"),
    (TINYINT, "TINYINT"),
    (SMALLINT, "SMALLINT"),
    (INTEGER, "INTEGER"),
    (BIGINT, "BIGINT"),
    (FLOAT, "FLOAT"),
    (REAL, "REAL"),
    (DOUBLE, "DOUBLE"),
    (NUMERIC, "NUMERIC"),
    (DECIMAL, "DECIMAL"),
    (CHAR, "CHAR"),
    (VARCHAR, "VARCHAR"),
    (LONGVARCHAR, "LONGVARCHAR"),
    (DATE, "DATE"),
    (TIME, "TIME"),
    (TIMESTAMP, "TIMESTAMP"),
    (BINARY, "BINARY"),
    (VARBINARY, "VARBINARY"),
    (LONGVARBINARY, "LONGVARBINARY"),
    (NULL, "NULL"),
    (OTHER, "OTHER"),
    (BLOB, "BLOB"),
    (CLOB, "CLOB"),
    (BOOLEAN, "BOOLEAN"),
    (NCHAR, "NCHAR"),
    (NVARCHAR, "NVARCHAR"),
    (NCLOB, "NCLOB"),
];

/// Lookup table between type codes and their names.
///
/// Built once in [`TypeNames::new`] and read-only afterwards. Components that
/// need names (diagnostics, declared type parsing) own an instance.
#[derive(Debug, Clone)]
pub struct TypeNames {
    by_code: BTreeMap<i32, &'static str>,
    by_name: BTreeMap<&'static str, i32>,
}

impl Default for TypeNames {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeNames {
    /// Builds the table from the fixed set of known codes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_code: ALL.iter().copied().collect(),
            by_name: ALL.iter().map(|&(code, name)| (name, code)).collect(),
        }
    }

    /// Returns the name of a type code, if known.
    #[must_use]
    pub fn name(&self, code: i32) -> Option<&'static str> {
        self.by_code.get(&code).copied()
    }

    /// Returns the name of a type code, or `TYPE(<code>)` for unknown codes.
    #[must_use]
    pub fn describe(&self, code: i32) -> String {
        self.name(code)
            .map_or_else(|| format!("TYPE({code})"), str::to_string)
    }

    /// Returns the code for an upper-case type name, if known.
    #[must_use]
    pub fn code(&self, name: &str) -> Option<i32> {
        self.by_name.get(name).copied()
    }
}
