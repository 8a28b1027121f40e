//! Declared column types.
//!
//! SQLite keeps the type of a column as the text written in `CREATE TABLE`
//! and derives a storage affinity from it. This module maps type codes to
//! declared type text and back, and computes the affinity of a declaration.

use std::fmt;

use oxide_schema::schema::Column;
use oxide_schema::types::{self, TypeNames};

/// SQLite column affinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affinity {
    Integer,
    Text,
    Blob,
    Real,
    Numeric,
}

impl Affinity {
    /// Determines the affinity of a declared type.
    ///
    /// The rules are applied in SQLite's order, so `FLOATING POINT` has
    /// integer affinity because it contains `INT`.
    #[must_use]
    pub fn of(declared: &str) -> Self {
        let upper = declared.to_ascii_uppercase();
        let contains = |parts: &[&str]| parts.iter().any(|p| upper.contains(p));

        if contains(&["INT"]) {
            Self::Integer
        } else if contains(&["CHAR", "CLOB", "TEXT"]) {
            Self::Text
        } else if contains(&["BLOB"]) || upper.trim().is_empty() {
            Self::Blob
        } else if contains(&["REAL", "FLOA", "DOUB"]) {
            Self::Real
        } else {
            Self::Numeric
        }
    }

    /// Returns the affinity name as SQLite documents it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Text => "TEXT",
            Self::Blob => "BLOB",
            Self::Real => "REAL",
            Self::Numeric => "NUMERIC",
        }
    }

    /// Type code used for declarations that match no known type name.
    const fn fallback_code(self) -> i32 {
        match self {
            Self::Integer => types::INTEGER,
            Self::Text => types::LONGVARCHAR,
            Self::Blob => types::BLOB,
            Self::Real => types::DOUBLE,
            Self::Numeric => types::NUMERIC,
        }
    }
}

impl fmt::Display for Affinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type information recovered from a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclaredType {
    pub type_code: i32,
    pub length: u32,
    pub precision: u32,
    pub scale: u32,
}

/// Spellings SQLite accepts that are not type code names.
const ALIASES: &[(&str, i32)] = &[
    ("INT", types::INTEGER),
    ("INT2", types::SMALLINT),
    ("INT8", types::BIGINT),
    ("MEDIUMINT", types::INTEGER),
    ("UNSIGNED BIG INT", types::BIGINT),
    ("TEXT", types::LONGVARCHAR),
    ("CHARACTER", types::CHAR),
    ("VARYING CHARACTER", types::VARCHAR),
    ("NATIVE CHARACTER", types::NCHAR),
    ("DATETIME", types::TIMESTAMP),
    ("BOOL", types::BOOLEAN),
    ("DOUBLE PRECISION", types::DOUBLE),
];

const fn has_length(type_code: i32) -> bool {
    matches!(
        type_code,
        types::CHAR | types::VARCHAR | types::NCHAR | types::NVARCHAR | types::BINARY | types::VARBINARY
    )
}

const fn has_precision(type_code: i32) -> bool {
    matches!(type_code, types::DECIMAL | types::NUMERIC)
}

/// Renders the declared type of `column`, e.g. `VARCHAR(100)`.
///
/// Unknown type codes are declared as `BLOB`.
#[must_use]
pub fn declared_type(names: &TypeNames, column: &Column) -> String {
    let code = column.type_code;
    let Some(name) = names.name(code) else {
        return "BLOB".to_string();
    };

    if code == types::LONGVARCHAR {
        "TEXT".to_string()
    } else if has_length(code) && column.length > 0 {
        format!("{name}({})", column.length)
    } else if has_precision(code) && column.precision > 0 {
        format!("{name}({}, {})", column.precision, column.scale)
    } else {
        name.to_string()
    }
}

/// Parses a declared type such as `varchar(100)` or `DECIMAL(10,2)`.
///
/// Names are matched case-insensitively against the known type names and
/// common SQLite aliases; anything else maps to the code of its affinity.
#[must_use]
pub fn parse_declared_type(names: &TypeNames, declared: &str) -> DeclaredType {
    let upper = declared.trim().to_ascii_uppercase();
    let (base, args) = match upper.split_once('(') {
        Some((base, rest)) => (base, rest.trim_end().trim_end_matches(')')),
        None => (upper.as_str(), ""),
    };
    let base = base.split_whitespace().collect::<Vec<_>>().join(" ");
    let numbers: Vec<u32> = args
        .split(',')
        .filter_map(|arg| arg.trim().parse().ok())
        .collect();

    let type_code = ALIASES
        .iter()
        .find(|(alias, _)| *alias == base)
        .map(|&(_, code)| code)
        .or_else(|| names.code(&base))
        .unwrap_or_else(|| Affinity::of(&base).fallback_code());

    let mut parsed = DeclaredType {
        type_code,
        length: 0,
        precision: 0,
        scale: 0,
    };
    if has_length(type_code) {
        parsed.length = numbers.first().copied().unwrap_or(0);
    } else if has_precision(type_code) {
        parsed.precision = numbers.first().copied().unwrap_or(0);
        parsed.scale = numbers.get(1).copied().unwrap_or(0);
    }
    parsed
}
