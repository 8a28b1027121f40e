//! Schema introspection trait.
//!
//! Driver crates (oxide-schema-sqlite, etc.) read the current database
//! schema and hand it to the differ through [`Introspect`]. The core crate
//! defines only the trait so it stays driver-agnostic.

use std::convert::Infallible;

use crate::schema::Table;

/// Reads the current schema of a data source.
pub trait Introspect {
    /// Error type for introspection failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reads all tables of the data source.
    fn read_schema(&self) -> Result<Vec<Table>, Self::Error>;
}

/// A schema that was already read (or loaded from a file).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSchema {
    tables: Vec<Table>,
}

impl StaticSchema {
    /// Wraps an existing list of tables.
    #[must_use]
    pub const fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    /// The wrapped tables.
    #[must_use]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }
}

impl From<Vec<Table>> for StaticSchema {
    fn from(tables: Vec<Table>) -> Self {
        Self::new(tables)
    }
}

impl Introspect for StaticSchema {
    type Error = Infallible;

    fn read_schema(&self) -> Result<Vec<Table>, Self::Error> {
        Ok(self.tables.clone())
    }
}
