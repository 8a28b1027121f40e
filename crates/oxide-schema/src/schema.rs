//! Schema representation types.
//!
//! These types describe the structure of database tables. The same types are
//! used for the snapshot read from a live database and for the target
//! structure declared by the caller, so the differ can compare the two
//! directly.
//!
//! Name based identity (tables, keys, foreign keys) is case-insensitive
//! everywhere in this crate. Column *content* equality is dialect specific and
//! lives behind [`SchemaDialect`](crate::dialect::SchemaDialect).

use serde::{Deserialize, Serialize};

use crate::types;

/// Serializes `(position, column)` pairs as a plain list of column names and
/// numbers them from 1 when reading them back.
mod positional {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(columns: &[(u32, String)], s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(columns.iter().map(|(_, c)| c))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<(u32, String)>, D::Error> {
        let names = Vec::<String>::deserialize(d)?;
        Ok((1..).zip(names).collect())
    }
}

/// Compares two identifiers the way the whole crate does: ASCII
/// case-insensitively.
#[must_use]
pub fn same_name(left: &str, right: &str) -> bool {
    left.eq_ignore_ascii_case(right)
}

/// Compares two ordered column name lists position by position,
/// case-insensitively.
#[must_use]
pub fn column_lists_equal<L, R>(left: &[L], right: &[R]) -> bool
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(l, r)| same_name(l.as_ref(), r.as_ref()))
}

/// Schema definition for a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Whether the column allows NULL values.
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    /// Dialect-neutral type code, see [`crate::types`].
    #[serde(rename = "type")]
    pub type_code: i32,
    /// Length (character or byte columns).
    #[serde(default)]
    pub length: u32,
    /// Precision (numeric columns).
    #[serde(default)]
    pub precision: u32,
    /// Scale (numeric columns).
    #[serde(default)]
    pub scale: u32,
    /// Default value as SQL literal text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Name this column had before, used to detect renames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_name: Option<String>,
}

const fn default_nullable() -> bool {
    true
}

impl Column {
    /// Creates a new nullable column.
    #[must_use]
    pub fn new(name: impl Into<String>, type_code: i32) -> Self {
        Self {
            name: name.into(),
            nullable: true,
            type_code,
            length: 0,
            precision: 0,
            scale: 0,
            default_value: None,
            old_name: None,
        }
    }

    /// Shorthand for a `VARCHAR(length)` column.
    #[must_use]
    pub fn varchar(name: impl Into<String>, length: u32) -> Self {
        Self::new(name, types::VARCHAR).length(length)
    }

    /// Shorthand for a `DECIMAL(precision, scale)` column.
    #[must_use]
    pub fn decimal(name: impl Into<String>, precision: u32, scale: u32) -> Self {
        Self::new(name, types::DECIMAL).precision(precision, scale)
    }

    /// Sets the column as NOT NULL.
    #[must_use]
    pub const fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Sets the length.
    #[must_use]
    pub const fn length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    /// Sets precision and scale.
    #[must_use]
    pub const fn precision(mut self, precision: u32, scale: u32) -> Self {
        self.precision = precision;
        self.scale = scale;
        self
    }

    /// Sets the default value (SQL literal text, e.g. `'draft'` or `0`).
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Declares the previous name of this column.
    #[must_use]
    pub fn renamed_from(mut self, old_name: impl Into<String>) -> Self {
        self.old_name = Some(old_name.into());
        self
    }
}

/// A secondary key (index).
///
/// Columns are stored as `(position, column)` pairs and kept sorted by
/// position, so they can be appended in any order while reading metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    /// Index name.
    pub name: String,
    /// Whether this is a unique index.
    #[serde(default)]
    pub unique: bool,
    /// `(position, column)` pairs sorted by position.
    #[serde(with = "positional")]
    columns: Vec<(u32, String)>,
}

impl Key {
    /// Creates a key without columns.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unique: false,
            columns: Vec::new(),
        }
    }

    /// Creates a key over the given columns, numbered from 1 in order.
    #[must_use]
    pub fn on<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut key = Self::new(name);
        for (pos, column) in (1..).zip(columns) {
            key.add_column(pos, column);
        }
        key
    }

    /// Marks the key as unique.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Adds a column at the given position.
    pub fn add_column(&mut self, pos: u32, column: impl Into<String>) {
        self.columns.push((pos, column.into()));
        self.columns.sort_by_key(|(pos, _)| *pos);
    }

    /// Column names ordered by position.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.columns.iter().map(|(_, c)| c.as_str()).collect()
    }
}

/// A foreign key constraint.
///
/// Local and remote columns are appended together as
/// `(position, local, remote)` triples, so both lists always have the same
/// length and stay sorted by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ForeignKeyDef", into = "ForeignKeyDef")]
pub struct ForeignKey {
    /// Constraint name.
    pub name: String,
    /// Referenced table name.
    pub foreign_table: String,
    /// `(position, local column)` pairs sorted by position.
    columns: Vec<(u32, String)>,
    /// `(position, remote column)` pairs sorted by position.
    foreign_columns: Vec<(u32, String)>,
}

impl ForeignKey {
    /// Creates a foreign key without columns.
    #[must_use]
    pub fn new(name: impl Into<String>, foreign_table: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            foreign_table: foreign_table.into(),
            columns: Vec::new(),
            foreign_columns: Vec::new(),
        }
    }

    /// Creates a single column foreign key `column -> foreign_table(foreign_column)`.
    #[must_use]
    pub fn simple(
        name: impl Into<String>,
        column: impl Into<String>,
        foreign_table: impl Into<String>,
        foreign_column: impl Into<String>,
    ) -> Self {
        let mut fk = Self::new(name, foreign_table);
        fk.add_column_pair(1, column, foreign_column);
        fk
    }

    /// Adds a local/remote column pair at the given position.
    pub fn add_column_pair(
        &mut self,
        pos: u32,
        column: impl Into<String>,
        foreign_column: impl Into<String>,
    ) {
        self.columns.push((pos, column.into()));
        self.foreign_columns.push((pos, foreign_column.into()));
        self.columns.sort_by_key(|(pos, _)| *pos);
        self.foreign_columns.sort_by_key(|(pos, _)| *pos);
    }

    /// Local column names ordered by position.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.columns.iter().map(|(_, c)| c.as_str()).collect()
    }

    /// Referenced column names ordered by position.
    #[must_use]
    pub fn foreign_columns(&self) -> Vec<&str> {
        self.foreign_columns.iter().map(|(_, c)| c.as_str()).collect()
    }

    /// Whether this key references `table`.
    #[must_use]
    pub fn references(&self, table: &str) -> bool {
        same_name(&self.foreign_table, table)
    }
}

/// Serialized form of a [`ForeignKey`].
#[derive(Serialize, Deserialize)]
struct ForeignKeyDef {
    name: String,
    foreign_table: String,
    columns: Vec<String>,
    foreign_columns: Vec<String>,
}

impl TryFrom<ForeignKeyDef> for ForeignKey {
    type Error = String;

    fn try_from(def: ForeignKeyDef) -> Result<Self, Self::Error> {
        if def.columns.len() != def.foreign_columns.len() {
            return Err(format!(
                "foreign key '{}' has {} local but {} referenced columns",
                def.name,
                def.columns.len(),
                def.foreign_columns.len()
            ));
        }
        let mut fk = Self::new(def.name, def.foreign_table);
        let pairs = def.columns.into_iter().zip(def.foreign_columns);
        for (pos, (column, foreign_column)) in (1..).zip(pairs) {
            fk.add_column_pair(pos, column, foreign_column);
        }
        Ok(fk)
    }
}

impl From<ForeignKey> for ForeignKeyDef {
    fn from(fk: ForeignKey) -> Self {
        Self {
            name: fk.name,
            foreign_table: fk.foreign_table,
            columns: fk.columns.into_iter().map(|(_, c)| c).collect(),
            foreign_columns: fk.foreign_columns.into_iter().map(|(_, c)| c).collect(),
        }
    }
}

impl std::fmt::Display for ForeignKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}) -> {}({})",
            self.name,
            self.columns().join(", "),
            self.foreign_table,
            self.foreign_columns().join(", ")
        )
    }
}

/// Complete schema definition for a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table name.
    pub name: String,
    /// Column definitions in declaration order.
    #[serde(default)]
    pub columns: Vec<Column>,
    /// Primary key column(s), in key order.
    #[serde(default)]
    pub primary_key: Vec<String>,
    /// Secondary keys.
    #[serde(default)]
    pub keys: Vec<Key>,
    /// Foreign keys.
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKey>,
}

impl Table {
    /// Creates a new table schema.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            primary_key: Vec::new(),
            keys: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    /// Adds a column to the table.
    #[must_use]
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Sets the primary key columns.
    #[must_use]
    pub fn primary_key<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_key = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a secondary key.
    #[must_use]
    pub fn key(mut self, key: Key) -> Self {
        self.keys.push(key);
        self
    }

    /// Adds a foreign key.
    #[must_use]
    pub fn foreign_key(mut self, fk: ForeignKey) -> Self {
        self.foreign_keys.push(fk);
        self
    }

    /// Gets a column by name (case-insensitive).
    #[must_use]
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| same_name(&c.name, name))
    }

    /// Gets a secondary key by name (case-insensitive).
    #[must_use]
    pub fn get_key(&self, name: &str) -> Option<&Key> {
        self.keys.iter().find(|k| same_name(&k.name, name))
    }

    /// Gets a foreign key by name (case-insensitive).
    #[must_use]
    pub fn get_foreign_key(&self, name: &str) -> Option<&ForeignKey> {
        self.foreign_keys.iter().find(|fk| same_name(&fk.name, name))
    }
}

/// Finds a table by name (case-insensitive).
#[must_use]
pub fn find_table<'a>(tables: &'a [Table], name: &str) -> Option<&'a Table> {
    tables.iter().find(|t| same_name(&t.name, name))
}
