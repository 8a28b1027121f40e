//! Reading the current schema of a SQLite database.
//!
//! Tables come from `<catalog>.sqlite_master`; columns, indexes and foreign
//! keys from the `pragma_*` table-valued functions. A full read runs on one
//! pooled connection, returned to the pool when the read ends.

use std::sync::LazyLock;

use regex::Regex;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{Sqlite, SqlitePool, SqlitePoolOptions};
use tracing::debug;

use oxide_schema::error::SchemaError;
use oxide_schema::introspect::StaticSchema;
use oxide_schema::schema::{column_lists_equal, same_name, Column, ForeignKey, Key, Table};
use oxide_schema::types::TypeNames;

use crate::declared::parse_declared_type;
use crate::error::{IntrospectError, Result};

/// Catalog read when none is given.
pub const DEFAULT_CATALOG: &str = "main";

static CATALOG_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid catalog regex"));

/// A bare or quoted identifier.
const IDENTIFIER: &str = r#"(?:"(?:[^"]|"")+"|`[^`]+`|\[[^\]]+\]|\w+)"#;

/// `CONSTRAINT name FOREIGN KEY (columns)` table constraint.
static TABLE_FOREIGN_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?is)^\s*CONSTRAINT\s+({IDENTIFIER})\s+FOREIGN\s+KEY\s*\(([^)]*)\)"
    ))
    .expect("Invalid foreign key regex")
});

/// `column type ... CONSTRAINT name REFERENCES` column constraint.
static COLUMN_FOREIGN_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?is)^\s*({IDENTIFIER})\s.*?\bCONSTRAINT\s+({IDENTIFIER})\s+REFERENCES\b"
    ))
    .expect("Invalid foreign key regex")
});

/// Reads tables, columns, keys and foreign keys from a SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteIntrospector {
    pool: SqlitePool,
    catalog: String,
    names: TypeNames,
}

/// One row of `pragma_table_info`.
type ColumnRow = (String, String, i64, Option<String>, i64);

/// One row of `pragma_foreign_key_list`.
type ForeignKeyRow = (i64, String, String, Option<String>);

impl SqliteIntrospector {
    /// Creates an introspector reading `catalog` through `pool`.
    pub fn new(pool: SqlitePool, catalog: impl Into<String>) -> Result<Self> {
        let catalog = checked_catalog(catalog.into())?;
        Ok(Self {
            pool,
            catalog,
            names: TypeNames::new(),
        })
    }

    /// Connects to `url` and creates an introspector for `catalog`.
    pub async fn connect(url: &str, catalog: impl Into<String>) -> Result<Self> {
        let catalog = checked_catalog(catalog.into())?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await?;
        Self::new(pool, catalog)
    }

    /// Returns the pool the introspector reads through.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the catalog being read.
    #[must_use]
    pub fn catalog(&self) -> &str {
        &self.catalog
    }

    /// Reads all user tables of the catalog, ordered by name.
    pub async fn read_schema(&self) -> Result<Vec<Table>> {
        let mut conn = self.pool.acquire().await?;

        let query = format!(
            "SELECT name, COALESCE(sql, '') FROM \"{}\".sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\' \
             ORDER BY name",
            self.catalog
        );
        let rows: Vec<(String, String)> = sqlx::query_as(&query).fetch_all(&mut *conn).await?;

        let mut tables = Vec::with_capacity(rows.len());
        for (name, create_sql) in rows {
            debug!(table = %name, "Reading table");
            tables.push(self.read_table(&mut conn, name, &create_sql).await?);
        }
        Ok(tables)
    }

    /// Reads the schema and wraps it for the differ.
    ///
    /// Failures are reported as [`SchemaError::Connectivity`].
    pub async fn snapshot(&self) -> oxide_schema::error::Result<StaticSchema> {
        self.read_schema()
            .await
            .map(StaticSchema::new)
            .map_err(|e| SchemaError::Connectivity(Box::new(e)))
    }

    async fn read_table(
        &self,
        conn: &mut PoolConnection<Sqlite>,
        name: String,
        create_sql: &str,
    ) -> Result<Table> {
        let mut table = Table::new(name);

        let mut primary_key: Vec<(i64, String)> = Vec::new();
        for (column_name, declared, not_null, default_value, pk) in
            self.column_rows(conn, &table.name).await?
        {
            let parsed = parse_declared_type(&self.names, &declared);
            let mut column = Column::new(column_name.as_str(), parsed.type_code);
            column.nullable = not_null == 0;
            column.length = parsed.length;
            column.precision = parsed.precision;
            column.scale = parsed.scale;
            column.default_value = default_value;
            if pk > 0 {
                primary_key.push((pk, column_name));
            }
            table.columns.push(column);
        }
        primary_key.sort_by_key(|(pos, _)| *pos);
        table.primary_key = primary_key.into_iter().map(|(_, c)| c).collect();

        table.keys = self.read_keys(conn, &table.name).await?;
        table.foreign_keys = self.read_foreign_keys(conn, &table.name, create_sql).await?;
        Ok(table)
    }

    async fn column_rows(
        &self,
        conn: &mut PoolConnection<Sqlite>,
        table: &str,
    ) -> Result<Vec<ColumnRow>> {
        let rows = sqlx::query_as(
            "SELECT name, type, \"notnull\", dflt_value, pk \
             FROM pragma_table_info(?1, ?2) ORDER BY cid",
        )
        .bind(table)
        .bind(&self.catalog)
        .fetch_all(&mut **conn)
        .await?;
        Ok(rows)
    }

    async fn read_keys(&self, conn: &mut PoolConnection<Sqlite>, table: &str) -> Result<Vec<Key>> {
        let indexes: Vec<(String, i64)> = sqlx::query_as(
            "SELECT name, \"unique\" FROM pragma_index_list(?1, ?2) ORDER BY name",
        )
        .bind(table)
        .bind(&self.catalog)
        .fetch_all(&mut **conn)
        .await?;

        let mut keys = Vec::with_capacity(indexes.len());
        for (index_name, unique) in indexes {
            let columns: Vec<(Option<String>,)> = sqlx::query_as(
                "SELECT name FROM pragma_index_info(?1, ?2) ORDER BY seqno",
            )
            .bind(&index_name)
            .bind(&self.catalog)
            .fetch_all(&mut **conn)
            .await?;

            let mut key = Key::new(index_name);
            key.unique = unique != 0;
            // Expression columns have no name.
            for (pos, column) in (1..).zip(columns.into_iter().filter_map(|(c,)| c)) {
                key.add_column(pos, column);
            }
            keys.push(key);
        }
        Ok(keys)
    }

    async fn read_foreign_keys(
        &self,
        conn: &mut PoolConnection<Sqlite>,
        table: &str,
        create_sql: &str,
    ) -> Result<Vec<ForeignKey>> {
        let rows: Vec<ForeignKeyRow> = sqlx::query_as(
            "SELECT id, \"table\", \"from\", \"to\" \
             FROM pragma_foreign_key_list(?1, ?2) ORDER BY id, seq",
        )
        .bind(table)
        .bind(&self.catalog)
        .fetch_all(&mut **conn)
        .await?;

        // Rows of one constraint share an id and arrive consecutively.
        let mut grouped: Vec<(i64, String, Vec<(String, Option<String>)>)> = Vec::new();
        for (id, foreign_table, from, to) in rows {
            if let Some((_, _, pairs)) = grouped.last_mut().filter(|(last, _, _)| *last == id) {
                pairs.push((from, to));
            } else {
                grouped.push((id, foreign_table, vec![(from, to)]));
            }
        }

        let mut foreign_keys = Vec::with_capacity(grouped.len());
        for (_, foreign_table, pairs) in grouped {
            let locals: Vec<&str> = pairs.iter().map(|(from, _)| from.as_str()).collect();
            let name = constraint_name(create_sql, &locals)
                .unwrap_or_else(|| format!("fk_{}_{}", table, locals.join("_")).to_lowercase());

            // Without explicit columns the reference targets the primary key.
            let remote_pk = if pairs.iter().any(|(_, to)| to.is_none()) {
                self.primary_key_of(conn, &foreign_table).await?
            } else {
                Vec::new()
            };

            let mut fk = ForeignKey::new(name, foreign_table);
            for (pos, (index, (from, to))) in (1..).zip(pairs.into_iter().enumerate()) {
                let remote = to
                    .or_else(|| remote_pk.get(index).cloned())
                    .unwrap_or_default();
                fk.add_column_pair(pos, from, remote);
            }
            foreign_keys.push(fk);
        }
        Ok(foreign_keys)
    }

    async fn primary_key_of(
        &self,
        conn: &mut PoolConnection<Sqlite>,
        table: &str,
    ) -> Result<Vec<String>> {
        let mut pk: Vec<(i64, String)> = self
            .column_rows(conn, table)
            .await?
            .into_iter()
            .filter(|row| row.4 > 0)
            .map(|(name, _, _, _, pos)| (pos, name))
            .collect();
        pk.sort_by_key(|(pos, _)| *pos);
        Ok(pk.into_iter().map(|(_, name)| name).collect())
    }
}

fn checked_catalog(catalog: String) -> Result<String> {
    if CATALOG_NAME.is_match(&catalog) {
        Ok(catalog)
    } else {
        Err(IntrospectError::Catalog(catalog))
    }
}

/// Finds the name of the foreign key constraint over `columns` in a
/// `CREATE TABLE` statement.
fn constraint_name(create_sql: &str, columns: &[&str]) -> Option<String> {
    definitions(create_sql).into_iter().find_map(|definition| {
        if let Some(caps) = TABLE_FOREIGN_KEY.captures(definition) {
            let declared: Vec<String> = caps[2].split(',').map(|c| unquote(c.trim())).collect();
            column_lists_equal(&declared, columns).then(|| unquote(&caps[1]))
        } else {
            let caps = COLUMN_FOREIGN_KEY.captures(definition)?;
            let column = unquote(&caps[1]);
            matches!(columns, [only] if same_name(&column, only)).then(|| unquote(&caps[2]))
        }
    })
}

/// Splits the body of a `CREATE TABLE` statement into its column and
/// constraint definitions.
fn definitions(create_sql: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0_usize;
    let mut start = 0;
    let mut closing_quote: Option<char> = None;

    for (i, ch) in create_sql.char_indices() {
        if let Some(close) = closing_quote {
            if ch == close {
                closing_quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' | '`' => closing_quote = Some(ch),
            '[' => closing_quote = Some(']'),
            '(' => {
                depth += 1;
                if depth == 1 {
                    start = i + 1;
                }
            }
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    parts.push(&create_sql[start..i]);
                    break;
                }
            }
            ',' if depth == 1 => {
                parts.push(&create_sql[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts
}

/// Strips identifier quotes: `"a""b"`, `` `a` `` and `[a]`.
fn unquote(identifier: &str) -> String {
    let quoted = |open: char, close: char| {
        identifier
            .strip_prefix(open)
            .and_then(|rest| rest.strip_suffix(close))
    };
    if let Some(inner) = quoted('"', '"') {
        inner.replace("\"\"", "\"")
    } else {
        quoted('`', '`')
            .or_else(|| quoted('[', ']'))
            .unwrap_or(identifier)
            .to_string()
    }
}
