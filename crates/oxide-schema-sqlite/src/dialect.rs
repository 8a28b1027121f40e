//! SQLite schema dialect.
//!
//! SQLite has limited ALTER TABLE support: columns can be added, renamed and
//! dropped, indexes can be created and dropped, but column definitions,
//! foreign keys and primary keys can only change by recreating the table.
//! Those actions render as SQL comments naming the table to recreate.
//!
//! Indexes SQLite creates for PRIMARY KEY and UNIQUE constraints cannot be
//! created or dropped by name. Introspected tables lose the one covering the
//! primary key, and the others are renamed after their columns so they match
//! across databases. They render as inline `UNIQUE (...)` constraints.

use oxide_schema::dialect::SchemaDialect;
use oxide_schema::schema::{column_lists_equal, Column, ForeignKey, Key, Table};
use oxide_schema::types::TypeNames;

use crate::declared::{declared_type, Affinity};

/// Prefix of the indexes SQLite creates for PRIMARY KEY and UNIQUE
/// constraints.
const AUTOINDEX_PREFIX: &str = "sqlite_autoindex_";

fn is_autoindex(key: &Key) -> bool {
    key.name.to_ascii_lowercase().starts_with(AUTOINDEX_PREFIX)
}

/// Name of the implicit index of a UNIQUE constraint, stable across
/// databases: `sqlite_autoindex_<table>_<columns>`.
fn autoindex_name(table: &str, columns: &[&str]) -> String {
    format!("{AUTOINDEX_PREFIX}{table}_{}", columns.join("_")).to_lowercase()
}

/// SQLite dialect.
#[derive(Debug, Clone, Default)]
pub struct SqliteDialect {
    names: TypeNames,
}

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub fn new() -> Self {
        Self {
            names: TypeNames::new(),
        }
    }

    /// Returns the declared type for a column.
    #[must_use]
    pub fn type_name(&self, column: &Column) -> String {
        declared_type(&self.names, column)
    }

    /// Generates a column definition, e.g. `"email" VARCHAR(255) NOT NULL`.
    fn column_definition(&self, column: &Column) -> String {
        let mut sql = format!(
            "{} {}",
            self.quote_identifier(&column.name),
            self.type_name(column)
        );
        if !column.nullable {
            sql.push_str(" NOT NULL");
        }
        if let Some(default) = &column.default_value {
            sql.push_str(" DEFAULT ");
            sql.push_str(default);
        }
        sql
    }

    fn quoted_list<S: AsRef<str>>(&self, names: &[S]) -> String {
        names
            .iter()
            .map(|n| self.quote_identifier(n.as_ref()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn foreign_key_clause(&self, fk: &ForeignKey) -> String {
        format!(
            "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({})",
            self.quote_identifier(&fk.name),
            self.quoted_list(&fk.columns()),
            self.quote_identifier(&fk.foreign_table),
            self.quoted_list(&fk.foreign_columns())
        )
    }

    fn create_index_sql(&self, table: &str, key: &Key) -> String {
        format!(
            "CREATE {}INDEX {} ON {} ({})",
            if key.unique { "UNIQUE " } else { "" },
            self.quote_identifier(&key.name),
            self.quote_identifier(table),
            self.quoted_list(&key.columns())
        )
    }

    fn unique_clause(&self, key: &Key) -> String {
        format!("UNIQUE ({})", self.quoted_list(&key.columns()))
    }

    fn unique_recreation_comment(&self, table: &Table, key: &Key, action: &str) -> String {
        format!(
            "-- UNIQUE ({}) cannot be {action} in SQLite. \
             Table recreation required for: {}",
            key.columns().join(", "),
            table.name
        )
    }

    fn drop_index_sql(&self, key: &Key) -> String {
        format!("DROP INDEX {}", self.quote_identifier(&key.name))
    }

    fn describe_type(&self, column: &Column) -> String {
        format!(
            "{} ({})",
            self.type_name(column),
            Affinity::of(&self.type_name(column))
        )
    }
}

const fn nullability(nullable: bool) -> &'static str {
    if nullable {
        "NULL"
    } else {
        "NOT NULL"
    }
}

impl SchemaDialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn are_columns_equal(&self, target: &Column, current: &Column) -> Option<String> {
        let target_affinity = Affinity::of(&self.type_name(target));
        let current_affinity = Affinity::of(&self.type_name(current));
        if target_affinity != current_affinity {
            return Some(format!(
                "type changed from {} to {}",
                self.describe_type(current),
                self.describe_type(target)
            ));
        }

        if target.nullable != current.nullable {
            return Some(format!(
                "nullability changed from {} to {}",
                nullability(current.nullable),
                nullability(target.nullable)
            ));
        }

        let target_default = target.default_value.as_deref().map(str::trim);
        let current_default = current.default_value.as_deref().map(str::trim);
        if target_default != current_default {
            return Some(format!(
                "default value changed from {} to {}",
                current_default.unwrap_or("none"),
                target_default.unwrap_or("none")
            ));
        }

        None
    }

    fn complete_table_infos(&self, mut table: Table) -> Table {
        let primary_key = table.primary_key.clone();
        table.keys.retain(|key| {
            !(is_autoindex(key) && column_lists_equal(&key.columns(), &primary_key))
        });
        for key in table.keys.iter_mut().filter(|key| is_autoindex(key)) {
            let name = autoindex_name(&table.name, &key.columns());
            key.name = name;
        }
        table
    }

    fn is_column_case_sensitive(&self) -> bool {
        false
    }

    fn should_drop_key(&self, _target: &Table, _current: &Table, key: &Key) -> bool {
        !is_autoindex(key)
    }

    fn generate_create_table(&self, table: &Table) -> String {
        let mut definitions: Vec<String> = table
            .columns
            .iter()
            .map(|c| self.column_definition(c))
            .collect();
        if !table.primary_key.is_empty() {
            definitions.push(format!(
                "PRIMARY KEY ({})",
                self.quoted_list(&table.primary_key)
            ));
        }
        let (constraints, indexes): (Vec<&Key>, Vec<&Key>) =
            table.keys.iter().partition(|key| is_autoindex(key));
        definitions.extend(constraints.into_iter().map(|key| self.unique_clause(key)));
        definitions.extend(table.foreign_keys.iter().map(|fk| self.foreign_key_clause(fk)));

        let mut statements = vec![format!(
            "CREATE TABLE {} (\n  {}\n)",
            self.quote_identifier(&table.name),
            definitions.join(",\n  ")
        )];
        statements.extend(
            indexes
                .into_iter()
                .map(|key| self.create_index_sql(&table.name, key)),
        );
        statements.join(";\n")
    }

    fn generate_drop_table(&self, table: &Table) -> String {
        format!("DROP TABLE {}", self.quote_identifier(&table.name))
    }

    fn generate_add_column(&self, table: &Table, column: &Column) -> String {
        format!(
            "ALTER TABLE {} ADD COLUMN {}",
            self.quote_identifier(&table.name),
            self.column_definition(column)
        )
    }

    fn generate_alter_column_to(&self, table: &Table, current: &Column, target: &Column) -> String {
        let mut statements = Vec::new();
        if current.name != target.name {
            statements.push(format!(
                "ALTER TABLE {} RENAME COLUMN {} TO {}",
                self.quote_identifier(&table.name),
                self.quote_identifier(&current.name),
                self.quote_identifier(&target.name)
            ));
        }
        if self.are_columns_equal(target, current).is_some() {
            statements.push(format!(
                "-- ALTER COLUMN not directly supported in SQLite. \
                 Table recreation required for: {}.{} ({})",
                table.name,
                target.name,
                self.column_definition(target)
            ));
        }
        statements.join(";\n")
    }

    fn generate_drop_column(&self, table: &Table, column: &Column) -> String {
        format!(
            "ALTER TABLE {} DROP COLUMN {}",
            self.quote_identifier(&table.name),
            self.quote_identifier(&column.name)
        )
    }

    fn generate_add_key(&self, table: &Table, key: &Key) -> String {
        if is_autoindex(key) {
            return self.unique_recreation_comment(table, key, "added after table creation");
        }
        self.create_index_sql(&table.name, key)
    }

    fn generate_alter_key(&self, table: &Table, current: &Key, target: &Key) -> String {
        if is_autoindex(current) || is_autoindex(target) {
            return self.unique_recreation_comment(table, target, "changed");
        }
        format!(
            "{};\n{}",
            self.drop_index_sql(current),
            self.create_index_sql(&table.name, target)
        )
    }

    fn generate_drop_key(&self, _table: &Table, key: &Key) -> String {
        self.drop_index_sql(key)
    }

    fn generate_add_foreign_key(&self, table: &Table, fk: &ForeignKey) -> String {
        format!(
            "-- Foreign key {fk} cannot be added after table creation in SQLite. \
             Table recreation required for: {}",
            table.name
        )
    }

    fn generate_alter_foreign_key(
        &self,
        table: &Table,
        _current: &ForeignKey,
        target: &ForeignKey,
    ) -> String {
        format!(
            "-- Foreign key {target} cannot be changed in SQLite. \
             Table recreation required for: {}",
            table.name
        )
    }

    fn generate_drop_foreign_key(&self, table: &Table, fk: &ForeignKey) -> String {
        format!(
            "-- Foreign key {} cannot be dropped in SQLite. \
             Table recreation required for: {}",
            fk.name, table.name
        )
    }

    fn generate_alter_primary_key(&self, table: &Table) -> String {
        format!(
            "-- PRIMARY KEY ({}) cannot be changed in SQLite. \
             Table recreation required for: {}",
            table.primary_key.join(", "),
            table.name
        )
    }
}
