//! Database dialect abstraction.
//!
//! The differ decides *which* change is needed; a dialect decides whether two
//! columns are equal on its engine and how each change is written as DDL.
//! Implementations live in driver crates (e.g. `oxide-schema-sqlite`).

use crate::schema::{Column, ForeignKey, Key, Table};

/// Engine specific rules and DDL rendering used by
/// [`SchemaDiffer`](crate::differ::SchemaDiffer).
///
/// Every `generate_*` method returns an opaque DDL payload. The differ never
/// inspects it beyond requiring that it is not empty.
pub trait SchemaDialect {
    /// Returns the dialect name.
    fn name(&self) -> &'static str;

    /// Post-processes a table read by introspection, e.g. to normalize names
    /// or fill in information the driver metadata does not report.
    fn complete_table_infos(&self, table: Table) -> Table {
        table
    }

    /// Compares a target column against the current one.
    ///
    /// Returns `None` if they are equal on this engine, or a short
    /// human-readable description of the difference.
    fn are_columns_equal(&self, target: &Column, current: &Column) -> Option<String>;

    /// Whether column names differing only by case are different columns.
    fn is_column_case_sensitive(&self) -> bool;

    /// Translates a column name into the form the engine reports it in.
    fn translate_column_name(&self, name: &str) -> String {
        name.to_string()
    }

    /// Whether an index present in the database but not in the target should
    /// be dropped. Engines that create indexes implicitly (for primary keys,
    /// unique constraints or foreign keys) return `false` for those.
    fn should_drop_key(&self, target: &Table, current: &Table, key: &Key) -> bool;

    /// Generates DDL creating `table` with all columns, keys and foreign keys.
    fn generate_create_table(&self, table: &Table) -> String;

    /// Generates DDL dropping `table`.
    fn generate_drop_table(&self, table: &Table) -> String;

    /// Generates DDL adding `column` to `table`.
    fn generate_add_column(&self, table: &Table, column: &Column) -> String;

    /// Generates DDL changing the `current` column (possibly under a different
    /// name) into `target`.
    fn generate_alter_column_to(&self, table: &Table, current: &Column, target: &Column) -> String;

    /// Generates DDL dropping `column` from `table`.
    fn generate_drop_column(&self, table: &Table, column: &Column) -> String;

    /// Generates DDL creating `key` on `table`.
    fn generate_add_key(&self, table: &Table, key: &Key) -> String;

    /// Generates DDL replacing the `current` key with `target`.
    fn generate_alter_key(&self, table: &Table, current: &Key, target: &Key) -> String;

    /// Generates DDL dropping `key` from `table`.
    fn generate_drop_key(&self, table: &Table, key: &Key) -> String;

    /// Generates DDL adding `fk` to `table`.
    fn generate_add_foreign_key(&self, table: &Table, fk: &ForeignKey) -> String;

    /// Generates DDL replacing the `current` foreign key with `target`.
    fn generate_alter_foreign_key(
        &self,
        table: &Table,
        current: &ForeignKey,
        target: &ForeignKey,
    ) -> String;

    /// Generates DDL dropping `fk` from `table`.
    fn generate_drop_foreign_key(&self, table: &Table, fk: &ForeignKey) -> String;

    /// Generates DDL giving `table` the primary key declared on it.
    fn generate_alter_primary_key(&self, table: &Table) -> String;

    /// Quote an identifier (table name, column name, etc.).
    fn quote_identifier(&self, name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }
}
