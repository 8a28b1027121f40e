//! Loading and validating declared schemas.
//!
//! Target schemas are usually declared in a JSON file: an array of tables in
//! the serde form of [`Table`]. The same format is produced when dumping an
//! introspected schema, so a dump can be edited and used as the next target.

use std::collections::BTreeSet;

use crate::error::{Result, SchemaError};
use crate::schema::Table;

/// Parses and validates a JSON schema definition.
pub fn parse_schema(json: &str) -> Result<Vec<Table>> {
    let tables: Vec<Table> = serde_json::from_str(json)?;
    validate(&tables)?;
    Ok(tables)
}

/// Serializes tables into the definition format.
pub fn to_json(tables: &[Table]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tables)?)
}

/// Checks that a schema is internally consistent.
///
/// Reports every problem found, not just the first one.
pub fn validate(tables: &[Table]) -> Result<()> {
    let mut errors = Vec::new();
    let mut table_names = BTreeSet::new();

    for table in tables {
        if table.name.trim().is_empty() {
            errors.push(invalid("a table has an empty name".to_string()));
            continue;
        }
        if !table_names.insert(table.name.to_ascii_lowercase()) {
            errors.push(invalid(format!("table '{}' is declared twice", table.name)));
        }
        validate_table(table, &mut errors);
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(SchemaError::Multiple(errors)),
    }
}

fn validate_table(table: &Table, errors: &mut Vec<SchemaError>) {
    let mut column_names = BTreeSet::new();
    for column in &table.columns {
        if column.name.trim().is_empty() {
            errors.push(invalid(format!(
                "table '{}' has a column with an empty name",
                table.name
            )));
        } else if !column_names.insert(column.name.to_ascii_lowercase()) {
            errors.push(invalid(format!(
                "column '{}' of table '{}' is declared twice",
                column.name, table.name
            )));
        }
    }

    let mut check_columns = |what: String, columns: &[&str]| {
        if columns.is_empty() {
            errors.push(invalid(format!("{what} has no columns")));
        }
        for column in columns {
            if table.get_column(column).is_none() {
                errors.push(invalid(format!("{what} uses unknown column '{column}'")));
            }
        }
    };

    if !table.primary_key.is_empty() {
        let pk: Vec<&str> = table.primary_key.iter().map(String::as_str).collect();
        check_columns(format!("the primary key of '{}'", table.name), &pk);
    }
    for key in &table.keys {
        check_columns(
            format!("index '{}' of table '{}'", key.name, table.name),
            &key.columns(),
        );
    }
    for fk in &table.foreign_keys {
        check_columns(
            format!("foreign key '{}' of table '{}'", fk.name, table.name),
            &fk.columns(),
        );
    }

    // Indexes and foreign keys have separate namespaces.
    check_unique_names(table, "key", table.keys.iter().map(|k| &k.name), errors);
    check_unique_names(
        table,
        "foreign key",
        table.foreign_keys.iter().map(|fk| &fk.name),
        errors,
    );
}

fn check_unique_names<'a>(
    table: &Table,
    what: &str,
    names: impl Iterator<Item = &'a String>,
    errors: &mut Vec<SchemaError>,
) {
    let mut seen = BTreeSet::new();
    for name in names {
        if !seen.insert(name.to_ascii_lowercase()) {
            errors.push(invalid(format!(
                "{what} '{name}' of table '{}' is declared twice",
                table.name
            )));
        }
    }
}

fn invalid(message: String) -> SchemaError {
    SchemaError::InvalidDefinition(message)
}
