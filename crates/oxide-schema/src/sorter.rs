//! Foreign key dependency ordering.
//!
//! Tables are ordered so that a table comes after every table its foreign
//! keys reference. This is a bounded fixed-point pass rather than a full
//! topological sort: a table with unresolved references is moved to the end
//! of the list, and after `n²` steps the pass gives up and keeps whatever
//! order it reached. Circular references therefore degrade to a partial
//! order instead of an error.

use std::collections::BTreeSet;

use crate::schema::Table;

/// Result of [`order_with_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOrder<'a> {
    /// All input tables, dependencies first where possible.
    pub tables: Vec<&'a Table>,
    /// Tables whose references could not be satisfied before the step budget
    /// ran out (cycles or references to tables outside the set).
    pub unresolved: Vec<&'a str>,
}

/// Orders `tables` so referenced tables come first.
#[must_use]
pub fn order(tables: &[Table]) -> Vec<&Table> {
    order_with_report(tables).tables
}

/// Orders `tables` so referenced tables come first and reports the tables
/// left unresolved.
#[must_use]
pub fn order_with_report(tables: &[Table]) -> TableOrder<'_> {
    let mut sorted: Vec<&Table> = tables.iter().collect();
    let mut handled: BTreeSet<String> = BTreeSet::new();
    let mut index = 0;
    // Worst case every table is compared with every other one; past that
    // the remaining tables reference each other circularly.
    let mut budget = sorted.len() * sorted.len();

    while index < sorted.len() && budget > 0 {
        budget -= 1;
        let table = sorted[index];
        if has_open_references(table, &handled) {
            let deferred = sorted.remove(index);
            sorted.push(deferred);
        } else {
            handled.insert(table.name.to_ascii_lowercase());
            index += 1;
        }
    }

    let unresolved = sorted[index..].iter().map(|t| t.name.as_str()).collect();
    TableOrder {
        tables: sorted,
        unresolved,
    }
}

fn has_open_references(table: &Table, handled: &BTreeSet<String>) -> bool {
    table
        .foreign_keys
        .iter()
        .filter(|fk| !fk.references(&table.name))
        .any(|fk| !handled.contains(&fk.foreign_table.to_ascii_lowercase()))
}
