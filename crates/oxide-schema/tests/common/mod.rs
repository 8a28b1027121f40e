#![allow(dead_code)]

use oxide_schema::prelude::*;

/// Dialect rendering one statement per action, close enough to real DDL to
/// read in assertions.
pub struct TextDialect;

impl SchemaDialect for TextDialect {
    fn name(&self) -> &'static str {
        "text"
    }

    fn are_columns_equal(&self, target: &Column, current: &Column) -> Option<String> {
        if target.type_code != current.type_code {
            let names = TypeNames::new();
            Some(format!(
                "type {} -> {}",
                names.describe(current.type_code),
                names.describe(target.type_code)
            ))
        } else if target.nullable != current.nullable {
            Some("nullability".to_string())
        } else if target.length != current.length {
            Some(format!("length {} -> {}", current.length, target.length))
        } else {
            None
        }
    }

    fn is_column_case_sensitive(&self) -> bool {
        false
    }

    fn should_drop_key(&self, _target: &Table, _current: &Table, _key: &Key) -> bool {
        true
    }

    fn generate_create_table(&self, table: &Table) -> String {
        let columns: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        format!("CREATE TABLE {} ({})", table.name, columns.join(", "))
    }

    fn generate_drop_table(&self, table: &Table) -> String {
        format!("DROP TABLE {}", table.name)
    }

    fn generate_add_column(&self, table: &Table, column: &Column) -> String {
        format!("ALTER TABLE {} ADD COLUMN {}", table.name, column.name)
    }

    fn generate_alter_column_to(&self, table: &Table, current: &Column, target: &Column) -> String {
        format!(
            "ALTER TABLE {} ALTER COLUMN {} TO {}",
            table.name, current.name, target.name
        )
    }

    fn generate_drop_column(&self, table: &Table, column: &Column) -> String {
        format!("ALTER TABLE {} DROP COLUMN {}", table.name, column.name)
    }

    fn generate_add_key(&self, table: &Table, key: &Key) -> String {
        format!(
            "CREATE INDEX {} ON {} ({})",
            key.name,
            table.name,
            key.columns().join(", ")
        )
    }

    fn generate_alter_key(&self, table: &Table, _current: &Key, target: &Key) -> String {
        format!("REINDEX {}.{}", table.name, target.name)
    }

    fn generate_drop_key(&self, _table: &Table, key: &Key) -> String {
        format!("DROP INDEX {}", key.name)
    }

    fn generate_add_foreign_key(&self, table: &Table, fk: &ForeignKey) -> String {
        format!("ALTER TABLE {} ADD CONSTRAINT {fk}", table.name)
    }

    fn generate_alter_foreign_key(
        &self,
        table: &Table,
        _current: &ForeignKey,
        target: &ForeignKey,
    ) -> String {
        format!("ALTER TABLE {} ALTER CONSTRAINT {target}", table.name)
    }

    fn generate_drop_foreign_key(&self, table: &Table, fk: &ForeignKey) -> String {
        format!("ALTER TABLE {} DROP CONSTRAINT {}", table.name, fk.name)
    }

    fn generate_alter_primary_key(&self, table: &Table) -> String {
        format!(
            "ALTER TABLE {} PRIMARY KEY ({})",
            table.name,
            table.primary_key.join(", ")
        )
    }
}

pub fn differ() -> SchemaDiffer<TextDialect> {
    SchemaDiffer::new(TextDialect)
}

pub fn kinds(actions: &[SchemaUpdateAction]) -> Vec<ActionKind> {
    actions.iter().map(SchemaUpdateAction::kind).collect()
}

pub fn users() -> Table {
    Table::new("USERS")
        .column(Column::new("id", types::BIGINT).not_null())
        .column(Column::varchar("name", 100))
        .primary_key(["id"])
}

pub fn orders() -> Table {
    Table::new("ORDERS")
        .column(Column::new("id", types::BIGINT).not_null())
        .column(Column::new("user_id", types::BIGINT))
        .primary_key(["id"])
        .foreign_key(ForeignKey::simple("FK_ORDER_USER", "user_id", "USERS", "id"))
}

pub fn order_items() -> Table {
    Table::new("ORDER_ITEMS")
        .column(Column::new("id", types::BIGINT).not_null())
        .column(Column::new("order_id", types::BIGINT))
        .column(Column::decimal("price", 10, 2))
        .primary_key(["id"])
        .foreign_key(ForeignKey::simple(
            "FK_ITEM_ORDER",
            "order_id",
            "ORDERS",
            "id",
        ))
        .key(Key::on("IDX_ITEM_ORDER", ["order_id"]))
}

/// Builds the schema that results from applying `actions` to `current`,
/// assuming each action does what its kind says.
///
/// Tables touched by an action are replaced by their target definition;
/// dropped tables are removed.
pub fn apply(current: &[Table], target: &[Table], actions: &[SchemaUpdateAction]) -> Vec<Table> {
    let mut result: Vec<Table> = current
        .iter()
        .filter(|t| {
            !actions.iter().any(|a| {
                a.kind() == ActionKind::DropTable && a.table().eq_ignore_ascii_case(&t.name)
            })
        })
        .cloned()
        .collect();

    for action in actions {
        if action.kind() == ActionKind::DropTable {
            continue;
        }
        let Some(wanted) = target
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(action.table()))
        else {
            continue;
        };
        let mut replacement = wanted.clone();
        for column in &mut replacement.columns {
            column.old_name = None;
        }
        match result
            .iter_mut()
            .find(|t| t.name.eq_ignore_ascii_case(action.table()))
        {
            Some(existing) => *existing = replacement,
            None => result.push(replacement),
        }
    }
    result
}
