//! Structural differ.
//!
//! Compares the current schema of a database with a target schema and
//! produces the ordered list of actions that turns the former into the
//! latter:
//!
//! 1. target tables are ordered by their foreign key dependencies,
//! 2. each target table is created, or synchronized with its current
//!    counterpart (columns, foreign keys, keys, primary key, in that order),
//! 3. optionally, tables missing from the target are dropped.
//!
//! Lookups are linear scans so the output order only depends on the input
//! order.

use tracing::{debug, warn};

use crate::action::{ActionKind, SchemaUpdateAction};
use crate::dialect::SchemaDialect;
use crate::error::{Result, SchemaError};
use crate::introspect::Introspect;
use crate::schema::{column_lists_equal, find_table, same_name, Column, Table};
use crate::sorter;

/// Computes schema update actions using a dialect.
#[derive(Debug, Clone)]
pub struct SchemaDiffer<D> {
    dialect: D,
}

impl<D: SchemaDialect> SchemaDiffer<D> {
    /// Creates a differ for the given dialect.
    pub const fn new(dialect: D) -> Self {
        Self { dialect }
    }

    /// Returns the dialect.
    pub const fn dialect(&self) -> &D {
        &self.dialect
    }

    /// Reads the current schema from `source` and lets the dialect complete
    /// each table.
    pub fn current_schema<I: Introspect>(&self, source: &I) -> Result<Vec<Table>> {
        let tables = source
            .read_schema()
            .map_err(|e| SchemaError::Connectivity(Box::new(e)))?;
        Ok(tables
            .into_iter()
            .map(|t| self.dialect.complete_table_infos(t))
            .collect())
    }

    /// Reads the current schema from `source` and compares it with `target`.
    pub fn migrate_schema_to<I: Introspect>(
        &self,
        source: &I,
        target: &[Table],
        drop_tables: bool,
    ) -> Result<Vec<SchemaUpdateAction>> {
        let current = self.current_schema(source)?;
        Ok(self.diff(&current, target, drop_tables))
    }

    /// Compares two schemas and returns the actions needed to transform
    /// `current` into `target`.
    ///
    /// Creations and changes come in foreign key dependency order; drops of
    /// tables absent from `target` (only if `drop_tables` is set) come last.
    #[must_use]
    pub fn diff(
        &self,
        current: &[Table],
        target: &[Table],
        drop_tables: bool,
    ) -> Vec<SchemaUpdateAction> {
        let mut actions = Vec::new();

        let order = sorter::order_with_report(target);
        if !order.unresolved.is_empty() {
            warn!(
                tables = ?order.unresolved,
                "Foreign key references could not be ordered (circular or missing tables)"
            );
        }

        for target_table in order.tables {
            match find_table(current, &target_table.name) {
                None => {
                    debug!(table = %target_table.name, "Table does not exist");
                    self.push(
                        &mut actions,
                        ActionKind::CreateTable,
                        target_table,
                        format!("The table '{}' does not exist.", target_table.name),
                        self.dialect.generate_create_table(target_table),
                    );
                }
                Some(current_table) => {
                    debug!(table = %target_table.name, "Synchronizing table");
                    self.sync_table(target_table, current_table, &mut actions);
                }
            }
        }

        if drop_tables {
            for table in current {
                if find_table(target, &table.name).is_none() {
                    self.push(
                        &mut actions,
                        ActionKind::DropTable,
                        table,
                        format!("The table '{}' is no longer used.", table.name),
                        self.dialect.generate_drop_table(table),
                    );
                }
            }
        }

        actions
    }

    /// Compares two versions of the same table.
    fn sync_table(&self, target: &Table, current: &Table, actions: &mut Vec<SchemaUpdateAction>) {
        self.sync_columns(target, current, actions);
        self.sync_foreign_keys(target, current, actions);
        self.sync_keys(target, current, actions);

        if !column_lists_equal(&target.primary_key, &current.primary_key) {
            self.push(
                actions,
                ActionKind::AlterPrimaryKey,
                target,
                format!("The primary key of '{}' changed.", target.name),
                self.dialect.generate_alter_primary_key(target),
            );
        }
    }

    fn sync_columns(&self, target: &Table, current: &Table, actions: &mut Vec<SchemaUpdateAction>) {
        let mut used = vec![false; current.columns.len()];

        for target_col in &target.columns {
            let found = self.find_column(current, &target_col.name).or_else(|| {
                target_col
                    .old_name
                    .as_deref()
                    .and_then(|old| self.find_column(current, old))
            });

            let Some(index) = found else {
                self.push(
                    actions,
                    ActionKind::AddColumn,
                    target,
                    format!(
                        "The column '{}' of table '{}' does not exist.",
                        target_col.name, target.name
                    ),
                    self.dialect.generate_add_column(target, target_col),
                );
                continue;
            };

            used[index] = true;
            let current_col = &current.columns[index];
            if let Some(reason) = self.column_change(target, target_col, current_col) {
                self.push(
                    actions,
                    ActionKind::AlterColumn,
                    target,
                    reason,
                    self.dialect
                        .generate_alter_column_to(target, current_col, target_col),
                );
            }
        }

        for (column, _) in current.columns.iter().zip(used).filter(|(_, used)| !used) {
            self.push(
                actions,
                ActionKind::DropColumn,
                target,
                format!(
                    "The column '{}' of table '{}' is no longer used.",
                    column.name, target.name
                ),
                self.dialect.generate_drop_column(current, column),
            );
        }
    }

    /// Describes why `current` has to change to become `target`, if it does.
    fn column_change(&self, table: &Table, target: &Column, current: &Column) -> Option<String> {
        if let Some(reason) = self.dialect.are_columns_equal(target, current) {
            return Some(format!(
                "The column '{}' of table '{}' needs a change: {}",
                target.name, table.name, reason
            ));
        }
        let renamed = if self.dialect.is_column_case_sensitive() {
            target.name != current.name
        } else {
            !same_name(&target.name, &current.name)
        };
        renamed.then(|| {
            format!(
                "The column '{}' of table '{}' needs to be renamed from '{}'.",
                target.name, table.name, current.name
            )
        })
    }

    /// Finds a column of `table` by its (dialect translated) name.
    fn find_column(&self, table: &Table, name: &str) -> Option<usize> {
        let name = self.dialect.translate_column_name(name);
        table.columns.iter().position(|c| same_name(&c.name, &name))
    }

    fn sync_foreign_keys(
        &self,
        target: &Table,
        current: &Table,
        actions: &mut Vec<SchemaUpdateAction>,
    ) {
        for target_fk in &target.foreign_keys {
            match current.get_foreign_key(&target_fk.name) {
                None => self.push(
                    actions,
                    ActionKind::AddForeignKey,
                    target,
                    format!(
                        "The foreign key '{}' of table '{}' does not exist.",
                        target_fk.name, target.name
                    ),
                    self.dialect.generate_add_foreign_key(target, target_fk),
                ),
                Some(current_fk) => {
                    let unchanged = column_lists_equal(&target_fk.columns(), &current_fk.columns())
                        && column_lists_equal(
                            &target_fk.foreign_columns(),
                            &current_fk.foreign_columns(),
                        )
                        && current_fk.references(&target_fk.foreign_table);
                    if !unchanged {
                        self.push(
                            actions,
                            ActionKind::AlterForeignKey,
                            target,
                            format!(
                                "The foreign key '{}' of table '{}' needs a change.",
                                target_fk.name, target.name
                            ),
                            self.dialect
                                .generate_alter_foreign_key(target, current_fk, target_fk),
                        );
                    }
                }
            }
        }

        for current_fk in &current.foreign_keys {
            if target.get_foreign_key(&current_fk.name).is_none() {
                self.push(
                    actions,
                    ActionKind::DropForeignKey,
                    target,
                    format!(
                        "The foreign key '{}' of table '{}' is no longer used.",
                        current_fk.name, target.name
                    ),
                    self.dialect.generate_drop_foreign_key(current, current_fk),
                );
            }
        }
    }

    fn sync_keys(&self, target: &Table, current: &Table, actions: &mut Vec<SchemaUpdateAction>) {
        for target_key in &target.keys {
            match current.get_key(&target_key.name) {
                None => self.push(
                    actions,
                    ActionKind::AddKey,
                    target,
                    format!(
                        "The index '{}' of table '{}' does not exist.",
                        target_key.name, target.name
                    ),
                    self.dialect.generate_add_key(target, target_key),
                ),
                Some(current_key) => {
                    if !column_lists_equal(&target_key.columns(), &current_key.columns()) {
                        self.push(
                            actions,
                            ActionKind::AlterKey,
                            target,
                            format!(
                                "The index '{}' of table '{}' needs a change.",
                                target_key.name, target.name
                            ),
                            self.dialect
                                .generate_alter_key(target, current_key, target_key),
                        );
                    }
                }
            }
        }

        // Indexes backing a same-named foreign key, or ones the engine
        // created on its own, are left alone.
        for current_key in &current.keys {
            if target.get_key(&current_key.name).is_none()
                && target.get_foreign_key(&current_key.name).is_none()
                && self.dialect.should_drop_key(target, current, current_key)
            {
                self.push(
                    actions,
                    ActionKind::DropKey,
                    target,
                    format!(
                        "The index '{}' of table '{}' is no longer used.",
                        current_key.name, target.name
                    ),
                    self.dialect.generate_drop_key(current, current_key),
                );
            }
        }
    }

    /// Records an action. An empty DDL payload is a bug in the dialect.
    fn push(
        &self,
        actions: &mut Vec<SchemaUpdateAction>,
        kind: ActionKind,
        table: &Table,
        reason: String,
        sql: String,
    ) {
        assert!(
            !sql.trim().is_empty(),
            "dialect '{}' rendered no DDL for {kind:?} on table '{}'",
            self.dialect.name(),
            table.name
        );
        debug!(kind = ?kind, table = %table.name, "{reason}");
        actions.push(SchemaUpdateAction::new(kind, &table.name, reason, sql));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ForeignKey, Key};
    use crate::types;

    /// Dialect rendering each action as `<KIND> <table>.<object>`.
    struct PlainDialect {
        case_sensitive: bool,
        upper_case_names: bool,
    }

    impl PlainDialect {
        const fn new() -> Self {
            Self {
                case_sensitive: false,
                upper_case_names: false,
            }
        }
    }

    impl SchemaDialect for PlainDialect {
        fn name(&self) -> &'static str {
            "plain"
        }

        fn are_columns_equal(&self, target: &Column, current: &Column) -> Option<String> {
            if target.type_code != current.type_code {
                Some("type differs".to_string())
            } else if target.nullable != current.nullable {
                Some("nullability differs".to_string())
            } else {
                None
            }
        }

        fn is_column_case_sensitive(&self) -> bool {
            self.case_sensitive
        }

        fn translate_column_name(&self, name: &str) -> String {
            if self.upper_case_names {
                name.to_uppercase()
            } else {
                name.to_string()
            }
        }

        fn should_drop_key(&self, _target: &Table, _current: &Table, key: &Key) -> bool {
            !key.name.starts_with("auto_")
        }

        fn generate_create_table(&self, table: &Table) -> String {
            format!("CREATE {}", table.name)
        }

        fn generate_drop_table(&self, table: &Table) -> String {
            format!("DROP {}", table.name)
        }

        fn generate_add_column(&self, table: &Table, column: &Column) -> String {
            format!("ADD COLUMN {}.{}", table.name, column.name)
        }

        fn generate_alter_column_to(
            &self,
            table: &Table,
            current: &Column,
            target: &Column,
        ) -> String {
            format!("ALTER COLUMN {}.{} TO {}", table.name, current.name, target.name)
        }

        fn generate_drop_column(&self, table: &Table, column: &Column) -> String {
            format!("DROP COLUMN {}.{}", table.name, column.name)
        }

        fn generate_add_key(&self, table: &Table, key: &Key) -> String {
            format!("ADD KEY {}.{}", table.name, key.name)
        }

        fn generate_alter_key(&self, table: &Table, _current: &Key, target: &Key) -> String {
            format!("ALTER KEY {}.{}", table.name, target.name)
        }

        fn generate_drop_key(&self, table: &Table, key: &Key) -> String {
            format!("DROP KEY {}.{}", table.name, key.name)
        }

        fn generate_add_foreign_key(&self, table: &Table, fk: &ForeignKey) -> String {
            format!("ADD FK {}.{}", table.name, fk.name)
        }

        fn generate_alter_foreign_key(
            &self,
            table: &Table,
            _current: &ForeignKey,
            target: &ForeignKey,
        ) -> String {
            format!("ALTER FK {}.{}", table.name, target.name)
        }

        fn generate_drop_foreign_key(&self, table: &Table, fk: &ForeignKey) -> String {
            format!("DROP FK {}.{}", table.name, fk.name)
        }

        fn generate_alter_primary_key(&self, table: &Table) -> String {
            format!("ALTER PK {}", table.name)
        }
    }

    struct SilentDialect;

    impl SchemaDialect for SilentDialect {
        fn name(&self) -> &'static str {
            "silent"
        }
        fn are_columns_equal(&self, _: &Column, _: &Column) -> Option<String> {
            None
        }
        fn is_column_case_sensitive(&self) -> bool {
            false
        }
        fn should_drop_key(&self, _: &Table, _: &Table, _: &Key) -> bool {
            true
        }
        fn generate_create_table(&self, _: &Table) -> String {
            String::new()
        }
        fn generate_drop_table(&self, _: &Table) -> String {
            String::new()
        }
        fn generate_add_column(&self, _: &Table, _: &Column) -> String {
            String::new()
        }
        fn generate_alter_column_to(&self, _: &Table, _: &Column, _: &Column) -> String {
            String::new()
        }
        fn generate_drop_column(&self, _: &Table, _: &Column) -> String {
            String::new()
        }
        fn generate_add_key(&self, _: &Table, _: &Key) -> String {
            String::new()
        }
        fn generate_alter_key(&self, _: &Table, _: &Key, _: &Key) -> String {
            String::new()
        }
        fn generate_drop_key(&self, _: &Table, _: &Key) -> String {
            String::new()
        }
        fn generate_add_foreign_key(&self, _: &Table, _: &ForeignKey) -> String {
            String::new()
        }
        fn generate_alter_foreign_key(&self, _: &Table, _: &ForeignKey, _: &ForeignKey) -> String {
            String::new()
        }
        fn generate_drop_foreign_key(&self, _: &Table, _: &ForeignKey) -> String {
            String::new()
        }
        fn generate_alter_primary_key(&self, _: &Table) -> String {
            String::new()
        }
    }

    fn differ() -> SchemaDiffer<PlainDialect> {
        SchemaDiffer::new(PlainDialect::new())
    }

    fn users() -> Table {
        Table::new("users")
            .column(Column::new("id", types::BIGINT).not_null())
            .column(Column::varchar("name", 80))
            .primary_key(["id"])
    }

    fn kinds(actions: &[SchemaUpdateAction]) -> Vec<ActionKind> {
        actions.iter().map(SchemaUpdateAction::kind).collect()
    }

    #[test]
    fn test_no_changes() {
        let schema = vec![users()];
        assert!(differ().diff(&schema, &schema, true).is_empty());
    }

    #[test]
    fn test_detect_new_table() {
        let actions = differ().diff(&[], &[users()], false);

        assert_eq!(kinds(&actions), vec![ActionKind::CreateTable]);
        assert_eq!(actions[0].sql(), "CREATE users");
        assert_eq!(actions[0].reason(), "The table 'users' does not exist.");
        assert!(!actions[0].data_loss_possible());
    }

    #[test]
    fn test_table_match_ignores_case() {
        let mut upper = users();
        upper.name = "USERS".to_string();

        assert!(differ().diff(&[upper], &[users()], true).is_empty());
    }

    #[test]
    fn test_dropped_table_only_when_requested() {
        let current = vec![users(), Table::new("legacy")];
        let target = vec![users()];

        assert!(differ().diff(&current, &target, false).is_empty());

        let actions = differ().diff(&current, &target, true);
        assert_eq!(kinds(&actions), vec![ActionKind::DropTable]);
        assert_eq!(actions[0].table(), "legacy");
        assert!(actions[0].data_loss_possible());
    }

    #[test]
    fn test_drops_come_after_creates() {
        let current = vec![Table::new("legacy")];
        let target = vec![users()];

        let actions = differ().diff(&current, &target, true);
        assert_eq!(
            kinds(&actions),
            vec![ActionKind::CreateTable, ActionKind::DropTable]
        );
    }

    #[test]
    fn test_detect_changed_column() {
        let current = vec![users()];
        let target = vec![Table::new("users")
            .column(Column::new("id", types::BIGINT).not_null())
            .column(Column::varchar("name", 80).not_null())
            .primary_key(["id"])];

        let actions = differ().diff(&current, &target, false);
        assert_eq!(kinds(&actions), vec![ActionKind::AlterColumn]);
        assert_eq!(
            actions[0].reason(),
            "The column 'name' of table 'users' needs a change: nullability differs"
        );
        assert!(actions[0].data_loss_possible());
    }

    #[test]
    fn test_detect_dropped_column() {
        let current = vec![users().column(Column::new("age", types::INTEGER))];

        let actions = differ().diff(&current, &[users()], false);
        assert_eq!(kinds(&actions), vec![ActionKind::DropColumn]);
        assert_eq!(actions[0].sql(), "DROP COLUMN users.age");
    }

    #[test]
    fn test_rename_via_old_name() {
        let current = vec![users()];
        let target = vec![Table::new("users")
            .column(Column::new("id", types::BIGINT).not_null())
            .column(Column::varchar("full_name", 80).renamed_from("name"))
            .primary_key(["id"])];

        let actions = differ().diff(&current, &target, false);
        assert_eq!(kinds(&actions), vec![ActionKind::AlterColumn]);
        assert_eq!(actions[0].sql(), "ALTER COLUMN users.name TO full_name");
        assert!(actions[0].reason().contains("renamed from 'name'"));
    }

    #[test]
    fn test_old_name_ignored_when_new_name_exists() {
        let current = vec![users().column(Column::varchar("full_name", 80))];
        let target = vec![Table::new("users")
            .column(Column::new("id", types::BIGINT).not_null())
            .column(Column::varchar("full_name", 80).renamed_from("name"))
            .primary_key(["id"])];

        let actions = differ().diff(&current, &target, false);
        assert_eq!(kinds(&actions), vec![ActionKind::DropColumn]);
        assert_eq!(actions[0].sql(), "DROP COLUMN users.name");
    }

    #[test]
    fn test_case_only_rename_depends_on_dialect() {
        let current = vec![users()];
        let target = vec![Table::new("users")
            .column(Column::new("ID", types::BIGINT).not_null())
            .column(Column::varchar("name", 80))
            .primary_key(["id"])];

        assert!(differ().diff(&current, &target, false).is_empty());

        let sensitive = SchemaDiffer::new(PlainDialect {
            case_sensitive: true,
            upper_case_names: false,
        });
        let actions = sensitive.diff(&current, &target, false);
        assert_eq!(kinds(&actions), vec![ActionKind::AlterColumn]);
    }

    #[test]
    fn test_lookup_uses_translated_names() {
        let current = vec![Table::new("users")
            .column(Column::new("ID", types::BIGINT).not_null())
            .column(Column::varchar("FULL_NAME", 80))
            .primary_key(["ID"])];
        let target = vec![Table::new("users")
            .column(Column::new("id", types::BIGINT).not_null())
            .column(Column::varchar("display_name", 80).renamed_from("full_name"))
            .primary_key(["id"])];

        let differ = SchemaDiffer::new(PlainDialect {
            case_sensitive: true,
            upper_case_names: true,
        });
        let actions = differ.diff(&current, &target, false);

        // "id" vs "ID" differs only by case but the dialect is case
        // sensitive, so both columns need an ALTER.
        assert_eq!(
            kinds(&actions),
            vec![ActionKind::AlterColumn, ActionKind::AlterColumn]
        );
        assert_eq!(actions[1].sql(), "ALTER COLUMN users.FULL_NAME TO display_name");
    }

    #[test]
    fn test_primary_key_change() {
        let current = vec![users()];
        let target = vec![users().primary_key(["id", "name"])];

        let actions = differ().diff(&current, &target, false);
        assert_eq!(kinds(&actions), vec![ActionKind::AlterPrimaryKey]);
        assert!(actions[0].data_loss_possible());
    }

    #[test]
    fn test_primary_key_compare_ignores_case() {
        let current = vec![users().primary_key(["ID"])];

        assert!(differ().diff(&current, &[users()], false).is_empty());
    }

    #[test]
    fn test_foreign_key_changes() {
        let orders = Table::new("orders")
            .column(Column::new("id", types::BIGINT).not_null())
            .column(Column::new("user_id", types::BIGINT))
            .column(Column::new("buyer_id", types::BIGINT))
            .primary_key(["id"]);

        let current = vec![
            users(),
            orders
                .clone()
                .foreign_key(ForeignKey::simple("fk_user", "user_id", "users", "id"))
                .foreign_key(ForeignKey::simple("fk_old", "buyer_id", "users", "id")),
        ];
        let target = vec![
            users(),
            orders
                .foreign_key(ForeignKey::simple("FK_USER", "buyer_id", "users", "id"))
                .foreign_key(ForeignKey::simple("fk_new", "user_id", "users", "id")),
        ];

        let actions = differ().diff(&current, &target, false);
        assert_eq!(
            kinds(&actions),
            vec![
                ActionKind::AlterForeignKey,
                ActionKind::AddForeignKey,
                ActionKind::DropForeignKey,
            ]
        );
        assert!(actions[0].data_loss_possible());
        assert!(!actions[1].data_loss_possible());
        assert_eq!(actions[2].sql(), "DROP FK orders.fk_old");
    }

    #[test]
    fn test_foreign_key_referenced_table_change() {
        let with_fk = |target_table: &str| {
            Table::new("orders")
                .column(Column::new("user_id", types::BIGINT))
                .foreign_key(ForeignKey::simple("fk_user", "user_id", target_table, "id"))
        };

        let unchanged = differ().diff(&[with_fk("USERS")], &[with_fk("users")], false);
        assert!(unchanged.is_empty());

        let actions = differ().diff(&[with_fk("users")], &[with_fk("accounts")], false);
        assert_eq!(kinds(&actions), vec![ActionKind::AlterForeignKey]);
    }

    #[test]
    fn test_key_changes() {
        let current = vec![users()
            .key(Key::on("idx_name", ["name"]))
            .key(Key::on("idx_old", ["name", "id"]))];
        let target = vec![users()
            .key(Key::on("IDX_NAME", ["name", "id"]))
            .key(Key::on("idx_new", ["id"]))];

        let actions = differ().diff(&current, &target, false);
        assert_eq!(
            kinds(&actions),
            vec![ActionKind::AlterKey, ActionKind::AddKey, ActionKind::DropKey]
        );
        assert_eq!(actions[2].sql(), "DROP KEY users.idx_old");
    }

    #[test]
    fn test_key_drop_guards() {
        let orders = || {
            Table::new("orders")
                .column(Column::new("user_id", types::BIGINT))
                .column(Column::new("id", types::BIGINT))
        };
        let current = vec![orders()
            .key(Key::on("fk_user", ["user_id"]))
            .key(Key::on("auto_index_1", ["id"]))];
        let target = vec![orders().foreign_key(ForeignKey::simple(
            "fk_user", "user_id", "users", "id",
        ))];

        let actions = differ().diff(&current, &target, false);
        // Only the missing FK is added: the same-named index backs it and the
        // auto index is refused by the dialect.
        assert_eq!(kinds(&actions), vec![ActionKind::AddForeignKey]);
    }

    #[test]
    fn test_sync_order_within_table() {
        let current = vec![users()
            .column(Column::new("age", types::INTEGER))
            .key(Key::on("idx_age", ["age"]))];
        let target = vec![users()
            .column(Column::new("email", types::VARCHAR))
            .foreign_key(ForeignKey::simple("fk_team", "id", "users", "id"))
            .primary_key(["id", "name"])];

        let actions = differ().diff(&current, &target, false);
        assert_eq!(
            kinds(&actions),
            vec![
                ActionKind::AddColumn,
                ActionKind::DropColumn,
                ActionKind::AddForeignKey,
                ActionKind::DropKey,
                ActionKind::AlterPrimaryKey,
            ]
        );
    }

    #[test]
    fn test_migrate_reads_through_introspect() {
        let source = crate::introspect::StaticSchema::new(vec![users()]);
        let target = vec![users().column(Column::new("email", types::VARCHAR))];

        let actions = differ().migrate_schema_to(&source, &target, false).unwrap();
        assert_eq!(kinds(&actions), vec![ActionKind::AddColumn]);
    }

    #[test]
    #[should_panic(expected = "rendered no DDL for CreateTable")]
    fn test_empty_ddl_is_a_dialect_bug() {
        let _ = SchemaDiffer::new(SilentDialect).diff(&[], &[users()], false);
    }
}
