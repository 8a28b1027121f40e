//! Schema update actions.
//!
//! An action is one change the differ found necessary. It is advisory: the
//! crate never executes it.

use std::fmt;

use serde::Serialize;

/// The kind of change an action performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Create a missing table.
    CreateTable,
    /// Drop a table absent from the target.
    DropTable,
    /// Add a missing column.
    AddColumn,
    /// Change (or rename) an existing column.
    AlterColumn,
    /// Drop a column absent from the target.
    DropColumn,
    /// Create a missing index.
    AddKey,
    /// Change the columns of an index.
    AlterKey,
    /// Drop an index absent from the target.
    DropKey,
    /// Add a missing foreign key.
    AddForeignKey,
    /// Change a foreign key.
    AlterForeignKey,
    /// Drop a foreign key absent from the target.
    DropForeignKey,
    /// Change the primary key.
    AlterPrimaryKey,
}

impl ActionKind {
    /// Whether actions of this kind only add structure.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(
            self,
            Self::CreateTable | Self::AddColumn | Self::AddKey | Self::AddForeignKey
        )
    }
}

/// One required schema change.
///
/// Immutable once created; `data_loss_possible` is `true` for every kind that
/// is not purely additive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaUpdateAction {
    kind: ActionKind,
    table: String,
    reason: String,
    data_loss_possible: bool,
    sql: String,
}

impl SchemaUpdateAction {
    pub(crate) fn new(
        kind: ActionKind,
        table: impl Into<String>,
        reason: String,
        sql: String,
    ) -> Self {
        Self {
            kind,
            table: table.into(),
            reason,
            data_loss_possible: !kind.is_additive(),
            sql,
        }
    }

    /// The kind of change.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        self.kind
    }

    /// The table the change applies to.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Human-readable explanation of why the change is needed.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Whether executing the change may destroy data or structure.
    #[must_use]
    pub const fn data_loss_possible(&self) -> bool {
        self.data_loss_possible
    }

    /// The DDL payload rendered by the dialect.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }
}

impl fmt::Display for SchemaUpdateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data_loss_possible {
            write!(f, "[data loss possible] {}", self.reason)
        } else {
            f.write_str(&self.reason)
        }
    }
}
