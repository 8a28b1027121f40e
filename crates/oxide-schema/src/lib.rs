//! Schema reconciliation for relational databases.
//!
//! `oxide-schema` compares the structure a database currently has with the
//! structure an application declares, and computes the ordered list of DDL
//! actions that turns one into the other:
//! - Tables are processed in foreign key dependency order
//! - Columns renamed through a previous-name hint become one ALTER, not ADD + DROP
//! - Every action carries a reason and whether it may lose data
//!
//! The crate never touches a database. The current schema comes in through
//! [`introspect::Introspect`], and DDL text is produced by a
//! [`dialect::SchemaDialect`] implementation (see `oxide-schema-sqlite`).
//!
//! # Architecture
//!
//! - **Schema** - Tables, columns, keys and foreign keys
//! - **Types** - Dialect-neutral type codes and their names
//! - **Sorter** - Orders tables by foreign key dependencies
//! - **Differ** - Computes the actions for a pair of schemas
//! - **Definition** - Loads target schemas from JSON
//!
//! # Example
//!
//! ```rust,ignore
//! use oxide_schema::prelude::*;
//!
//! let target = vec![
//!     Table::new("users")
//!         .column(Column::new("id", types::BIGINT).not_null())
//!         .column(Column::varchar("email", 255))
//!         .primary_key(["id"]),
//! ];
//!
//! let differ = SchemaDiffer::new(my_dialect);
//! for action in differ.migrate_schema_to(&introspector, &target, false)? {
//!     println!("-- {action}");
//!     println!("{};", action.sql());
//! }
//! ```

pub mod action;
pub mod definition;
pub mod dialect;
pub mod differ;
pub mod error;
pub mod introspect;
pub mod schema;
pub mod sorter;
pub mod types;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::action::{ActionKind, SchemaUpdateAction};
    pub use crate::definition::{parse_schema, to_json, validate};
    pub use crate::dialect::SchemaDialect;
    pub use crate::differ::SchemaDiffer;
    pub use crate::error::{Result, SchemaError};
    pub use crate::introspect::{Introspect, StaticSchema};
    pub use crate::schema::{find_table, Column, ForeignKey, Key, Table};
    pub use crate::sorter::{order, order_with_report, TableOrder};
    pub use crate::types::{self, TypeNames};
}
