//! SQLite support for `oxide-schema`.
//!
//! This crate reads the current schema of a SQLite database and renders
//! schema update actions as SQLite DDL:
//! - [`SqliteIntrospector`] reads tables, columns, indexes and foreign keys
//! - [`SqliteDialect`] compares columns by type affinity and renders DDL
//! - [`declared_type`] / [`parse_declared_type`] map type codes to declared
//!   types and back
//!
//! # Example
//!
//! ```rust,ignore
//! use oxide_schema::prelude::*;
//! use oxide_schema_sqlite::{SqliteDialect, SqliteIntrospector};
//!
//! let introspector = SqliteIntrospector::connect("sqlite:app.db", "main").await?;
//! let current = introspector.snapshot().await?;
//!
//! let differ = SchemaDiffer::new(SqliteDialect::new());
//! for action in differ.migrate_schema_to(&current, &target, false)? {
//!     println!("{};", action.sql());
//! }
//! ```

pub mod declared;
pub mod dialect;
pub mod error;
pub mod introspect;

pub use declared::{declared_type, parse_declared_type, Affinity, DeclaredType};
pub use dialect::SqliteDialect;
pub use error::{IntrospectError, Result};
pub use introspect::{SqliteIntrospector, DEFAULT_CATALOG};
