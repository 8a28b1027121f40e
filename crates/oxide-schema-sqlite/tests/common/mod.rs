#![allow(dead_code)]

use oxide_schema::prelude::*;
use oxide_schema_sqlite::SqliteIntrospector;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

pub async fn create_test_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create in-memory SQLite pool")
}

/// Creates an in-memory database from a SQL script.
pub async fn database(script: &str) -> SqliteIntrospector {
    let pool = create_test_pool().await;
    sqlx::raw_sql(script)
        .execute(&pool)
        .await
        .unwrap_or_else(|e| panic!("Failed to run script: {e}\n{script}"));
    SqliteIntrospector::new(pool, "main").unwrap()
}

/// Executes the DDL of every action, skipping comment-only payloads.
pub async fn execute(introspector: &SqliteIntrospector, actions: &[SchemaUpdateAction]) {
    for action in actions {
        let comment_only = action
            .sql()
            .lines()
            .all(|line| line.trim().is_empty() || line.trim_start().starts_with("--"));
        if comment_only {
            continue;
        }
        sqlx::raw_sql(action.sql())
            .execute(introspector.pool())
            .await
            .unwrap_or_else(|e| panic!("Failed to run: {e}\n{}", action.sql()));
    }
}

pub fn users() -> Table {
    Table::new("users")
        .column(Column::new("id", types::INTEGER).not_null())
        .column(Column::varchar("name", 100).not_null())
        .column(Column::varchar("email", 255))
        .column(Column::new("active", types::BOOLEAN).not_null().default_value("1"))
        .primary_key(["id"])
        .key(Key::on("idx_users_email", ["email"]).unique())
}

pub fn orders() -> Table {
    Table::new("orders")
        .column(Column::new("id", types::INTEGER).not_null())
        .column(Column::new("user_id", types::INTEGER).not_null())
        .column(Column::decimal("total", 10, 2))
        .column(Column::new("created_at", types::TIMESTAMP))
        .primary_key(["id"])
        .foreign_key(ForeignKey::simple("fk_order_user", "user_id", "users", "id"))
        .key(Key::on("idx_orders_user", ["user_id"]))
}

pub fn order_items() -> Table {
    let mut fk = ForeignKey::new("fk_item_order", "orders");
    fk.add_column_pair(1, "order_id", "id");

    Table::new("order_items")
        .column(Column::new("order_id", types::INTEGER).not_null())
        .column(Column::new("line", types::INTEGER).not_null())
        .column(Column::new("note", types::LONGVARCHAR))
        .primary_key(["order_id", "line"])
        .foreign_key(fk)
}
