//! Database module: schema, table abstraction and bootstrap.
//!
//! Layout:
//! - `schema.rs`: fixed SQL DDL for the five retail tables
//! - `record.rs`: CSV record decoding (empty fields become absent)
//! - `statement.rs`: parameterized INSERT generation
//! - `table.rs`: the `Table` lifecycle trait (create/drop/clear/import)
//! - `tables.rs`: the concrete tables
//! - `registry.rs`: dependency-ordered orchestration and bootstrap

pub mod record;
pub mod registry;
pub mod schema;
pub mod statement;
pub mod table;
pub mod tables;

use crate::error::BoutiqueError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

pub use statement::ParamStyle;
pub use table::Table;

/// Open the store at `database_url`, creating the file if missing.
///
/// The pool is capped at one connection: every statement of the bootstrap
/// runs sequentially over the same handle, so there is never concurrent
/// access to the database.
pub async fn spawn(database_url: &str, foreign_keys: bool) -> Result<SqlitePool, BoutiqueError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(foreign_keys);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    Ok(pool)
}
