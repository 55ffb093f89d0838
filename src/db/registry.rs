//! Dependency-ordered orchestration and bootstrap.
//!
//! The table list is fixed: clothing must exist before inventory and carts,
//! carts and customers before orders. Ordering the list is the whole
//! dependency story; there is no solver. Dropping relies on
//! `DROP TABLE IF EXISTS`, so the same order is safe in both directions.

use crate::db::SqlitePool;
use crate::db::table::Table;
use crate::db::tables::{Cart, Clothing, Customer, Inventory, Order};
use crate::error::BoutiqueError;
use encoding_rs::Encoding;
use std::path::Path;
use tracing::{debug, info};

/// Build the five tables, seed files rooted at `data_dir`, in dependency
/// order.
pub fn prepare_tables(data_dir: &Path) -> Vec<Box<dyn Table>> {
    vec![
        Box::new(Customer::new(data_dir)),
        Box::new(Clothing::new(data_dir)),
        Box::new(Inventory::new(data_dir)),
        Box::new(Cart::new(data_dir)),
        Box::new(Order::new(data_dir)),
    ]
}

pub async fn create_all(
    pool: &SqlitePool,
    tables: &[Box<dyn Table>],
) -> Result<(), BoutiqueError> {
    for table in tables {
        table.create(pool).await?;
    }
    Ok(())
}

pub async fn drop_all(pool: &SqlitePool, tables: &[Box<dyn Table>]) -> Result<(), BoutiqueError> {
    for table in tables {
        Table::drop(table.as_ref(), pool).await?;
    }
    Ok(())
}

pub async fn import_all(
    pool: &SqlitePool,
    tables: &[Box<dyn Table>],
    encoding: &'static Encoding,
) -> Result<(), BoutiqueError> {
    for table in tables {
        info!(table = table.name(), "importing data");
        table.import(pool, encoding).await?;
    }
    Ok(())
}

pub async fn clear_all(pool: &SqlitePool, tables: &[Box<dyn Table>]) -> Result<(), BoutiqueError> {
    for table in tables {
        table.clear(pool).await?;
    }
    Ok(())
}

/// Rebuild the schema from scratch: drop, create and import every table.
///
/// No transaction spans the sequence; a failure partway leaves the work
/// done so far committed.
pub async fn rebuild_database(
    pool: &SqlitePool,
    data_dir: &Path,
    encoding: &'static Encoding,
) -> Result<(), BoutiqueError> {
    let tables = prepare_tables(data_dir);
    drop_all(pool, &tables).await?;
    create_all(pool, &tables).await?;
    import_all(pool, &tables, encoding).await?;
    Ok(())
}

/// Rebuild only when the store holds no schema objects yet.
///
/// Returns whether a rebuild ran. Runs at most once per process, at
/// startup, before any reads.
pub async fn ensure_database(
    pool: &SqlitePool,
    data_dir: &Path,
    encoding: &'static Encoding,
) -> Result<bool, BoutiqueError> {
    let (objects,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sqlite_master")
        .fetch_one(pool)
        .await?;
    if objects > 0 {
        debug!(objects, "schema already present; skipping rebuild");
        return Ok(false);
    }
    rebuild_database(pool, data_dir, encoding).await?;
    Ok(true)
}
