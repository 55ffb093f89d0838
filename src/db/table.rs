//! The `Table` lifecycle trait.
//!
//! One implementor per table; a concrete table supplies only its name, its
//! DDL and an optional seed file. The generic machinery here covers the
//! whole lifecycle: create, drop, clear, CSV import and single-row insert.
//! Instances are built once per bootstrap run and driven sequentially.

use crate::db::SqlitePool;
use crate::db::record;
use crate::db::statement::{ParamStyle, build_insert};
use crate::error::BoutiqueError;
use async_trait::async_trait;
use csv::ReaderBuilder;
use encoding_rs::Encoding;
use std::path::Path;
use tracing::debug;

#[async_trait]
pub trait Table: Send + Sync {
    /// Table name as it appears in the schema.
    fn name(&self) -> &str;

    /// The fixed CREATE TABLE text. Every implementor must supply this.
    fn ddl(&self) -> &str;

    /// Seed CSV file, if this table is populated from one.
    fn source(&self) -> Option<&Path> {
        None
    }

    async fn create(&self, pool: &SqlitePool) -> Result<(), BoutiqueError> {
        sqlx::query(self.ddl()).execute(pool).await?;
        Ok(())
    }

    /// Idempotent: succeeds even if the table was never created.
    async fn drop(&self, pool: &SqlitePool) -> Result<(), BoutiqueError> {
        let sql = format!("DROP TABLE IF EXISTS {}", self.name());
        sqlx::query(&sql).execute(pool).await?;
        Ok(())
    }

    /// Delete all rows, leaving the structure in place.
    async fn clear(&self, pool: &SqlitePool) -> Result<(), BoutiqueError> {
        let sql = format!("DELETE FROM {}", self.name());
        sqlx::query(&sql).execute(pool).await?;
        Ok(())
    }

    /// Import the seed file, one insert per record, strictly in file order.
    ///
    /// No-op when no seed file is configured. The first record names the
    /// columns; empty fields are omitted from the insert so column defaults
    /// and NULL rules apply. A constraint violation aborts the import with
    /// previously inserted rows left committed.
    async fn import(
        &self,
        pool: &SqlitePool,
        encoding: &'static Encoding,
    ) -> Result<(), BoutiqueError> {
        let Some(path) = self.source() else {
            debug!(table = self.name(), "no seed file configured; skipping");
            return Ok(());
        };
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;
        let mut records = reader.byte_records();
        let Some(header) = records.next() else {
            return Ok(());
        };
        let headers = decode_record(&header?, encoding, path)?;
        for rec in records {
            let values = decode_record(&rec?, encoding, path)?;
            let fields = record::decode_row(&headers, &values);
            self.insert_row(pool, &fields).await?;
        }
        Ok(())
    }

    /// Insert one row from named fields, skipping absent values entirely.
    ///
    /// Returns the storage-assigned rowid; meaningful only for tables with
    /// an autoincrement surrogate key.
    async fn insert_row(
        &self,
        pool: &SqlitePool,
        fields: &[(String, Option<String>)],
    ) -> Result<i64, BoutiqueError> {
        let present: Vec<(&str, &str)> = fields
            .iter()
            .filter_map(|(name, value)| value.as_deref().map(|v| (name.as_str(), v)))
            .collect();
        let columns: Vec<&str> = present.iter().map(|(name, _)| *name).collect();
        let sql = build_insert(self.name(), &columns, ParamStyle::Sqlite);
        let mut query = sqlx::query(&sql);
        for (_, value) in &present {
            query = query.bind(*value);
        }
        let result = query
            .execute(pool)
            .await
            .map_err(|e| BoutiqueError::from_insert(self.name(), e))?;
        Ok(result.last_insert_rowid())
    }
}

fn decode_record(
    rec: &csv::ByteRecord,
    encoding: &'static Encoding,
    path: &Path,
) -> Result<Vec<String>, BoutiqueError> {
    rec.iter()
        .map(|field| record::decode_field(field, encoding, path))
        .collect()
}
