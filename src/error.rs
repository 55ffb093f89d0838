use sqlx::Error as SqlxError;
use sqlx::error::ErrorKind;
use std::path::PathBuf;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum BoutiqueError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),

    #[error("integrity violation on table {table}: {message}")]
    IntegrityViolation { table: String, message: String },

    #[error("malformed character data in {}", path.display())]
    Encoding { path: PathBuf },
}

impl BoutiqueError {
    /// Classify an insert failure: constraint rejections (unique, foreign
    /// key, not-null, check) become `IntegrityViolation`; everything else
    /// stays a plain database error.
    pub(crate) fn from_insert(table: &str, e: SqlxError) -> Self {
        match &e {
            SqlxError::Database(db) => match db.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => BoutiqueError::IntegrityViolation {
                    table: table.to_string(),
                    message: db.message().to_string(),
                },
                _ => BoutiqueError::Database(e),
            },
            _ => BoutiqueError::Database(e),
        }
    }
}
