//! The five concrete retail tables.
//!
//! Each one pins its legacy table name, its DDL and the seed file it is
//! populated from. The generic lifecycle lives on the `Table` trait.

use crate::db::schema;
use crate::db::table::Table;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Customers (`stranka`).
pub struct Customer {
    source: PathBuf,
}

impl Customer {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            source: data_dir.join("stranka.csv"),
        }
    }
}

#[async_trait]
impl Table for Customer {
    fn name(&self) -> &str {
        "stranka"
    }

    fn ddl(&self) -> &str {
        schema::STRANKA_DDL
    }

    fn source(&self) -> Option<&Path> {
        Some(&self.source)
    }
}

/// Clothing items (`oblacilo`).
pub struct Clothing {
    source: PathBuf,
}

impl Clothing {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            source: data_dir.join("oblacila.csv"),
        }
    }
}

#[async_trait]
impl Table for Clothing {
    fn name(&self) -> &str {
        "oblacilo"
    }

    fn ddl(&self) -> &str {
        schema::OBLACILO_DDL
    }

    fn source(&self) -> Option<&Path> {
        Some(&self.source)
    }
}

/// Supply lots (`zaloga`); references clothing items.
pub struct Inventory {
    source: PathBuf,
}

impl Inventory {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            source: data_dir.join("zaloga.csv"),
        }
    }
}

#[async_trait]
impl Table for Inventory {
    fn name(&self) -> &str {
        "zaloga"
    }

    fn ddl(&self) -> &str {
        schema::ZALOGA_DDL
    }

    fn source(&self) -> Option<&Path> {
        Some(&self.source)
    }
}

/// Shopping carts (`kosarica`); references clothing items.
pub struct Cart {
    source: PathBuf,
}

impl Cart {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            source: data_dir.join("kosarica.csv"),
        }
    }
}

#[async_trait]
impl Table for Cart {
    fn name(&self) -> &str {
        "kosarica"
    }

    fn ddl(&self) -> &str {
        schema::KOSARICA_DDL
    }

    fn source(&self) -> Option<&Path> {
        Some(&self.source)
    }
}

/// Orders (`narocilo`); references carts and customers.
pub struct Order {
    source: PathBuf,
}

impl Order {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            source: data_dir.join("narocilo.csv"),
        }
    }
}

#[async_trait]
impl Table for Order {
    fn name(&self) -> &str {
        "narocilo"
    }

    fn ddl(&self) -> &str {
        schema::NAROCILO_DDL
    }

    fn source(&self) -> Option<&Path> {
        Some(&self.source)
    }
}
