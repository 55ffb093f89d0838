//! Environment-driven configuration.
//!
//! All knobs come from `BOUTIQUE_`-prefixed environment variables (a `.env`
//! file is honored via dotenvy in `main`), with defaults suited to a local
//! run against the bundled seed data.

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// sqlx connection URL, e.g. `sqlite:oblacila.db`.
    pub database_url: String,
    /// Directory holding the seed CSV files.
    pub data_dir: PathBuf,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub loglevel: String,
    /// Character encoding label for the seed files (WHATWG label, e.g.
    /// `UTF-8` or `windows-1250`).
    pub encoding: String,
    /// Enable `PRAGMA foreign_keys`. Off by default: the legacy schema
    /// carries REFERENCES clauses that do not resolve (see DESIGN.md), so
    /// enforcement would reject the seed import.
    pub foreign_keys: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:oblacila.db".to_string(),
            data_dir: PathBuf::from("data"),
            loglevel: "info".to_string(),
            encoding: "UTF-8".to_string(),
            foreign_keys: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Config, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("BOUTIQUE_"))
            .extract()
    }
}

pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::load().expect("invalid BOUTIQUE_* environment configuration"));
