pub mod config;
pub mod db;
pub mod error;

pub use db::table::Table;
pub use error::BoutiqueError;
