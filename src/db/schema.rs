//! Fixed SQL DDL for the five retail tables.
//!
//! Table and column names are preserved byte-for-byte from the legacy
//! dataset for compatibility, including its quirks: `narocilo` references
//! `kosarica(id_kosarice)` (no such column) and carries an undocumented
//! `status_2` flag, and the `zaloga`/`kosarica` REFERENCES clauses name the
//! table `oblacila` while the created table is `oblacilo`. None of this
//! bites while `PRAGMA foreign_keys` stays off, which is the default; see
//! DESIGN.md before changing any of it.

/// Customers. Surrogate autoincrement key; every field required.
pub const STRANKA_DDL: &str = r#"
CREATE TABLE stranka (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name  TEXT NOT NULL,
    last_name   TEXT NOT NULL,
    email       TEXT NOT NULL,
    gender      TEXT NOT NULL,
    ip_address  TEXT NOT NULL
);
"#;

/// Clothing items. Natural text key `ID`.
pub const OBLACILO_DDL: &str = r#"
CREATE TABLE oblacilo (
    clothing_type  TEXT NOT NULL,
    size           TEXT NOT NULL,
    color          TEXT NOT NULL,
    brand          TEXT NOT NULL,
    material       TEXT NOT NULL,
    price          INTEGER NOT NULL,
    season         TEXT NOT NULL,
    ID             TEXT PRIMARY KEY
);
"#;

/// Supply/inventory lots. Natural text key per delivery.
pub const ZALOGA_DDL: &str = r#"
CREATE TABLE zaloga (
    id_dobave       TEXT PRIMARY KEY,
    id_izdelka      TEXT REFERENCES oblacila(ID),
    price           REAL NOT NULL,
    quantity        INTEGER NOT NULL,
    date_of_launch  DATE
);
"#;

/// Shopping carts. Surrogate autoincrement key; optional discount.
pub const KOSARICA_DDL: &str = r#"
CREATE TABLE kosarica (
    cart_id     INTEGER PRIMARY KEY AUTOINCREMENT,
    product_id  TEXT REFERENCES oblacila(ID),
    discount    REAL
);
"#;

/// Orders. No declared key; two optional status flags.
pub const NAROCILO_DDL: &str = r#"
CREATE TABLE narocilo (
    id_kosarice  TEXT REFERENCES kosarica(id_kosarice),
    ID           TEXT REFERENCES stranka(id),
    status       BOOLEAN,
    status_2     BOOLEAN
);
"#;
