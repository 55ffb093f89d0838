//! Parameterized INSERT generation.
//!
//! The placeholder convention is the one swappable formatting concern:
//! SQLite binds anonymous `?` markers, PostgreSQL-style engines number
//! theirs. Column list and placeholder list always come out in the same
//! order, so positional binding lines up with the column clause.

/// Placeholder convention for parameterized statements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParamStyle {
    /// Anonymous `?` markers (SQLite).
    #[default]
    Sqlite,
    /// Numbered `$1..$n` markers (PostgreSQL).
    Numbered,
}

impl ParamStyle {
    fn placeholder(self, index: usize) -> String {
        match self {
            ParamStyle::Sqlite => "?".to_string(),
            ParamStyle::Numbered => format!("${}", index + 1),
        }
    }
}

/// Build `INSERT INTO <table> (<columns>) VALUES (<placeholders>)`.
///
/// Does not validate `columns`: an empty set yields syntactically invalid
/// SQL that the storage layer rejects at execution time. Callers guarantee
/// at least one present column.
pub fn build_insert(table: &str, columns: &[&str], style: ParamStyle) -> String {
    let placeholders: Vec<String> = (0..columns.len())
        .map(|i| style.placeholder(i))
        .collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders.join(", ")
    )
}
