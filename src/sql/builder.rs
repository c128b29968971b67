//! Builds the parameterized statements for the advertisements table.
//! Identifiers are fixed constants; values are always bound as `$n` parameters.

/// Table holding advertisement rows.
pub const ADV_TABLE: &str = "advertisements";

/// Index on `title`.
pub const ADV_TITLE_INDEX: &str = "ix_advertisements_title";

/// Columns in response order.
const ADV_COLUMNS: &[&str] = &["id", "title", "description", "created_at", "author"];

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_list() -> String {
    ADV_COLUMNS
        .iter()
        .map(|c| quoted(c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `CREATE TABLE IF NOT EXISTS` for the advertisements table.
pub fn create_table() -> String {
    format!(
        r#"CREATE TABLE IF NOT EXISTS {} (
    "id" SERIAL PRIMARY KEY,
    "title" VARCHAR NOT NULL,
    "description" TEXT,
    "created_at" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    "author" VARCHAR
)"#,
        quoted(ADV_TABLE)
    )
}

pub fn create_title_index() -> String {
    format!(
        "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
        quoted(ADV_TITLE_INDEX),
        quoted(ADV_TABLE),
        quoted("title")
    )
}

/// SELECT by id. Params: `$1` id.
pub fn select_by_id() -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        column_list(),
        quoted(ADV_TABLE),
        quoted("id")
    )
}

/// INSERT; `id` and `created_at` come from column defaults.
/// Params: `$1` title, `$2` description, `$3` author.
pub fn insert() -> String {
    format!(
        "INSERT INTO {} ({}, {}, {}) VALUES ($1, $2, $3) RETURNING {}",
        quoted(ADV_TABLE),
        quoted("title"),
        quoted("description"),
        quoted("author"),
        column_list()
    )
}

/// UPDATE of the mutable columns. Params: `$1` id, `$2` title, `$3` description, `$4` author.
pub fn update() -> String {
    format!(
        "UPDATE {} SET {} = $2, {} = $3, {} = $4 WHERE {} = $1 RETURNING {}",
        quoted(ADV_TABLE),
        quoted("title"),
        quoted("description"),
        quoted("author"),
        quoted("id"),
        column_list()
    )
}

/// DELETE by id. Params: `$1` id.
pub fn delete() -> String {
    format!(
        "DELETE FROM {} WHERE {} = $1",
        quoted(ADV_TABLE),
        quoted("id")
    )
}
