//! Classification of raw `sqlx` errors.

/// Returns true if `e` is a unique-constraint violation on `short_code`.
///
/// SQLite reports no constraint name, so the violated column is read from
/// the message (`UNIQUE constraint failed: generated_urls.short_code`).
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.message().contains("short_code")
}
