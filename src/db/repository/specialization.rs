use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;

/// All specializations in the catalog, including ones with no
/// appointments, ordered by name.
pub fn fetch_specializations(conn: &Connection) -> Result<Vec<String>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT spec_name FROM specializations ORDER BY spec_name ASC")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn find_or_create_specialization(conn: &Connection, name: &str) -> Result<i64, DatabaseError> {
    if name.trim().is_empty() {
        return Err(DatabaseError::ConstraintViolation(
            "specialization name must not be blank".into(),
        ));
    }

    let existing: Option<i64> = conn
        .query_row(
            "SELECT spec_id FROM specializations WHERE spec_name = ?1",
            params![name],
            |row| row.get(0),
        )
        .optional()?;

    match existing {
        Some(id) => Ok(id),
        None => {
            conn.execute(
                "INSERT INTO specializations (spec_name) VALUES (?1)",
                params![name],
            )?;
            Ok(conn.last_insert_rowid())
        }
    }
}
