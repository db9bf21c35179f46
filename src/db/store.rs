//! Long-lived SQLite store shared by every query.
//!
//! Opened once at startup and closed explicitly at shutdown. The single
//! connection sits behind a `Mutex`, so concurrent queries are serialized
//! here rather than in the queue code.

use std::path::Path;
use std::sync::Mutex;

use chrono::NaiveDate;
use rusqlite::Connection;

use super::{repository, sqlite, DatabaseError};
use crate::models::AppointmentRecord;
use crate::queue::{AppointmentStore, SpecializationCatalogStore};

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = sqlite::open_database(path)?;
        tracing::info!(path = %path.display(), "Appointment store opened");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        Ok(Self {
            conn: Mutex::new(sqlite::open_memory_database()?),
        })
    }

    /// Runs `f` with exclusive access to the connection.
    pub fn with_connection<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, DatabaseError>,
    ) -> Result<T, DatabaseError> {
        let conn = self.conn.lock().map_err(|_| DatabaseError::LockPoisoned)?;
        f(&conn)
    }

    pub fn insert_record(&self, record: &AppointmentRecord) -> Result<(), DatabaseError> {
        self.with_connection(|conn| repository::insert_record(conn, record))
    }

    /// Adds a specialization to the catalog if it is not there yet.
    pub fn add_specialization(&self, name: &str) -> Result<(), DatabaseError> {
        self.with_connection(|conn| repository::find_or_create_specialization(conn, name).map(|_| ()))
    }

    /// Closes the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> Result<(), DatabaseError> {
        let conn = self
            .conn
            .into_inner()
            .map_err(|_| DatabaseError::LockPoisoned)?;
        conn.close().map_err(|(_, e)| DatabaseError::from(e))?;
        tracing::info!("Appointment store closed");
        Ok(())
    }
}

impl AppointmentStore for SqliteStore {
    fn fetch_appointments(
        &self,
        date: Option<NaiveDate>,
        specialization: Option<&str>,
    ) -> Result<Vec<AppointmentRecord>, DatabaseError> {
        self.with_connection(|conn| repository::fetch_appointments(conn, date, specialization))
    }
}

impl SpecializationCatalogStore for SqliteStore {
    fn fetch_specializations(&self) -> Result<Vec<String>, DatabaseError> {
        self.with_connection(repository::fetch_specializations)
    }
}
