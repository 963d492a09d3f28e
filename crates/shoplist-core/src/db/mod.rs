//! SQLite store management for the list and history tables.
//!
//! [`StoreHelper`] owns the single connection to the store file. The file is
//! opened lazily on the first [`StoreHelper::readable`] or
//! [`StoreHelper::writable`] call, at which point the schema is created or
//! upgraded to [`SCHEMA_VERSION`](crate::contract::SCHEMA_VERSION).

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use log::debug;
use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod schema;

/// How long a writer waits on a lock held by another connection.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Lazily opened connection to the store file.
pub struct StoreHelper {
    path: PathBuf,
    version: i32,
    connection: Option<Connection>,
}

impl StoreHelper {
    /// Records the store location. Nothing touches the file system yet.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_version(path, crate::contract::SCHEMA_VERSION)
    }

    /// Like [`StoreHelper::new`] but targeting an explicit schema version.
    pub fn with_version<P: AsRef<Path>>(path: P, version: i32) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            version,
            connection: None,
        }
    }

    /// Location of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Schema version this helper creates or upgrades to.
    pub fn version(&self) -> i32 {
        self.version
    }

    /// Returns a handle for reads, opening the store on first use.
    pub fn readable(&mut self) -> Result<&Connection> {
        self.open().map(|conn| &*conn)
    }

    /// Returns a handle for writes, opening the store on first use.
    pub fn writable(&mut self) -> Result<&mut Connection> {
        self.open()
    }

    /// True once the connection has been opened.
    pub fn is_open(&self) -> bool {
        self.connection.is_some()
    }

    /// Closes the connection. The next access reopens it.
    pub fn close(&mut self) {
        if self.connection.take().is_some() {
            debug!("Closed store at {}", self.path.display());
        }
    }

    fn open(&mut self) -> Result<&mut Connection> {
        let connection = match self.connection.take() {
            Some(connection) => connection,
            None => {
                debug!("Opening store at {}", self.path.display());
                let mut connection =
                    Connection::open(&self.path).db_context("Failed to open database connection")?;
                connection
                    .busy_timeout(BUSY_TIMEOUT)
                    .db_context("Failed to set busy timeout")?;
                schema::prepare(&mut connection, self.version)?;
                connection
            }
        };
        Ok(self.connection.insert(connection))
    }
}
