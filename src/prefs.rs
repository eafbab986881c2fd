//! Preference store
//!
//! A two-key local key-value store (theme, language) backed by sqlite.
//! Read once at startup, written on every toggle; last write wins. There is
//! no schema versioning or migration.

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

pub const KEY_THEME: &str = "theme";
pub const KEY_LANGUAGE: &str = "language";

pub struct PrefsDb {
    conn: Connection,
}

impl PrefsDb {
    /// Open the store at the platform data dir, creating it if needed
    pub fn new() -> Result<Self> {
        let dir = Self::get_data_dir();
        std::fs::create_dir_all(&dir)?;
        Self::open_at(&dir.join("prefs.db"))
    }

    /// Open the store at an explicit path (used by tests)
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let mut db = PrefsDb { conn };
        db.init_schema()?;
        Ok(db)
    }

    fn get_data_dir() -> PathBuf {
        if let Some(data_dir) = dirs::data_dir() {
            data_dir.join("sathi")
        } else {
            // Fallback to /tmp if no data dir available
            let mut path = std::env::temp_dir();
            path.push("sathi-data");
            path
        }
    }

    fn init_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS prefs (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    /// Read a preference value; None when the key was never written
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM prefs WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Write a preference value, replacing any previous one
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO prefs (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}
