//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `schedules.db` file in the configured output directory
//! with two tables: `segments` and `event_shifts`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{EventShiftRow, OutputResult, SegmentRow};

pub const DB_FILE: &str = "schedules.db";

/// Writes composed schedules to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `schedules.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join(DB_FILE))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS segments (
                 volunteer_id INTEGER NOT NULL,
                 volunteer    TEXT    NOT NULL,
                 kind         TEXT    NOT NULL,
                 label        TEXT,
                 start_secs   INTEGER NOT NULL,
                 end_secs     INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS event_shifts (
                 volunteer_id INTEGER NOT NULL,
                 volunteer    TEXT    NOT NULL,
                 label        TEXT    NOT NULL,
                 event        TEXT    NOT NULL,
                 start_secs   INTEGER NOT NULL,
                 end_secs     INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_segments(&mut self, rows: &[SegmentRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO segments (volunteer_id, volunteer, kind, label, start_secs, end_secs) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                // Non-shift segments store NULL rather than an empty label.
                let label = (!row.label.is_empty()).then_some(row.label.as_str());
                stmt.execute(rusqlite::params![
                    row.volunteer_id,
                    row.volunteer,
                    row.kind,
                    label,
                    row.start,
                    row.end,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_event_shifts(&mut self, rows: &[EventShiftRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO event_shifts (volunteer_id, volunteer, label, event, start_secs, end_secs) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.volunteer_id,
                    row.volunteer,
                    row.label,
                    row.event,
                    row.start,
                    row.end,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
