//! CSV schedule-grid loader.
//!
//! # CSV format
//!
//! The spreadsheet grid exported as CSV: one row per volunteer, one column
//! per slot.  The header names the slot columns; their text is not
//! interpreted, since slot times come from the [`SlotClock`](sp_core::SlotClock).
//!
//! ```csv
//! volunteer,08:00,09:00,10:00,11:00
//! Ada,,S1,S1#,x
//! Grace,#E,E,,
//! ```
//!
//! Cells are trimmed.  Every row must have exactly as many cells as the
//! header.  Codes are *not* parsed here; the composer reports malformed
//! codes with their slot index.

use std::io::Read;
use std::path::Path;

use log::{info, warn};
use sp_core::VolunteerId;

use crate::ScheduleError;

/// One volunteer's raw schedule row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolunteerRow {
    /// 0-based position among the data rows.
    pub id:    VolunteerId,
    pub name:  String,
    pub codes: Vec<String>,
}

/// Load every volunteer row from a CSV file.
pub fn load_rows_csv(path: &Path) -> Result<Vec<VolunteerRow>, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_rows_reader(file)
}

/// Like [`load_rows_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_rows_reader<R: Read>(reader: R) -> Result<Vec<VolunteerRow>, ScheduleError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let header_len = csv_reader
        .headers()
        .map_err(|e| ScheduleError::Parse(e.to_string()))?
        .len();
    if header_len == 0 {
        return Err(ScheduleError::Parse("schedule grid has no header row".into()));
    }
    let slot_count = header_len - 1;
    if slot_count == 0 {
        warn!("schedule grid has no slot columns; every schedule will be empty");
    }

    let mut rows = Vec::new();
    for (i, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        let mut cells = record.iter();

        let name = cells.next().unwrap_or_default();
        if name.is_empty() {
            return Err(ScheduleError::Parse(format!(
                "data row {}: empty volunteer name",
                i + 1
            )));
        }
        let id = VolunteerId::try_from(i)
            .map_err(|_| ScheduleError::Parse(format!("too many rows ({})", i + 1)))?;

        rows.push(VolunteerRow {
            id,
            name: name.to_owned(),
            codes: cells.map(str::to_owned).collect(),
        });
    }

    info!("loaded {} volunteer row(s) of {} slot(s)", rows.len(), slot_count);
    Ok(rows)
}
