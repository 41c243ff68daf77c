//! `sp-output` — writers for composed schedules.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend     | Files created                          |
//! |-----------|-------------|----------------------------------------|
//! | *(none)*  | CSV         | `segments.csv`, `event_shifts.csv`     |
//! | `sqlite`  | SQLite      | `schedules.db`                         |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`ScheduleExporter`], which flattens `ComposedSchedule`s into rows.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sp_output::{CsvWriter, export_schedules};
//!
//! let mut writer = CsvWriter::new(Path::new("./out"))?;
//! let summary = export_schedules(&mut writer, &schedules, Some(&catalog))?;
//! ```

pub mod csv;
pub mod error;
pub mod exporter;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use exporter::{ExportSummary, ScheduleExporter, export_schedules};
pub use row::{EventShiftRow, SegmentRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
