//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `segments.csv`
//! - `event_shifts.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventShiftRow, OutputResult, SegmentRow};

pub const SEGMENTS_FILE: &str = "segments.csv";
pub const EVENT_SHIFTS_FILE: &str = "event_shifts.csv";

/// Writes composed schedules to two CSV files.
pub struct CsvWriter {
    segments:     Writer<File>,
    event_shifts: Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut segments = Writer::from_path(dir.join(SEGMENTS_FILE))?;
        segments.write_record(["volunteer_id", "volunteer", "kind", "label", "start", "end"])?;

        let mut event_shifts = Writer::from_path(dir.join(EVENT_SHIFTS_FILE))?;
        event_shifts.write_record(["volunteer_id", "volunteer", "label", "event", "start", "end"])?;

        Ok(Self {
            segments,
            event_shifts,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_segments(&mut self, rows: &[SegmentRow]) -> OutputResult<()> {
        for row in rows {
            self.segments.write_record(&[
                row.volunteer_id.to_string(),
                row.volunteer.clone(),
                row.kind.to_owned(),
                row.label.clone(),
                row.start.to_string(),
                row.end.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_event_shifts(&mut self, rows: &[EventShiftRow]) -> OutputResult<()> {
        for row in rows {
            self.event_shifts.write_record(&[
                row.volunteer_id.to_string(),
                row.volunteer.clone(),
                row.label.clone(),
                row.event.clone(),
                row.start.to_string(),
                row.end.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.segments.flush()?;
        self.event_shifts.flush()?;
        Ok(())
    }
}
