//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EventShiftRow, OutputResult, SegmentRow};

/// Trait implemented by the CSV and SQLite writers.
pub trait OutputWriter {
    /// Write a batch of segment rows.
    fn write_segments(&mut self, rows: &[SegmentRow]) -> OutputResult<()>;

    /// Write a batch of event-linked shift rows.
    fn write_event_shifts(&mut self, rows: &[EventShiftRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Lets callers keep ownership of a writer while an exporter drives it.
impl<W: OutputWriter + ?Sized> OutputWriter for &mut W {
    fn write_segments(&mut self, rows: &[SegmentRow]) -> OutputResult<()> {
        (**self).write_segments(rows)
    }

    fn write_event_shifts(&mut self, rows: &[EventShiftRow]) -> OutputResult<()> {
        (**self).write_event_shifts(rows)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}
