//! `ScheduleExporter<W>` — flattens composed schedules into writer rows.

use log::info;
use sp_schedule::{ComposedSchedule, ShiftCatalog};

use crate::row::{EventShiftRow, SegmentRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Row counts written by an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub schedules:    usize,
    pub segments:     usize,
    pub event_shifts: usize,
}

/// Writes every segment of each schedule and, when a catalog is attached,
/// its event-linked shifts to any [`OutputWriter`] backend.
pub struct ScheduleExporter<'c, W: OutputWriter> {
    writer:  W,
    catalog: Option<&'c ShiftCatalog>,
    summary: ExportSummary,
}

impl<'c, W: OutputWriter> ScheduleExporter<'c, W> {
    pub fn new(writer: W, catalog: Option<&'c ShiftCatalog>) -> Self {
        Self { writer, catalog, summary: ExportSummary::default() }
    }

    /// Write one schedule.
    pub fn export(&mut self, schedule: &ComposedSchedule) -> OutputResult<()> {
        let segments: Vec<SegmentRow> = schedule
            .segments
            .iter()
            .map(|seg| SegmentRow::new(schedule.volunteer, &schedule.name, seg))
            .collect();
        self.writer.write_segments(&segments)?;
        self.summary.segments += segments.len();

        if let Some(catalog) = self.catalog {
            let shifts: Vec<EventShiftRow> = schedule
                .event_shifts(catalog)
                .into_iter()
                .map(|shift| EventShiftRow::new(schedule.volunteer, &schedule.name, shift))
                .collect();
            self.writer.write_event_shifts(&shifts)?;
            self.summary.event_shifts += shifts.len();
        }

        self.summary.schedules += 1;
        Ok(())
    }

    /// Flush the writer and return the running totals.
    pub fn finish(&mut self) -> OutputResult<ExportSummary> {
        self.writer.finish()?;
        info!(
            "exported {} schedule(s): {} segment(s), {} event shift(s)",
            self.summary.schedules, self.summary.segments, self.summary.event_shifts
        );
        Ok(self.summary)
    }

    /// Unwrap the inner writer (e.g. to inspect files after export).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Export all `schedules` through `writer` and finish it.
pub fn export_schedules<W: OutputWriter>(
    writer: &mut W,
    schedules: &[ComposedSchedule],
    catalog: Option<&ShiftCatalog>,
) -> OutputResult<ExportSummary> {
    let mut exporter = ScheduleExporter::new(writer, catalog);
    for schedule in schedules {
        exporter.export(schedule)?;
    }
    exporter.finish()
}
