//! `ComposedSchedule` — one volunteer's merged segments plus lookups.

use sp_core::{SlotClock, VolunteerId};

use crate::catalog::{EventShift, ShiftCatalog};
use crate::compose::compose_with;
use crate::loader::VolunteerRow;
use crate::{ScheduleResult, Segment, SegmentKind};

/// The composed schedule of one volunteer.
///
/// `segments` is contiguous and sorted by `start`, so lookups are binary
/// searches.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComposedSchedule {
    pub volunteer: VolunteerId,
    pub name:      String,
    pub segments:  Vec<Segment>,
}

impl ComposedSchedule {
    /// Compose a loaded row.
    pub fn compose(clock: &SlotClock, row: &VolunteerRow) -> ScheduleResult<Self> {
        Ok(Self {
            volunteer: row.id,
            name:      row.name.clone(),
            segments:  compose_with(clock, &row.codes)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// `(start, end)` covered by the schedule, or `None` if it is empty.
    pub fn span(&self) -> Option<(i64, i64)> {
        let first = self.segments.first()?;
        let last = self.segments.last()?;
        Some((first.start, last.end))
    }

    /// The segment covering `ts`, or `None` outside the schedule span.
    pub fn segment_at(&self, ts: i64) -> Option<&Segment> {
        // First index whose start is > ts; the covering segment is just before it.
        let idx = self.segments.partition_point(|s| s.start <= ts);
        let seg = self.segments.get(idx.checked_sub(1)?)?;
        seg.contains(ts).then_some(seg)
    }

    pub fn kind_at(&self, ts: i64) -> Option<&SegmentKind> {
        self.segment_at(ts).map(|s| &s.kind)
    }

    /// Shift segments in time order.
    pub fn shifts(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.kind.is_shift())
    }

    /// Total seconds spent in segments matching `pred`.
    pub fn total_secs(&self, pred: impl Fn(&SegmentKind) -> bool) -> i64 {
        self.segments
            .iter()
            .filter(|s| pred(&s.kind))
            .map(Segment::duration_secs)
            .sum()
    }

    pub fn shift_secs(&self) -> i64 {
        self.total_secs(SegmentKind::is_shift)
    }

    pub fn available_secs(&self) -> i64 {
        self.total_secs(|k| *k == SegmentKind::Available)
    }

    /// Shift segments whose label is linked to an event in `catalog`.
    pub fn event_shifts(&self, catalog: &ShiftCatalog) -> Vec<EventShift> {
        self.shifts()
            .filter_map(|seg| {
                let label = seg.shift_label()?;
                let event = catalog.event_for(label)?;
                Some(EventShift {
                    label: label.to_owned(),
                    event: event.to_owned(),
                    start: seg.start,
                    end:   seg.end,
                })
            })
            .collect()
    }
}
