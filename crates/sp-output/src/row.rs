//! Plain data row types written by output backends.

use sp_core::VolunteerId;
use sp_schedule::{EventShift, Segment};

/// One composed segment of one volunteer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentRow {
    pub volunteer_id: u32,
    pub volunteer:    String,
    /// `"available"`, `"unavailable"` or `"shift"`.
    pub kind:         &'static str,
    /// Shift label; empty for non-shift segments.
    pub label:        String,
    pub start:        i64,
    pub end:          i64,
}

impl SegmentRow {
    pub fn new(volunteer: VolunteerId, name: &str, segment: &Segment) -> Self {
        Self {
            volunteer_id: volunteer.0,
            volunteer:    name.to_owned(),
            kind:         segment.kind.as_str(),
            label:        segment.shift_label().unwrap_or_default().to_owned(),
            start:        segment.start,
            end:          segment.end,
        }
    }
}

/// One event-linked shift of one volunteer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventShiftRow {
    pub volunteer_id: u32,
    pub volunteer:    String,
    pub label:        String,
    pub event:        String,
    pub start:        i64,
    pub end:          i64,
}

impl EventShiftRow {
    pub fn new(volunteer: VolunteerId, name: &str, shift: EventShift) -> Self {
        Self {
            volunteer_id: volunteer.0,
            volunteer:    name.to_owned(),
            label:        shift.label,
            event:        shift.event,
            start:        shift.start,
            end:          shift.end,
        }
    }
}
