//! Output types: `SegmentKind` and `Segment`.

use std::fmt;

// ── SegmentKind ───────────────────────────────────────────────────────────────

/// The resolved state of a stretch of a volunteer's schedule.
///
/// Two kinds are equal only if they are the same variant and, for
/// `Shift`, carry the same label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "label", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum SegmentKind {
    Available,
    Unavailable,
    /// On duty for the shift identified by the label.
    Shift(String),
}

impl SegmentKind {
    /// Short lowercase name used by output backends.
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Available => "available",
            SegmentKind::Unavailable => "unavailable",
            SegmentKind::Shift(_) => "shift",
        }
    }

    pub fn shift_label(&self) -> Option<&str> {
        match self {
            SegmentKind::Shift(label) => Some(label),
            _ => None,
        }
    }

    pub fn is_shift(&self) -> bool {
        matches!(self, SegmentKind::Shift(_))
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKind::Shift(label) => write!(f, "shift {label}"),
            other => f.write_str(other.as_str()),
        }
    }
}

// ── Segment ───────────────────────────────────────────────────────────────────

/// A maximal contiguous run of one kind, `[start, end)` in Unix seconds.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind:  SegmentKind,
    pub start: i64,
    pub end:   i64,
}

impl Segment {
    #[inline]
    pub fn duration_secs(&self) -> i64 {
        self.end - self.start
    }

    #[inline]
    pub fn shift_label(&self) -> Option<&str> {
        self.kind.shift_label()
    }

    /// `true` if `ts` falls inside `[start, end)`.
    #[inline]
    pub fn contains(&self, ts: i64) -> bool {
        self.start <= ts && ts < self.end
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}, {})", self.kind, self.start, self.end)
    }
}
