//! Slot time model.
//!
//! # Design
//!
//! A schedule row is a sequence of fixed-width slots starting at an origin
//! timestamp.  The mapping to wall-clock time is held in `SlotClock`:
//!
//!   slot_start(i) = origin_unix_secs + i * slot_width_secs
//!
//! A `#` marker splits a slot at its midpoint, which is only an exact
//! integer for even widths; odd widths are fine for rows without markers.
//! The reference width is 3,600 s (one hour) giving 1,800 s half-slots.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Default slot width: one hour.
pub const DEFAULT_SLOT_WIDTH_SECS: i64 = 3_600;

// ── SlotClock ─────────────────────────────────────────────────────────────────

/// Converts slot indices into Unix timestamps.
///
/// Only constructible through [`SlotClock::new`], so a clock in hand always
/// has a positive slot width.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlotClock {
    origin_unix_secs: i64,
    slot_width_secs:  i64,
}

impl SlotClock {
    /// Create a clock whose slot 0 starts at `origin_unix_secs`.
    pub fn new(origin_unix_secs: i64, slot_width_secs: i64) -> CoreResult<Self> {
        if slot_width_secs <= 0 {
            return Err(CoreError::InvalidSlotWidth(slot_width_secs));
        }
        Ok(Self { origin_unix_secs, slot_width_secs })
    }

    /// Unix timestamp at which slot 0 starts.
    #[inline]
    pub fn origin(&self) -> i64 {
        self.origin_unix_secs
    }

    #[inline]
    pub fn slot_width(&self) -> i64 {
        self.slot_width_secs
    }

    #[inline]
    pub fn half_width(&self) -> i64 {
        self.slot_width_secs / 2
    }

    /// Start of slot `index`.
    #[inline]
    pub fn slot_start(&self, index: usize) -> i64 {
        self.origin_unix_secs + index as i64 * self.slot_width_secs
    }

    /// `true` if slots can be split into two equal integer halves.
    #[inline]
    pub fn has_exact_midpoint(&self) -> bool {
        self.slot_width_secs % 2 == 0
    }

    /// Midpoint of slot `index`, where a `#` marker splits it.
    #[inline]
    pub fn slot_mid(&self, index: usize) -> i64 {
        self.slot_start(index) + self.half_width()
    }

    /// End of a schedule of `slot_count` slots (exclusive upper bound), or
    /// `None` if it does not fit in an `i64`.
    ///
    /// When this returns `Some`, `slot_start` cannot overflow for any index
    /// up to `slot_count`, nor `slot_mid` for any index below it.
    pub fn end_for(&self, slot_count: usize) -> Option<i64> {
        i64::try_from(slot_count)
            .ok()?
            .checked_mul(self.slot_width_secs)?
            .checked_add(self.origin_unix_secs)
    }
}

impl fmt::Display for SlotClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "origin {} / {}s slots", self.origin_unix_secs, self.slot_width_secs)
    }
}

// ── ComposeConfig ─────────────────────────────────────────────────────────────

/// Schedule timing configuration.
///
/// Typically embedded in the application's JSON config file and turned into
/// a `SlotClock` once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComposeConfig {
    /// Unix timestamp of the start of slot 0.
    pub origin_unix_secs: i64,

    /// Seconds per slot.  Must be positive.  Default: 3600.
    #[cfg_attr(feature = "serde", serde(default = "default_slot_width"))]
    pub slot_width_secs: i64,
}

#[cfg(feature = "serde")]
fn default_slot_width() -> i64 {
    DEFAULT_SLOT_WIDTH_SECS
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self { origin_unix_secs: 0, slot_width_secs: DEFAULT_SLOT_WIDTH_SECS }
    }
}

impl ComposeConfig {
    /// Check the configuration without building a clock.
    pub fn validate(&self) -> CoreResult<()> {
        self.make_clock().map(|_| ()).map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Construct a `SlotClock` for this configuration.
    pub fn make_clock(&self) -> CoreResult<SlotClock> {
        SlotClock::new(self.origin_unix_secs, self.slot_width_secs)
    }
}
