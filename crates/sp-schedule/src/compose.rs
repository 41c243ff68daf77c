//! Schedule composer: raw slot codes → merged segments.
//!
//! # Algorithm
//!
//! Every slot is expanded into exactly two half-slot atoms.  An unmarked
//! code gives both halves its state; a `#` marker turns the marked half into
//! a *gap*.  Gaps are then resolved against the half across the slot
//! boundary:
//!
//! ```text
//! gap at the first or last half of the schedule  → unavailable
//! neighbour is a plain available/unavailable half → same as neighbour
//! otherwise (neighbour is a shift or another gap) → available
//! ```
//!
//! A single run-length pass over the resolved atoms emits one segment per
//! change of kind.  The output is contiguous from the origin to
//! `origin + len * width` and holds at most `2 * len` segments.
//!
//! Odd slot widths are accepted as long as no code splits a slot, since the
//! midpoint is never needed then.

use log::debug;
use sp_core::SlotClock;

use crate::{ScheduleError, ScheduleResult, Segment, SegmentKind, SlotCode};

static AVAILABLE: SegmentKind = SegmentKind::Available;
static UNAVAILABLE: SegmentKind = SegmentKind::Unavailable;

/// One half-slot before gap resolution.
#[derive(Copy, Clone)]
enum Half<'a> {
    Plain(&'a SegmentKind),
    Gap,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Compose the codes of one schedule row into segments.
///
/// Slot `i` covers `[origin + i * slot_width, origin + (i + 1) * slot_width)`.
/// An empty `codes` slice yields an empty result.
///
/// # Errors
///
/// - [`ScheduleError::InvalidInput`] if `slot_width` is not positive, if the
///   schedule end does not fit in an `i64`, or if `slot_width` is odd and some
///   code carries a `#` marker.
/// - [`ScheduleError::InvalidCode`] for the first malformed code in index
///   order.  Nothing is returned on failure.
pub fn compose<S: AsRef<str>>(
    origin: i64,
    slot_width: i64,
    codes: &[S],
) -> ScheduleResult<Vec<Segment>> {
    let clock = SlotClock::new(origin, slot_width)?;
    compose_with(&clock, codes)
}

/// Like [`compose`] but driven by an already validated [`SlotClock`].
pub fn compose_with<S: AsRef<str>>(clock: &SlotClock, codes: &[S]) -> ScheduleResult<Vec<Segment>> {
    if codes.is_empty() {
        return Ok(Vec::new());
    }
    let parsed = parse_codes(codes)?;
    compose_parsed(clock, &parsed)
}

/// Compose codes that have already been parsed.
///
/// Only the clock-dependent checks of [`compose`] can fail here.
pub fn compose_parsed(clock: &SlotClock, codes: &[SlotCode]) -> ScheduleResult<Vec<Segment>> {
    if codes.is_empty() {
        return Ok(Vec::new());
    }
    let end = clock.end_for(codes.len()).ok_or_else(|| {
        ScheduleError::InvalidInput(format!(
            "{} slot(s) from {} overflow the timestamp range",
            codes.len(),
            clock
        ))
    })?;
    if !clock.has_exact_midpoint() {
        if let Some(index) = codes.iter().position(SlotCode::is_split) {
            return Err(ScheduleError::InvalidInput(format!(
                "slot {index} is split by a marker but the {}s slot width has no exact midpoint",
                clock.slot_width()
            )));
        }
    }

    let halves = expand(codes);
    let segments = merge(clock, &halves, end);
    debug!(
        "composed {} slot(s) into {} segment(s) from {}",
        codes.len(),
        segments.len(),
        clock
    );
    Ok(segments)
}

/// Parse every code, failing on the first malformed one.
pub fn parse_codes<S: AsRef<str>>(codes: &[S]) -> ScheduleResult<Vec<SlotCode>> {
    codes
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let raw = raw.as_ref();
            raw.parse::<SlotCode>().map_err(|defect| ScheduleError::InvalidCode {
                index,
                raw: raw.to_owned(),
                defect,
            })
        })
        .collect()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn expand(codes: &[SlotCode]) -> Vec<Half<'_>> {
    let mut halves = Vec::with_capacity(codes.len() * 2);
    for code in codes {
        halves.push(if code.leading { Half::Gap } else { Half::Plain(&code.state) });
        halves.push(if code.trailing { Half::Gap } else { Half::Plain(&code.state) });
    }
    halves
}

/// Resolved kind of the half at `pos`.
fn resolve<'a>(halves: &[Half<'a>], pos: usize) -> &'a SegmentKind {
    if let Half::Plain(kind) = halves[pos] {
        return kind;
    }

    // Leading gaps sit on even positions and look back; trailing gaps sit on
    // odd positions and look ahead.
    let neighbour = if pos % 2 == 0 {
        pos.checked_sub(1)
    } else {
        Some(pos + 1).filter(|&p| p < halves.len())
    };

    match neighbour.map(|p| halves[p]) {
        None => &UNAVAILABLE,
        Some(Half::Plain(kind @ (SegmentKind::Available | SegmentKind::Unavailable))) => kind,
        Some(_) => &AVAILABLE,
    }
}

/// Run-length merge of resolved halves.  `halves` must be non-empty and
/// `end` must be the checked end of the schedule.
fn merge(clock: &SlotClock, halves: &[Half<'_>], end: i64) -> Vec<Segment> {
    // Even positions open a slot; odd positions sit on its midpoint.
    let at = |pos: usize| {
        if pos % 2 == 0 {
            clock.slot_start(pos / 2)
        } else {
            clock.slot_mid(pos / 2)
        }
    };

    let mut segments = Vec::new();
    let mut start = clock.origin();
    let mut current = resolve(halves, 0);

    for pos in 1..halves.len() {
        let kind = resolve(halves, pos);
        if kind != current {
            segments.push(Segment { kind: current.clone(), start, end: at(pos) });
            start = at(pos);
            current = kind;
        }
    }
    segments.push(Segment { kind: current.clone(), start, end });
    segments
}
