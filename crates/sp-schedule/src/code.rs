//! Slot-code grammar.
//!
//! One raw code describes one slot of a volunteer's row:
//!
//! | Code       | First half         | Second half        |
//! |------------|--------------------|--------------------|
//! | `""`       | available          | available          |
//! | `"x"`      | unavailable        | unavailable        |
//! | `"S1"`     | shift `S1`         | shift `S1`         |
//! | `"#S1"`    | gap                | shift `S1`         |
//! | `"S1#"`    | shift `S1`         | gap                |
//! | `"#"`      | gap                | available          |
//!
//! Gap halves are resolved against their neighbours by the composer.  A
//! code may carry at most one marker and the marker must sit at the very
//! start or end.  Markers are accepted on every state, including the empty
//! (available) one: a lone `"#"` reads as a leading marker.

use std::fmt;
use std::str::FromStr;

use crate::SegmentKind;

/// Half-slot marker character.
pub const MARKER: char = '#';

/// Code meaning "unavailable for the whole slot".
pub const UNAVAILABLE_CODE: &str = "x";

/// Why a raw code was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CodeDefect {
    /// `#` both before and after the state.
    BothMarkers,
    /// `#` somewhere other than the first or last character.
    EmbeddedMarker,
}

impl fmt::Display for CodeDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CodeDefect::BothMarkers => "leading and trailing markers on one slot",
            CodeDefect::EmbeddedMarker => "marker inside the state",
        })
    }
}

/// A parsed slot code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotCode {
    /// First half is a gap; `state` starts at the midpoint.
    pub leading:  bool,
    pub state:    SegmentKind,
    /// Second half is a gap; `state` ends at the midpoint.
    pub trailing: bool,
}

impl SlotCode {
    /// `state` for the whole slot, no markers.
    pub fn full(state: SegmentKind) -> Self {
        Self { leading: false, state, trailing: false }
    }

    pub fn is_split(&self) -> bool {
        self.leading || self.trailing
    }
}

impl FromStr for SlotCode {
    type Err = CodeDefect;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (leading, rest) = match raw.strip_prefix(MARKER) {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let (trailing, body) = match rest.strip_suffix(MARKER) {
            Some(body) => (true, body),
            None => (false, rest),
        };

        if leading && trailing {
            return Err(CodeDefect::BothMarkers);
        }
        if body.contains(MARKER) {
            return Err(CodeDefect::EmbeddedMarker);
        }

        let state = match body {
            "" => SegmentKind::Available,
            UNAVAILABLE_CODE => SegmentKind::Unavailable,
            label => SegmentKind::Shift(label.to_owned()),
        };
        Ok(Self { leading, state, trailing })
    }
}
