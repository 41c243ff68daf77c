//! `sp-schedule` — slot codes, the schedule composer, and CSV loading.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`code`]      | `SlotCode` grammar, `CodeDefect`                          |
//! | [`segment`]   | `SegmentKind`, `Segment`                                  |
//! | [`compose`]   | `compose`, `compose_with`, `compose_parsed`, `parse_codes`|
//! | [`schedule`]  | `ComposedSchedule` (lookups over composed segments)       |
//! | [`catalog`]   | `ShiftCatalog`, `EventShift`, catalog CSV loading         |
//! | [`loader`]    | `VolunteerRow`, `load_rows_csv`, `load_rows_reader`       |
//! | [`batch`]     | `compose_rows`                                            |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Composition model (summary)
//!
//! A row of `n` slot codes is split into `2n` half-slot atoms, `#` markers
//! turn one half of a slot into a gap, gaps are resolved from their
//! neighbours, and equal adjacent atoms are merged:
//!
//! ```text
//! ["#SB", "E", "E#", "#B", "", "", "C#"]   (origin 0, 3600 s slots)
//!   → unavailable [0,1800) SB [1800,3600) E [3600,9000) available [9000,12600)
//!     B [12600,14400) available [14400,21600) C [21600,23400) unavailable [23400,25200)
//! ```

pub mod batch;
pub mod catalog;
pub mod code;
pub mod compose;
pub mod error;
pub mod loader;
pub mod schedule;
pub mod segment;


pub use batch::compose_rows;
pub use catalog::{EventShift, ShiftCatalog, load_catalog_csv, load_catalog_reader};
pub use code::{CodeDefect, SlotCode};
pub use compose::{compose, compose_parsed, compose_with, parse_codes};
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{VolunteerRow, load_rows_csv, load_rows_reader};
pub use schedule::ComposedSchedule;
pub use segment::{Segment, SegmentKind};
