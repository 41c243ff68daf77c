//! Shift catalog: which shift labels belong to which event.
//!
//! # CSV format
//!
//! ```csv
//! label,event
//! SB,Setup crew
//! E,Registration desk
//! ```
//!
//! Labels are unique; a repeated label is a parse error.  Shift labels that
//! are not in the catalog are ordinary duties with no linked event.

use std::io::Read;
use std::path::Path;

use log::info;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::ScheduleError;

#[derive(Deserialize)]
struct CatalogRecord {
    label: String,
    event: String,
}

/// A shift segment linked to an event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventShift {
    pub label: String,
    pub event: String,
    pub start: i64,
    pub end:   i64,
}

/// Label → event lookup table.
#[derive(Clone, Debug, Default)]
pub struct ShiftCatalog {
    events: FxHashMap<String, String>,
}

impl ShiftCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link `label` to `event`, returning the event it was previously linked to.
    pub fn insert(&mut self, label: impl Into<String>, event: impl Into<String>) -> Option<String> {
        self.events.insert(label.into(), event.into())
    }

    pub fn event_for(&self, label: &str) -> Option<&str> {
        self.events.get(label).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<L: Into<String>, E: Into<String>> FromIterator<(L, E)> for ShiftCatalog {
    fn from_iter<I: IntoIterator<Item = (L, E)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (label, event) in iter {
            catalog.insert(label, event);
        }
        catalog
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Load a catalog from a CSV file.
pub fn load_catalog_csv(path: &Path) -> Result<ShiftCatalog, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_catalog_reader(file)
}

/// Like [`load_catalog_csv`] but accepts any `Read` source.
pub fn load_catalog_reader<R: Read>(reader: R) -> Result<ShiftCatalog, ScheduleError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut catalog = ShiftCatalog::new();

    for result in csv_reader.deserialize::<CatalogRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        if row.label.is_empty() {
            return Err(ScheduleError::Parse("catalog row with empty label".into()));
        }
        if catalog.events.contains_key(&row.label) {
            return Err(ScheduleError::Parse(format!(
                "duplicate shift label {:?} in catalog",
                row.label
            )));
        }
        catalog.insert(row.label, row.event);
    }

    info!("loaded shift catalog with {} label(s)", catalog.len());
    Ok(catalog)
}
