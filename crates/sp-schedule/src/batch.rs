//! Composing many rows at once.

use sp_core::SlotClock;

use crate::loader::VolunteerRow;
use crate::{ComposedSchedule, ScheduleError, ScheduleResult};

/// Compose every row, keeping input order.
///
/// If any row fails, the error of the first failing row (in row order) is
/// returned, wrapped in [`ScheduleError::Row`].  With the `parallel` Cargo
/// feature rows are composed on Rayon's thread pool; the result is the same.
pub fn compose_rows(clock: &SlotClock, rows: &[VolunteerRow]) -> ScheduleResult<Vec<ComposedSchedule>> {
    #[cfg(not(feature = "parallel"))]
    let results: Vec<ScheduleResult<ComposedSchedule>> =
        rows.iter().map(|row| compose_row(clock, row)).collect();

    #[cfg(feature = "parallel")]
    let results: Vec<ScheduleResult<ComposedSchedule>> = {
        use rayon::prelude::*;

        rows.par_iter().map(|row| compose_row(clock, row)).collect()
    };

    results.into_iter().collect()
}

fn compose_row(clock: &SlotClock, row: &VolunteerRow) -> ScheduleResult<ComposedSchedule> {
    ComposedSchedule::compose(clock, row).map_err(|e| ScheduleError::Row {
        volunteer: row.name.clone(),
        source:    Box::new(e),
    })
}
