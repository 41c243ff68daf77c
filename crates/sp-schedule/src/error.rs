use sp_core::CoreError;
use thiserror::Error;

use crate::code::CodeDefect;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid slot code {raw:?} at slot {index}: {defect}")]
    InvalidCode {
        index:  usize,
        raw:    String,
        defect: CodeDefect,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("schedule parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("volunteer {volunteer:?}: {source}")]
    Row {
        volunteer: String,
        #[source]
        source:    Box<ScheduleError>,
    },
}

impl From<CoreError> for ScheduleError {
    fn from(e: CoreError) -> Self {
        ScheduleError::InvalidInput(e.to_string())
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
