use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Date window is reversed: start {start} is after end {end}")]
    ReversedWindow { start: NaiveDate, end: NaiveDate },
}
