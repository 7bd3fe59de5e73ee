use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtoError {
    #[error("no date selected")]
    EmptyDate,

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("date {0} is before the minimum selectable date")]
    PastDate(NaiveDate),
}
