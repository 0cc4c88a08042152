use thiserror::Error;

use crate::chinese::{MAX_DATE, MIN_DATE};
use crate::date::Date;
use crate::oracle::OracleError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "the date {date} is outside the supported range for the Chinese lunar calendar; \
         supported range is {min} to {max}",
        min = MIN_DATE,
        max = MAX_DATE
    )]
    OutOfRange {
        date: Date,
        #[source]
        source: Option<OracleError>,
    },

    #[error("invalid date {0}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

impl Error {
    pub(crate) fn out_of_range(date: Date) -> Self {
        Error::OutOfRange { date, source: None }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
