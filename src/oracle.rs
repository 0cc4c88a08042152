//! The lunisolar date authority consulted by the converter.
//!
//! Everything calendar-specific the converter and grid builder need is
//! reached through [`LunisolarOracle`], so any source of lunisolar dates can
//! be plugged in. The crate ships [`ChineseLunisolar`](crate::chinese::ChineseLunisolar).

use thiserror::Error;

use crate::date::Date;

/// The only era of the Chinese lunisolar calendar.
pub const ERA: u32 = 1;

/// Failures of an oracle lookup.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum OracleError {
    #[error("date {0} is out of the oracle's range")]
    DateOutOfRange(Date),
    #[error("lunar year {0} is out of the oracle's range")]
    YearOutOfRange(i32),
    #[error("lunar year {year} has no month {month}")]
    MonthOutOfRange { year: i32, month: u32 },
    #[error("unsupported era {0}")]
    UnsupportedEra(u32),
}

/// Lookups into a lunisolar calendar.
///
/// Months are numbered by their position in the lunar year, so a year with a
/// leap month has months `1..=13` and the leap month takes the position right
/// after the month it repeats.
///
/// Implementations must be pure: the same arguments always give the same
/// answer.
pub trait LunisolarOracle {
    /// Lunar year containing `date`.
    fn year_of(&self, date: Date) -> Result<i32, OracleError>;
    /// Position of the lunar month containing `date` within its year.
    fn month_of(&self, date: Date) -> Result<u32, OracleError>;
    /// Lunar day of month of `date`, `1..=30`.
    fn day_of_month_of(&self, date: Date) -> Result<u32, OracleError>;
    /// Whether the `month`-th month of lunar `year` is a leap month.
    fn is_leap_month(&self, year: i32, month: u32, era: u32) -> Result<bool, OracleError>;
}
