//! Calendar-independant date.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Serialize, Serializer};

use crate::error::Error;

/// Julian day number of the day before January 1, 1 AD (proleptic Gregorian).
const JDN_CE_EPOCH: u32 = 1721425;

/// A calendar-independant date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub const fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns `None` if the result date is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use lunkalendaro::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        let (y, m, d) = (year, month, day);
        u32::try_from(
            (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
                - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
                + d
                - 32075,
        )
        .map(Self::from_jdn)
        .ok()
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use lunkalendaro::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = self.jdn as i64;
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year as i32, month as i32, day as i32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use lunkalendaro::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, numbered from Sunday, i.e. `0..=6`
    /// for Sunday through Saturday.
    ///
    /// # Example
    ///
    /// ```
    /// use lunkalendaro::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> u32 {
        (self.jdn + 1) % 7
    }
    /// `true` on Saturdays and Sundays.
    pub fn is_weekend(&self) -> bool {
        matches!(self.day_of_week(), 0 | 6)
    }

    /// Returns the first day of the Gregorian month containing the date.
    pub fn first_of_month(&self) -> Self {
        let (_, _, d) = self.gregorian();
        *self + (1 - d)
    }
    /// Returns the number of days in the Gregorian month containing the date.
    pub fn days_in_month(&self) -> u32 {
        let (y, m, _) = self.gregorian();
        days_in_month(y, m)
    }

    /// Returns the current date in the local timezone.
    pub fn today() -> Self {
        Self::from(Local::now().date_naive())
    }
}

/// Returns the number of days of `month` in Gregorian year `year`.
///
/// # Example
///
/// ```
/// use lunkalendaro::date::days_in_month;
///
/// assert_eq!(29, days_in_month(2020, 2));
/// assert_eq!(28, days_in_month(1900, 2));
/// assert_eq!(31, days_in_month(2020, 12));
/// ```
///
/// # Panics
///
/// Panics if `month` is not in `1..=12`.
pub fn days_in_month(year: i32, month: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + YearType::from_gregorian(year).is_leap() as u32,
        _ => panic!("month {} not in 1..=12", month),
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(if rhs >= 0 {
            self.jdn + rhs as u32
        } else {
            self.jdn - rhs.wrapping_neg() as u32
        })
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
    }
}

impl From<NaiveDate> for Date {
    /// Dates before 4713 BC saturate to the earliest supported date.
    fn from(date: NaiveDate) -> Self {
        let jdn = i64::from(JDN_CE_EPOCH) + i64::from(date.num_days_from_ce());
        Self::from_jdn(u32::try_from(jdn).unwrap_or(0))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_gregorian())
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| Error::InvalidDate(format!("{s:?}: {e}")))?;
        Date::from_gregorian(date.year(), date.month() as i32, date.day() as i32)
            .ok_or_else(|| Error::InvalidDate(format!("{s:?}: before 4713 BC")))
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(2459466, date.jdn());
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!((1970, 1, 1), date.gregorian());
        let date = Date::from_jdn(2459466);
        assert_eq!((2021, 9, 8), date.gregorian());
        let date = Date::from_jdn(2451545);
        assert_eq!((2000, 1, 1), date.gregorian());
    }

    #[test]
    fn to_day_of_week() {
        for ((y, m, d), std) in [
            ((1970, 1, 1), 4),
            ((2021, 9, 8), 3),
            ((2020, 1, 25), 6),
            ((2020, 1, 26), 0),
            ((1901, 2, 1), 5),
        ] {
            let date = Date::from_gregorian(y, m, d).unwrap();
            assert_eq!(std, date.day_of_week(), "{date}");
        }
    }

    #[test]
    fn month_boundaries() {
        let date = Date::from_gregorian(2020, 2, 17).unwrap();
        assert_eq!("2020-02-01", date.first_of_month().iso_gregorian());
        assert_eq!(29, date.days_in_month());
        let date = Date::from_gregorian(2100, 2, 28).unwrap();
        assert_eq!(28, date.days_in_month());
        assert_eq!(30, days_in_month(2021, 4));
    }

    #[test]
    fn arithmetic() {
        let date = Date::from_gregorian(2020, 3, 1).unwrap();
        assert_eq!("2020-02-29", (date + -1).iso_gregorian());
        assert_eq!("2020-03-31", (date + 30).iso_gregorian());
        assert_eq!(60, date - Date::from_gregorian(2020, 1, 1).unwrap());
    }

    #[test]
    fn parse_and_format() {
        let date: Date = "2021-09-08".parse().unwrap();
        assert_eq!(2459466, date.jdn());
        assert_eq!("2021-09-08", date.to_string());
        assert!("2021-02-30".parse::<Date>().is_err());
        assert!("yesterday".parse::<Date>().is_err());
    }

    #[test]
    fn from_chrono() {
        let naive = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(2451545, Date::from(naive).jdn());
    }

    #[test]
    fn serializes_as_iso_string() {
        let date = Date::from_gregorian(1901, 2, 19).unwrap();
        assert_eq!("\"1901-02-19\"", serde_json::to_string(&date).unwrap());
    }
}
