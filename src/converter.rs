//! Gregorian to lunisolar date conversion.

use serde::Serialize;

use crate::chinese::{self, MAX_DATE, MIN_DATE};
use crate::date::Date;
use crate::error::{Error, Result};
use crate::oracle::{ERA, LunisolarOracle, OracleError};

/// Lunisolar reading of one Gregorian date.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LunisolarSummary {
    pub gregorian_date: Date,
    pub lunar_year: i32,
    /// Traditional month number, `1..=12`; a leap month shares the number of
    /// the month it repeats.
    pub lunar_month: u32,
    pub lunar_day: u32,
    pub is_leap_month: bool,
    pub animal_sign: &'static str,
    pub stem_branch: String,
}

impl LunisolarSummary {
    /// Formats the lunar date as `YYYY-MM-DD`, with an `L` before the month
    /// for leap months.
    ///
    /// # Example
    ///
    /// ```
    /// use lunkalendaro::{ChineseLunisolar, Date, DateConverter};
    ///
    /// let converter = DateConverter::new(ChineseLunisolar);
    /// let date = Date::from_gregorian(2017, 7, 23).unwrap();
    ///
    /// assert_eq!("2017-L06-01", converter.convert(date).unwrap().lunar_date_label());
    /// ```
    pub fn lunar_date_label(&self) -> String {
        let leap = if self.is_leap_month { "L" } else { "" };
        format!(
            "{:04}-{}{:02}-{:02}",
            self.lunar_year, leap, self.lunar_month, self.lunar_day
        )
    }
}

/// Converts Gregorian dates through a [`LunisolarOracle`].
#[derive(Debug, Clone, Default)]
pub struct DateConverter<O> {
    oracle: O,
}

impl<O: LunisolarOracle> DateConverter<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Converts `date` into its lunisolar summary.
    ///
    /// Fails with [`Error::OutOfRange`] if `date` lies outside
    /// [`MIN_DATE`]`..=`[`MAX_DATE`]; the oracle is not consulted for such
    /// dates.
    ///
    /// # Example
    ///
    /// ```
    /// use lunkalendaro::{ChineseLunisolar, Date, DateConverter};
    ///
    /// let converter = DateConverter::new(ChineseLunisolar);
    /// let summary = converter.convert(Date::from_gregorian(2020, 1, 25).unwrap()).unwrap();
    ///
    /// assert_eq!((2020, 1, 1), (summary.lunar_year, summary.lunar_month, summary.lunar_day));
    /// assert_eq!("Rat", summary.animal_sign);
    /// assert_eq!("Geng Zi", summary.stem_branch);
    /// ```
    pub fn convert(&self, date: Date) -> Result<LunisolarSummary> {
        if !(MIN_DATE..=MAX_DATE).contains(&date) {
            tracing::warn!(%date, "date outside the supported lunisolar range");
            return Err(Error::out_of_range(date));
        }
        self.lookup(date).map_err(|source| {
            tracing::warn!(%date, error = %source, "oracle rejected date");
            Error::OutOfRange {
                date,
                source: Some(source),
            }
        })
    }

    /// Lunar day of month of `date`, straight from the oracle.
    pub fn lunar_day(&self, date: Date) -> std::result::Result<u32, OracleError> {
        self.oracle.day_of_month_of(date)
    }

    fn lookup(&self, date: Date) -> std::result::Result<LunisolarSummary, OracleError> {
        let lunar_year = self.oracle.year_of(date)?;
        let ordinal = self.oracle.month_of(date)?;
        let lunar_day = self.oracle.day_of_month_of(date)?;
        let is_leap_month = self.oracle.is_leap_month(lunar_year, ordinal, ERA)?;

        // at most one leap month per year
        let mut lunar_month = ordinal;
        for m in 1..=ordinal {
            if self.oracle.is_leap_month(lunar_year, m, ERA)? {
                lunar_month -= 1;
                break;
            }
        }

        Ok(LunisolarSummary {
            gregorian_date: date,
            lunar_year,
            lunar_month,
            lunar_day,
            is_leap_month,
            animal_sign: chinese::fmt::zodiac(lunar_year),
            stem_branch: chinese::fmt::stem_branch(lunar_year),
        })
    }
}
