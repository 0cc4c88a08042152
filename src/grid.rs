//! Month view of the Gregorian calendar annotated with lunar days.

use serde::Serialize;

use crate::chinese::fmt;
use crate::converter::{DateConverter, LunisolarSummary};
use crate::date::Date;
use crate::error::Result;
use crate::oracle::LunisolarOracle;

/// One cell of a month view.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    /// Gregorian day of month.
    pub day: u32,
    /// Lunar day of month, or a placeholder when the oracle has no answer.
    pub lunar_day: u32,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_weekend: bool,
    /// Holidays are not detected yet, so this is always `false`.
    pub is_holiday: bool,
    /// Always `None`, see [`is_holiday`](Self::is_holiday).
    pub holiday_name: Option<String>,
}

/// Seven days, Sunday first.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Week([CalendarDay; 7]);

impl Week {
    pub fn days(&self) -> &[CalendarDay; 7] {
        &self.0
    }
}

/// Month view: 4 to 6 weeks covering a whole Gregorian month, padded with
/// days of the adjacent months.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    /// E.g. `January 2020 - Lunar 1/2020`.
    pub title: String,
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    /// All cells, row by row.
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flat_map(|w| w.days())
    }
    /// Number of cells belonging to the displayed month.
    pub fn current_month_days(&self) -> usize {
        self.days().filter(|d| d.is_current_month).count()
    }
}

/// Builds [`MonthGrid`]s, looking up each cell's lunar day through a
/// [`DateConverter`].
#[derive(Debug, Clone)]
pub struct GridBuilder<'a, O> {
    converter: &'a DateConverter<O>,
    today: Date,
}

impl<'a, O: LunisolarOracle> GridBuilder<'a, O> {
    /// `today` is the date flagged with [`CalendarDay::is_today`].
    pub fn new(converter: &'a DateConverter<O>, today: Date) -> Self {
        Self { converter, today }
    }

    /// Builds the view of the Gregorian month containing `date`.
    ///
    /// Only `date` itself must be convertible; adjacent days the oracle cannot
    /// handle get placeholder lunar days.
    ///
    /// # Example
    ///
    /// ```
    /// use lunkalendaro::{ChineseLunisolar, Date, DateConverter, GridBuilder};
    ///
    /// let converter = DateConverter::new(ChineseLunisolar);
    /// let date = Date::from_gregorian(2020, 1, 25).unwrap();
    /// let grid = GridBuilder::new(&converter, date).build_month_grid(date).unwrap();
    ///
    /// assert_eq!("January 2020 - Lunar 1/2020", grid.title);
    /// assert_eq!(5, grid.weeks.len());
    /// assert_eq!(31, grid.current_month_days());
    /// ```
    pub fn build_month_grid(&self, date: Date) -> Result<MonthGrid> {
        let summary = self.converter.convert(date)?;
        Ok(self.grid_for(&summary))
    }

    /// Builds the view of the month of an already converted date.
    pub fn grid_for(&self, summary: &LunisolarSummary) -> MonthGrid {
        let (year, month, _) = summary.gregorian_date.gregorian();
        let first = summary.gregorian_date.first_of_month();
        let lead = first.day_of_week();
        let days_in_month = first.days_in_month();
        tracing::debug!(%first, lead, days_in_month, "building month grid");

        let last = first + (days_in_month as i32 - 1);
        let sunday = first + -(lead as i32);
        let weeks = (0..(lead + days_in_month).div_ceil(7))
            .map(|w| {
                let start = sunday + 7 * w as i32;
                Week(std::array::from_fn(|slot| {
                    self.cell_at(start + slot as i32, slot, first, last)
                }))
            })
            .collect();

        MonthGrid {
            title: format!(
                "{} {} - Lunar {}/{}",
                fmt::gregorian_month(month),
                year,
                summary.lunar_month,
                summary.lunar_year
            ),
            weeks,
        }
    }

    /// Cell for `date` in column `slot` of a month running from `first` to
    /// `last`.
    fn cell_at(&self, date: Date, slot: usize, first: Date, last: Date) -> CalendarDay {
        let day = date.gregorian().2 as u32;
        let is_current_month = (first..=last).contains(&date);
        let (placeholder, is_weekend) = if date < first {
            // only the Sunday column counts as weekend before the month starts
            (1, slot == 0)
        } else {
            (day, date.is_weekend())
        };
        CalendarDay {
            day,
            lunar_day: self.lunar_day_or(date, placeholder),
            is_current_month,
            is_today: date == self.today,
            is_weekend,
            is_holiday: false,
            holiday_name: None,
        }
    }

    /// Lunar day of `date`, or `placeholder` if the oracle fails on it.
    fn lunar_day_or(&self, date: Date, placeholder: u32) -> u32 {
        match self.converter.lunar_day(date) {
            Ok(day) => day,
            Err(err) => {
                tracing::debug!(%date, error = %err, placeholder, "lunar day unavailable");
                placeholder
            }
        }
    }
}
