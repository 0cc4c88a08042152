//! Conversion and month view in one query.

use serde::Serialize;

use crate::chinese::ChineseLunisolar;
use crate::converter::{DateConverter, LunisolarSummary};
use crate::date::Date;
use crate::error::Result;
use crate::grid::{GridBuilder, MonthGrid, Week};
use crate::oracle::LunisolarOracle;

/// Everything known about one queried date: its lunisolar reading and the
/// month view around it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarCalendarView {
    #[serde(flatten)]
    pub summary: LunisolarSummary,
    pub month_title: String,
    pub calendar_weeks: Vec<Week>,
}

impl LunarCalendarView {
    fn new(summary: LunisolarSummary, grid: MonthGrid) -> Self {
        Self {
            summary,
            month_title: grid.title,
            calendar_weeks: grid.weeks,
        }
    }

    /// The month view part, reassembled.
    pub fn grid(&self) -> MonthGrid {
        MonthGrid {
            title: self.month_title.clone(),
            weeks: self.calendar_weeks.clone(),
        }
    }
}

/// Entry point combining [`DateConverter`] and [`GridBuilder`].
///
/// # Example
///
/// ```
/// use lunkalendaro::{Date, LunarCalendar};
///
/// let calendar = LunarCalendar::chinese();
/// let date = Date::from_gregorian(2020, 1, 25).unwrap();
/// let view = calendar.lunar_calendar_at(date, date).unwrap();
///
/// assert_eq!("Rat", view.summary.animal_sign);
/// assert_eq!("January 2020 - Lunar 1/2020", view.month_title);
/// ```
#[derive(Debug, Clone)]
pub struct LunarCalendar<O = ChineseLunisolar> {
    converter: DateConverter<O>,
}

impl LunarCalendar {
    /// Calendar backed by the bundled [`ChineseLunisolar`] oracle.
    pub fn chinese() -> Self {
        Self::with_oracle(ChineseLunisolar)
    }
}

impl Default for LunarCalendar {
    fn default() -> Self {
        Self::chinese()
    }
}

impl<O: LunisolarOracle> LunarCalendar<O> {
    pub fn with_oracle(oracle: O) -> Self {
        Self {
            converter: DateConverter::new(oracle),
        }
    }

    pub fn converter(&self) -> &DateConverter<O> {
        &self.converter
    }

    /// Converts `date` and builds its month view, marking the local current
    /// date as today.
    pub fn lunar_calendar(&self, date: Date) -> Result<LunarCalendarView> {
        self.lunar_calendar_at(date, Date::today())
    }

    /// Same as [`lunar_calendar`](Self::lunar_calendar) with an explicit
    /// today.
    pub fn lunar_calendar_at(&self, date: Date, today: Date) -> Result<LunarCalendarView> {
        let summary = self.converter.convert(date)?;
        let grid = GridBuilder::new(&self.converter, today).grid_for(&summary);
        tracing::debug!(%date, weeks = grid.weeks.len(), "lunar calendar generated");
        Ok(LunarCalendarView::new(summary, grid))
    }
}
