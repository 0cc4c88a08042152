//! Plain-text month view for terminals.

use std::fmt;

use crate::calendar::LunarCalendarView;
use crate::grid::CalendarDay;

const HEADER: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const CELL_WIDTH: usize = 8;

/// Renders the month view of `view` followed by its lunisolar summary.
///
/// Each cell reads `day/lunar day`; days of adjacent months are wrapped in
/// parentheses and today is marked with `*`.
///
/// # Example
///
/// ```
/// use lunkalendaro::{Date, LunarCalendar, render};
///
/// let date = Date::from_gregorian(2020, 1, 25).unwrap();
/// let view = LunarCalendar::chinese().lunar_calendar_at(date, date).unwrap();
/// let text = render::month_view(&view);
///
/// assert!(text.starts_with("January 2020 - Lunar 1/2020\n"));
/// assert!(text.contains("*25/1"));
/// ```
pub fn month_view(view: &LunarCalendarView) -> String {
    MonthView(view).to_string()
}

/// [`Display`](fmt::Display) adapter behind [`month_view`].
#[derive(Debug, Copy, Clone)]
pub struct MonthView<'a>(pub &'a LunarCalendarView);

impl fmt::Display for MonthView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "{}", view.month_title)?;
        for name in HEADER {
            write!(f, "{name:>CELL_WIDTH$}")?;
        }
        writeln!(f)?;
        for week in &view.calendar_weeks {
            for day in week.days() {
                write!(f, "{:>CELL_WIDTH$}", cell(day))?;
            }
            writeln!(f)?;
        }

        let summary = &view.summary;
        writeln!(
            f,
            "{} is lunar {}, year of the {} ({}){}",
            summary.gregorian_date,
            summary.lunar_date_label(),
            summary.animal_sign,
            summary.stem_branch,
            if summary.is_leap_month {
                ", leap month"
            } else {
                ""
            }
        )
    }
}

fn cell(day: &CalendarDay) -> String {
    let today = if day.is_today { "*" } else { "" };
    if day.is_current_month {
        format!("{today}{}/{}", day.day, day.lunar_day)
    } else {
        format!("{today}({}/{})", day.day, day.lunar_day)
    }
}
