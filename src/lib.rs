//! Converts Gregorian dates into the Chinese lunisolar calendar and lays out
//! month views annotated with lunar days.
//!
//! Dates from 1901-02-19 to 2101-01-28 are supported, the range of the
//! bundled month-length table. Lunisolar lookups go through the
//! [`LunisolarOracle`] trait, so another source of lunar dates can be used in
//! place of [`ChineseLunisolar`].
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use lunkalendaro::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Lunisolar reading and month view:
//!
//! ```
//! use lunkalendaro::{Date, LunarCalendar};
//!
//! let date = Date::from_gregorian(2020, 1, 25).unwrap();
//! let view = LunarCalendar::chinese().lunar_calendar_at(date, date).unwrap();
//!
//! assert_eq!((2020, 1, 1), (view.summary.lunar_year, view.summary.lunar_month, view.summary.lunar_day));
//! assert_eq!("Rat", view.summary.animal_sign);
//! assert_eq!("January 2020 - Lunar 1/2020", view.month_title);
//! ```
//!
//! Dates outside the supported range are rejected:
//!
//! ```
//! use lunkalendaro::{ChineseLunisolar, Date, DateConverter, Error};
//!
//! let converter = DateConverter::new(ChineseLunisolar);
//! let err = converter.convert(Date::from_gregorian(1800, 1, 1).unwrap()).unwrap_err();
//!
//! assert!(matches!(err, Error::OutOfRange { .. }));
//! ```
//!
//! # Planned features
//!
//! - Holiday detection for [`CalendarDay::is_holiday`]

pub mod calendar;
pub mod chinese;
pub mod config;
pub mod converter;
pub mod date;
pub mod error;
pub mod grid;
pub mod logger;
pub mod oracle;
pub mod render;

pub use calendar::{LunarCalendar, LunarCalendarView};
pub use chinese::ChineseLunisolar;
pub use config::{CliConfig, OutputFormat};
pub use converter::{DateConverter, LunisolarSummary};
pub use date::{Date, YearType};
pub use error::{Error, Result};
pub use grid::{CalendarDay, GridBuilder, MonthGrid, Week};
pub use oracle::{LunisolarOracle, OracleError};
