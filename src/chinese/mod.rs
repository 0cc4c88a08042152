//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本程序依預製的月長資料（見 [`table`]）編排 1901 至 2100 年的夏曆，並以
//! [`ChineseLunisolar`] 提供 [`LunisolarOracle`] 查詢。

use crate::date::Date;
use crate::oracle::{ERA, LunisolarOracle, OracleError};

pub mod fmt;
pub mod table;

/// 支持的首日，1901 年正月初一。
pub const MIN_DATE: Date = Date::from_jdn(2415435);
/// 支持的末日，2100 年臘月廿九。
pub const MAX_DATE: Date = Date::from_jdn(2488462);

/// 「年」，自正月初一至次年正月初一前日。
///
/// 支持的年份取決於月長資料，見 [`table`]。
///
/// # 用例
///
/// ```
/// use lunkalendaro::Date;
/// use lunkalendaro::chinese::{LunarYear, Month::*};
///
/// let date = Date::from_gregorian(2000, 2, 5).unwrap();
/// let year = LunarYear::from_date(date).unwrap();
///
/// assert_eq!(Ok((2000, Common(1), 1)), year.ymd_for(date));
/// ```
#[derive(Debug, Clone)]
pub struct LunarYear {
    /// 年份，為正月初一所在的公元年
    pub year: i32,
    /// 全部月首，包括次年正月用以標記本年最末日
    pub months: Vec<NewMoon>,
}
/// 月首信息
#[derive(Debug, Copy, Clone)]
pub struct NewMoon {
    /// 月名
    pub month: Month,
    /// 月首所在日期
    pub date: Date,
}
/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
}

impl LunarYear {
    /// 取得公元 `year` 年正月起的夏曆年。
    ///
    /// 若無該年資料則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use lunkalendaro::chinese::LunarYear;
    ///
    /// let year = LunarYear::new(2017).unwrap();
    /// assert_eq!(14, year.months.len()); // 含閏六月及次年正月
    /// ```
    pub fn new(year: i32) -> Option<Self> {
        use Month::*;

        let data = table::YearData::get(year)?;
        let mut months = Vec::with_capacity(14);
        let mut date = data.new_year;
        for month in 1..=12 {
            months.push(NewMoon {
                month: Common(month),
                date,
            });
            date = date + data.month_days(month) as i32;
            if data.leap_month() == Some(month) {
                months.push(NewMoon {
                    month: Leap(month),
                    date,
                });
                date = date + data.leap_month_days().unwrap_or(0) as i32;
            }
        }
        months.push(NewMoon {
            month: Common(1),
            date,
        });

        Some(LunarYear { year, months })
    }
    /// 依特定日期取得其所在年。
    ///
    /// 若無該年資料則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use lunkalendaro::Date;
    /// use lunkalendaro::chinese::LunarYear;
    ///
    /// let date = Date::from_gregorian(2020, 1, 24).unwrap();
    /// let year = LunarYear::from_date(date).unwrap();
    ///
    /// assert_eq!(2019, year.year);
    /// ```
    pub fn from_date(date: Date) -> Option<Self> {
        // 2101 年一月仍屬 2100 年，故自資料範圍內起查
        let mut y = date
            .gregorian()
            .0
            .clamp(table::FIRST_YEAR, table::LAST_YEAR);
        loop {
            let year = Self::new(y)?;

            let start = year.start();
            let end = year.end();

            if (start..end).contains(&date) {
                return Some(year);
            }

            y += if date < start { -1 } else { 1 };
        }
    }

    /// 本年正月初一
    pub fn start(&self) -> Date {
        self.months[0].date
    }
    /// 次年正月初一
    pub fn end(&self) -> Date {
        self.months[self.months.len() - 1].date
    }
    /// 本年月數，有閏月則為 13。
    pub fn month_count(&self) -> usize {
        self.months.len() - 1
    }

    /// 取得給定日期在該年的月序位置（自 0 起，閏月亦佔一位）及日。
    ///
    /// 若所給日期不在該年，則回報 `Err` 並指出該日期在該年之前還是之後。
    pub fn position_for(&self, date: Date) -> Result<(usize, u32), OtherYear> {
        if date < self.start() {
            return Err(OtherYear::Before);
        } else if date >= self.end() {
            return Err(OtherYear::After);
        }

        let idx = self.months.partition_point(|m| m.date <= date) - 1;
        let d = date.jdn() - self.months[idx].date.jdn() + 1;
        Ok((idx, d))
    }

    /// 取得給定日期在該年的年月日，返回格式為 `(年, 月, 日)`。
    ///
    /// 若所給日期不在該年，則回報 `Err` 並指出該日期在該年之前還是之後。
    ///
    /// # 用例
    ///
    /// ```
    /// use lunkalendaro::Date;
    /// use lunkalendaro::chinese::{LunarYear, Month::*};
    ///
    /// let date = Date::from_gregorian(2017, 7, 23).unwrap();
    /// let year = LunarYear::from_date(date).unwrap();
    ///
    /// assert_eq!(Ok((2017, Leap(6), 1)), year.ymd_for(date));
    /// ```
    pub fn ymd_for(&self, date: Date) -> Result<(i32, Month, u32), OtherYear> {
        let (idx, d) = self.position_for(date)?;
        Ok((self.year, self.months[idx].month, d))
    }
}

/// 表示給定日期不在該年，並指出其在前還是在後。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OtherYear {
    Before,
    After,
}

/// 依月長資料查詢夏曆的 [`LunisolarOracle`]。
///
/// 支持 [`MIN_DATE`] 至 [`MAX_DATE`] 間（含兩端）的日期，月序規則見
/// [`LunisolarOracle`]：閏月佔其後一位，例如 2017 年閏六月為第 7 月。
///
/// # 用例
///
/// ```
/// use lunkalendaro::Date;
/// use lunkalendaro::chinese::ChineseLunisolar;
/// use lunkalendaro::oracle::{ERA, LunisolarOracle};
///
/// let oracle = ChineseLunisolar;
/// let date = Date::from_gregorian(2017, 8, 22).unwrap(); // 七月初一
///
/// assert_eq!(Ok(8), oracle.month_of(date));
/// assert_eq!(Ok(true), oracle.is_leap_month(2017, 7, ERA));
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct ChineseLunisolar;

impl ChineseLunisolar {
    fn locate(&self, date: Date) -> Result<(LunarYear, usize, u32), OracleError> {
        if !(MIN_DATE..=MAX_DATE).contains(&date) {
            return Err(OracleError::DateOutOfRange(date));
        }
        let year = LunarYear::from_date(date).ok_or(OracleError::DateOutOfRange(date))?;
        let (idx, day) = year
            .position_for(date)
            .map_err(|_| OracleError::DateOutOfRange(date))?;
        Ok((year, idx, day))
    }
}

impl LunisolarOracle for ChineseLunisolar {
    fn year_of(&self, date: Date) -> Result<i32, OracleError> {
        self.locate(date).map(|(year, _, _)| year.year)
    }

    fn month_of(&self, date: Date) -> Result<u32, OracleError> {
        self.locate(date).map(|(_, idx, _)| idx as u32 + 1)
    }

    fn day_of_month_of(&self, date: Date) -> Result<u32, OracleError> {
        self.locate(date).map(|(_, _, day)| day)
    }

    fn is_leap_month(&self, year: i32, month: u32, era: u32) -> Result<bool, OracleError> {
        if era != ERA {
            return Err(OracleError::UnsupportedEra(era));
        }
        let data = table::YearData::get(year).ok_or(OracleError::YearOutOfRange(year))?;
        let count = if data.leap_month().is_some() { 13 } else { 12 };
        if !(1..=count).contains(&month) {
            return Err(OracleError::MonthOutOfRange { year, month });
        }
        // 閏月緊隨其所閏之月
        Ok(data.leap_month().map(|leap| leap + 1) == Some(month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!("1901-02-19", MIN_DATE.iso_gregorian());
        assert_eq!("2101-01-28", MAX_DATE.iso_gregorian());
    }

    #[test]
    fn from_date() {
        let dataset = [
            (2016, (2017, 1, 27)),
            (2017, (2017, 1, 28)),
            (2017, (2017, 12, 17)),
            (2017, (2018, 2, 15)),
            (2018, (2018, 2, 16)),
        ];
        for (std, (y, m, d)) in dataset {
            assert_eq!(
                Some(std),
                LunarYear::from_date(Date::from_gregorian(y, m, d).unwrap()).map(|a| a.year)
            );
        }
        assert!(LunarYear::from_date(Date::from_gregorian(1901, 2, 18).unwrap()).is_none());
        assert!(LunarYear::from_date(Date::from_gregorian(1900, 12, 31).unwrap()).is_none());
        assert!(LunarYear::from_date(Date::from_gregorian(2101, 1, 29).unwrap()).is_none());
    }

    #[test]
    fn from_date_past_last_gregorian_year() {
        for d in 1..=28 {
            let date = Date::from_gregorian(2101, 1, d).unwrap();
            let year = LunarYear::from_date(date).unwrap();
            assert_eq!(2100, year.year, "{date}");
            assert_eq!(Ok((2100, Month::Common(12), d as u32 + 1)), year.ymd_for(date));
        }
    }

    #[test]
    fn leap_lookup_matches_month_list() {
        let oracle = ChineseLunisolar;
        for y in table::FIRST_YEAR..=table::LAST_YEAR {
            let year = LunarYear::new(y).unwrap();
            let count = year.month_count() as u32;
            for (m, moon) in (1..=count).zip(&year.months) {
                assert_eq!(Ok(moon.month.is_leap()), oracle.is_leap_month(y, m, ERA), "{y} {m}");
            }
            assert_eq!(
                Err(OracleError::MonthOutOfRange { year: y, month: count + 1 }),
                oracle.is_leap_month(y, count + 1, ERA)
            );
        }
    }

    #[test]
    fn months() {
        let year = LunarYear::new(2000).unwrap();
        let stds = [
            (1, "2000-02-05"),
            (2, "2000-03-06"),
            (3, "2000-04-05"),
            (4, "2000-05-04"),
            (5, "2000-06-02"),
            (6, "2000-07-02"),
            (7, "2000-07-31"),
            (8, "2000-08-29"),
            (9, "2000-09-28"),
            (10, "2000-10-27"),
            (11, "2000-11-26"),
            (12, "2000-12-26"),
            (1, "2001-01-24"),
        ];
        assert_eq!(stds.len(), year.months.len());
        for (std, month) in stds.iter().zip(&year.months) {
            assert_eq!(Month::Common(std.0), month.month);
            assert_eq!(std.1, month.date.iso_gregorian());
        }
    }

    #[test]
    fn leap_months() {
        let stds = [
            (1, "2017-01-28"),
            (2, "2017-02-26"),
            (3, "2017-03-28"),
            (4, "2017-04-26"),
            (5, "2017-05-26"),
            (6, "2017-06-24"),
            (-6, "2017-07-23"),
            (7, "2017-08-22"),
            (8, "2017-09-20"),
            (9, "2017-10-20"),
            (10, "2017-11-18"),
            (11, "2017-12-18"),
            (12, "2018-01-17"),
            (1, "2018-02-16"),
        ];
        let year = LunarYear::new(2017).unwrap();
        for (std, month) in stds.iter().zip(&year.months) {
            let std_month = if std.0 > 0 {
                Month::Common(std.0 as u32)
            } else {
                Month::Leap(-std.0 as u32)
            };
            assert_eq!(
                (std_month, std.1.into()),
                (month.month, month.date.iso_gregorian())
            );
        }
        assert_eq!(stds.len(), year.months.len());
    }

    #[test]
    fn dates() {
        use Month::*;
        use OtherYear::*;
        let data = [
            ((2017, 1, 28), Ok((2017, Common(1), 1))),
            ((2017, 7, 22), Ok((2017, Common(6), 29))),
            ((2017, 7, 23), Ok((2017, Leap(6), 1))),
            ((2017, 12, 17), Ok((2017, Common(10), 30))),
            ((2018, 2, 15), Ok((2017, Common(12), 30))),
            ((2017, 1, 27), Err(Before)),
            ((2018, 2, 16), Err(After)),
        ];
        let year = LunarYear::new(2017).unwrap();
        for ((y, m, d), std) in data {
            assert_eq!(std, year.ymd_for(Date::from_gregorian(y, m, d).unwrap()));
        }
        assert_eq!((6, true), (Leap(6).num(), Leap(6).is_leap()));
        assert_eq!((6, false), (Common(6).num(), Common(6).is_leap()));
    }

    #[test]
    fn oracle_lookups() {
        let oracle = ChineseLunisolar;
        for ((y, m, d), std) in [
            ((1901, 2, 19), (1901, 1, 1)),
            ((2020, 1, 25), (2020, 1, 1)),
            ((2020, 1, 24), (2019, 12, 30)),
            ((2017, 7, 23), (2017, 7, 1)),
            ((2017, 12, 18), (2017, 12, 1)),
            ((2018, 2, 15), (2017, 13, 30)),
            ((2101, 1, 28), (2100, 12, 29)),
        ] {
            let date = Date::from_gregorian(y, m, d).unwrap();
            let got = (
                oracle.year_of(date).unwrap(),
                oracle.month_of(date).unwrap(),
                oracle.day_of_month_of(date).unwrap(),
            );
            assert_eq!(std, got, "{date}");
        }
    }

    #[test]
    fn oracle_leap_months() {
        let oracle = ChineseLunisolar;
        assert_eq!(Ok(false), oracle.is_leap_month(2017, 6, ERA));
        assert_eq!(Ok(true), oracle.is_leap_month(2017, 7, ERA));
        assert_eq!(Ok(false), oracle.is_leap_month(2017, 13, ERA));
        assert_eq!(Ok(true), oracle.is_leap_month(2020, 5, ERA));
        assert_eq!(
            Err(OracleError::MonthOutOfRange {
                year: 2020,
                month: 14
            }),
            oracle.is_leap_month(2020, 14, ERA)
        );
        assert_eq!(
            Err(OracleError::MonthOutOfRange {
                year: 2000,
                month: 13
            }),
            oracle.is_leap_month(2000, 13, ERA)
        );
        assert_eq!(
            Err(OracleError::MonthOutOfRange { year: 2000, month: 0 }),
            oracle.is_leap_month(2000, 0, ERA)
        );
        assert_eq!(Err(OracleError::YearOutOfRange(1900)), oracle.is_leap_month(1900, 1, ERA));
        assert_eq!(Err(OracleError::UnsupportedEra(2)), oracle.is_leap_month(2000, 1, 2));
    }

    #[test]
    fn oracle_out_of_range() {
        let oracle = ChineseLunisolar;
        for (y, m, d) in [(1901, 2, 18), (1800, 1, 1), (2101, 1, 29)] {
            let date = Date::from_gregorian(y, m, d).unwrap();
            assert_eq!(Err(OracleError::DateOutOfRange(date)), oracle.year_of(date));
            assert_eq!(Err(OracleError::DateOutOfRange(date)), oracle.month_of(date));
            assert_eq!(Err(OracleError::DateOutOfRange(date)), oracle.day_of_month_of(date));
        }
    }
}
