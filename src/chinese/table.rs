//! 月長資料
//!
//! 每年一個字：第 4..=15 位自高至低依次為正月至臘月的大小（1 為大月三十日，0 為小月二十九日），
//! 第 0..=3 位為閏月月序（無閏為 0），第 16 位為閏月大小。

use std::sync::OnceLock;

use crate::date::Date;

/// 資料首年
pub const FIRST_YEAR: i32 = 1901;
/// 資料末年
pub const LAST_YEAR: i32 = 2100;

/// 1901 年正月初一（1901-02-19）的儒略日數
const FIRST_NEW_YEAR_JDN: u32 = 2415435;

#[rustfmt::skip]
static RAW_DATA: [u32; 200] = [
    0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, 0x04ae0, // 1901..=1910
    0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, 0x04970, // 1911..=1920
    0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, 0x06566, // 1921..=1930
    0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, 0x0d4a0, // 1931..=1940
    0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, 0x06ca0, // 1941..=1950
    0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, 0x0aea6, // 1951..=1960
    0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, 0x096d0, // 1961..=1970
    0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, 0x095b0, // 1971..=1980
    0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, 0x04af5, // 1981..=1990
    0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, 0x0c960, // 1991..=2000
    0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, 0x0a950, // 2001..=2010
    0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, 0x07954, // 2011..=2020
    0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, 0x05aa0, // 2021..=2030
    0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, 0x0b5a0, // 2031..=2040
    0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, 0x14b63, // 2041..=2050
    0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, 0x092e0, // 2051..=2060
    0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, 0x052d0, // 2061..=2070
    0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, 0x0b273, // 2071..=2080
    0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, 0x0e968, // 2081..=2090
    0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, 0x0d520, // 2091..=2100
];

/// 一年的月長資料
#[derive(Debug, Copy, Clone)]
pub struct YearData {
    /// 年份，與正月初一所在公元年相同
    pub year: i32,
    /// 正月初一
    pub new_year: Date,
    bits: u32,
}

static DATA: OnceLock<Vec<YearData>> = OnceLock::new();

impl YearData {
    /// 取得 `year` 年的資料。
    ///
    /// 無數據則返回 `None`。
    pub fn get(year: i32) -> Option<&'static Self> {
        let data = DATA.get_or_init(build);
        let idx = usize::try_from(year.checked_sub(FIRST_YEAR)?).ok()?;
        data.get(idx)
    }

    /// 閏月月序，無閏則為 `None`。
    pub fn leap_month(&self) -> Option<u32> {
        match self.bits & 0xf {
            0 => None,
            m => Some(m),
        }
    }
    /// 平月 `month` 的日數。
    ///
    /// # Panics
    ///
    /// 若月序號不在 `1..=12` 間則 panic。
    pub fn month_days(&self, month: u32) -> u32 {
        assert!((1..=12).contains(&month), "month {} not in 1..=12", month);
        if self.bits & (0x10000 >> month) != 0 { 30 } else { 29 }
    }
    /// 閏月日數，無閏則為 `None`。
    pub fn leap_month_days(&self) -> Option<u32> {
        self.leap_month()
            .map(|_| if self.bits & 0x10000 != 0 { 30 } else { 29 })
    }
    /// 全年日數
    pub fn days(&self) -> u32 {
        (1..=12).map(|m| self.month_days(m)).sum::<u32>() + self.leap_month_days().unwrap_or(0)
    }
}

fn build() -> Vec<YearData> {
    let mut new_year = Date::from_jdn(FIRST_NEW_YEAR_JDN);
    (FIRST_YEAR..=LAST_YEAR)
        .zip(RAW_DATA)
        .map(|(year, bits)| {
            let rec = YearData {
                year,
                new_year,
                bits,
            };
            new_year = new_year + rec.days() as i32;
            rec
        })
        .collect()
}
