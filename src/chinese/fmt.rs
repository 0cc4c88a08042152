//! 格式化相關的定值表

/// 生肖，自鼠起。
pub const ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster", "Dog",
    "Pig",
];
/// 天干，自甲起。
pub const STEMS: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];
/// 地支，自子起。
pub const BRANCHES: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];
/// 公曆月名，第 0 項為一月。
pub const GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// 取得夏曆年的生肖。公元 4 年為甲子鼠年。
///
/// # 用例
///
/// ```
/// use lunkalendaro::chinese::fmt;
///
/// assert_eq!("Rat", fmt::zodiac(2020));
/// assert_eq!("Rooster", fmt::zodiac(2017));
/// ```
pub fn zodiac(year: i32) -> &'static str {
    ANIMALS[(year - 4).rem_euclid(12) as usize]
}

/// 取得夏曆年的干支，天干與地支間以空格分隔。
///
/// # 用例
///
/// ```
/// use lunkalendaro::chinese::fmt;
///
/// assert_eq!("Geng Zi", fmt::stem_branch(2020));
/// assert_eq!("Xin Chou", fmt::stem_branch(1901));
/// ```
pub fn stem_branch(year: i32) -> String {
    let stem = STEMS[(year - 4).rem_euclid(10) as usize];
    let branch = BRANCHES[(year - 4).rem_euclid(12) as usize];
    format!("{stem} {branch}")
}

/// 取得公曆月名。
///
/// # Panics
///
/// 若月序號不在 `1..=12` 間則 panic。
pub fn gregorian_month(month: i32) -> &'static str {
    match month {
        1..=12 => GREGORIAN_MONTHS[month as usize - 1],
        _ => panic!("month {} not in 1..=12", month),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zodiac() {
        for (std, year) in [("Rat", 1984), ("Ox", 1901), ("Dragon", 2000), ("Monkey", 2100)] {
            assert_eq!(std, zodiac(year));
        }
    }

    #[test]
    fn test_stem_branch() {
        for (std, year) in [
            ("Jia Zi", 1984),
            ("Geng Chen", 2000),
            ("Ding You", 2017),
            ("Geng Shen", 2100),
            ("Jia Zi", 4),
        ] {
            assert_eq!(std, stem_branch(year));
        }
    }

    #[test]
    fn negative_years_wrap() {
        assert_eq!("Rat", zodiac(-8));
        assert_eq!("Jia Zi", stem_branch(-56));
    }

    #[test]
    fn test_gregorian_month() {
        assert_eq!("January", gregorian_month(1));
        assert_eq!("December", gregorian_month(12));
    }
}
