//! Gregorian calendar arithmetic.
//!
//! Stateless helpers used by the carry logic and the DST rule. All of
//! them run at most once per second, so they favour the obvious
//! formulation over anything clever.

/// Day of the week, `Sunday` first to match [`day_of_week`]'s
/// congruence result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// Month lengths for a non-leap year, indexed by `month - 1`.
const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// True if `year` has a February 29th.
pub fn is_leap_year(year: u16) -> bool {
    if year % 400 == 0 {
        true
    } else if year % 100 == 0 {
        false
    } else {
        year % 4 == 0
    }
}

/// Number of days in `month` of `year`.
///
/// `month` must be in `1..=12`; anything else means a carry invariant
/// broke upstream. Debug builds assert, release builds clamp to the
/// nearest valid month and carry on.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month), "month out of range");
    let month = month.clamp(1, 12);
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[month as usize - 1]
    }
}

/// Day of week for a Gregorian date, by the congruence method: drop the
/// year by one for January and February, then sum the year, its leap
/// corrections, a per-month offset and the day, modulo 7.
pub fn day_of_week(year: u16, month: u8, day: u8) -> Weekday {
    const T: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    debug_assert!((1..=12).contains(&month), "month out of range");
    let month = month.clamp(1, 12);
    let mut y = i32::from(year);
    if month < 3 {
        y -= 1;
    }
    let dow = (y + y / 4 - y / 100 + y / 400 + T[month as usize - 1] + i32::from(day)) % 7;
    match dow {
        0 => Weekday::Sunday,
        1 => Weekday::Monday,
        2 => Weekday::Tuesday,
        3 => Weekday::Wednesday,
        4 => Weekday::Thursday,
        5 => Weekday::Friday,
        _ => Weekday::Saturday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rules() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2400));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        // January is 31 days; guards against off-by-one table indexing.
        assert_eq!(days_in_month(2013, 1), 31);
        assert_eq!(days_in_month(2013, 12), 31);
    }

    #[test]
    fn weekday_reference_date() {
        assert_eq!(day_of_week(2013, 7, 26), Weekday::Friday);
    }

    #[test]
    fn weekday_assorted_dates() {
        assert_eq!(day_of_week(2000, 1, 1), Weekday::Saturday);
        assert_eq!(day_of_week(2025, 7, 7), Weekday::Monday);
        // Last Sundays of March and October 2013, the DST boundaries.
        assert_eq!(day_of_week(2013, 3, 31), Weekday::Sunday);
        assert_eq!(day_of_week(2013, 10, 27), Weekday::Sunday);
    }
}
