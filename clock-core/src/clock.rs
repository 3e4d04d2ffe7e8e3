//! Canonical GMT timekeeping.
//!
//! [`ClockState`] holds the stored time base in GMT plus the seasonal
//! display offset. The only mutation is [`ClockState::advance_one_second`],
//! driven once per second by the slow ticker. Display code never writes
//! here; it projects through [`crate::timezone`] instead.

use crate::calendar::{Weekday, day_of_week, days_in_month};

/// GMT time/date plus the active seasonal display offset.
///
/// Field invariants after every advance: seconds/minutes in `[0,60)`,
/// hours in `[0,24)`, month in `[1,12]`, day in
/// `[1, days_in_month(year, month)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    pub seconds: u8,
    pub minutes: u8,
    pub hours: u8,
    pub day: u8,
    pub month: u8,
    pub year: u16,
    /// Hours added to GMT for display: 0 outside summer time, 1 inside.
    /// Flipped only by the seasonal rule in `advance_one_second`.
    pub timezone_offset: u8,
}

impl ClockState {
    /// Seeds the clock. Time state is volatile; the firmware calls this
    /// once at power-up with its configured start value.
    pub const fn new(
        year: u16,
        month: u8,
        day: u8,
        hours: u8,
        minutes: u8,
        seconds: u8,
        timezone_offset: u8,
    ) -> Self {
        Self {
            seconds,
            minutes,
            hours,
            day,
            month,
            year,
            timezone_offset,
        }
    }

    /// Advances GMT by exactly one second, propagating carries through
    /// minutes, hours and the date, and evaluating the summer-time rule.
    ///
    /// The date cascade moves at most one day per call; ticks arrive one
    /// second apart, so no larger jump can occur. Not re-entrant — the
    /// caller serialises access (the firmware holds the clock mutex).
    pub fn advance_one_second(&mut self) {
        self.seconds += 1;
        self.minutes += self.seconds / 60;
        self.seconds %= 60;
        self.hours += self.minutes / 60;
        self.minutes %= 60;

        if self.hours == 24 {
            self.hours = 0;
            self.day += 1;

            if self.day > days_in_month(self.year, self.month) {
                self.day = 1;
                self.month += 1;

                if self.month > 12 {
                    self.month = 1;
                    self.year += 1;
                }
            }
        }

        // Summer time begins at 01:00 GMT on the last Sunday of March
        // and ends at 01:00 GMT on the last Sunday of October. A Sunday
        // is the last of its 31-day month exactly when day + 7 > 31.
        if self.seconds == 0
            && self.minutes == 0
            && self.hours == 1
            && day_of_week(self.year, self.month, self.day) == Weekday::Sunday
        {
            if self.month == 3 && self.day + 7 > 31 {
                self.timezone_offset = 1;
            } else if self.month == 10 && self.day + 7 > 31 {
                self.timezone_offset = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: u16, month: u8, day: u8, h: u8, m: u8, s: u8) -> ClockState {
        ClockState::new(year, month, day, h, m, s, 0)
    }

    #[test]
    fn plain_second() {
        let mut state = at(2013, 7, 26, 22, 59, 30);
        state.advance_one_second();
        assert_eq!(state, at(2013, 7, 26, 22, 59, 31));
    }

    #[test]
    fn minute_and_hour_carry() {
        let mut state = at(2013, 7, 26, 22, 59, 59);
        state.advance_one_second();
        assert_eq!(state, at(2013, 7, 26, 23, 0, 0));
    }

    #[test]
    fn new_year_rollover() {
        let mut state = at(2013, 12, 31, 23, 59, 59);
        state.advance_one_second();
        assert_eq!(state, at(2014, 1, 1, 0, 0, 0));
    }

    #[test]
    fn mid_year_month_rollover() {
        for (year, month) in [(2023u16, 2u8), (2024, 2), (2024, 4), (2024, 7)] {
            let mut state = at(year, month, days_in_month(year, month), 23, 59, 59);
            state.advance_one_second();
            assert_eq!(state, at(year, month + 1, 1, 0, 0, 0));
        }
    }

    #[test]
    fn leap_day_reached_before_rollover() {
        let mut state = at(2024, 2, 28, 23, 59, 59);
        state.advance_one_second();
        assert_eq!(state, at(2024, 2, 29, 0, 0, 0));
    }

    #[test]
    fn dst_entry_last_sunday_of_march() {
        // 2013-03-31 is the last Sunday of March.
        let mut state = at(2013, 3, 31, 0, 59, 59);
        state.advance_one_second();
        assert_eq!(state.hours, 1);
        assert_eq!(state.timezone_offset, 1);
    }

    #[test]
    fn dst_exit_last_sunday_of_october() {
        let mut state = ClockState::new(2013, 10, 27, 0, 59, 59, 1);
        state.advance_one_second();
        assert_eq!(state.timezone_offset, 0);
    }

    #[test]
    fn earlier_march_sunday_does_not_fire() {
        // 2013-03-24 is a Sunday, but not the last one.
        let mut state = at(2013, 3, 24, 0, 59, 59);
        state.advance_one_second();
        assert_eq!(state.timezone_offset, 0);
    }

    #[test]
    fn wrong_hour_does_not_fire() {
        let mut state = at(2013, 3, 31, 1, 59, 59);
        state.advance_one_second();
        assert_eq!(state.hours, 2);
        assert_eq!(state.timezone_offset, 0);
    }

    #[test]
    fn non_sunday_does_not_fire() {
        // 2013-03-29 is a Friday in the last week of March.
        let mut state = at(2013, 3, 29, 0, 59, 59);
        state.advance_one_second();
        assert_eq!(state.timezone_offset, 0);
    }
}
