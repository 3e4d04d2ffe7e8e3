//! Timezone-corrected projection of the stored GMT state.
//!
//! Seconds and minutes are the same in every zone this clock knows
//! about, so only hours and the date get projected. The projection is
//! recomputed from the live state on every render pass and never writes
//! back.

use crate::calendar::days_in_month;
use crate::clock::ClockState;

/// Display-side view of the clock: GMT shifted forward by the active
/// offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LocalView {
    pub hours: u8,
    pub day: u8,
    pub month: u8,
    pub year: u16,
}

/// Projects `state` forward by `offset_hours` without mutating it.
///
/// Supports forward offsets below 24 hours only, so at most one day
/// ever rolls over. Out-of-range offsets assert in debug builds and are
/// clamped in release builds.
pub fn project(state: &ClockState, offset_hours: u8) -> LocalView {
    debug_assert!(offset_hours < 24, "offset out of range");
    let offset_hours = offset_hours.min(23);

    let mut hours = state.hours + offset_hours;
    let mut day = state.day;
    let mut month = state.month;
    let mut year = state.year;

    if hours >= 24 {
        hours -= 24;
        day += 1;

        if day > days_in_month(year, month) {
            day = 1;
            month += 1;

            if month > 12 {
                month = 1;
                year += 1;
            }
        }
    }

    LocalView {
        hours,
        day,
        month,
        year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: u16, month: u8, day: u8, hours: u8) -> ClockState {
        ClockState::new(year, month, day, hours, 12, 34, 0)
    }

    #[test]
    fn zero_offset_is_identity() {
        for state in [
            at(2013, 7, 26, 0),
            at(2013, 7, 26, 23),
            at(2024, 2, 29, 12),
            at(2013, 12, 31, 23),
        ] {
            let view = project(&state, 0);
            assert_eq!(view.hours, state.hours);
            assert_eq!(view.day, state.day);
            assert_eq!(view.month, state.month);
            assert_eq!(view.year, state.year);
        }
    }

    #[test]
    fn state_is_untouched() {
        let state = at(2013, 12, 31, 23);
        let copy = state;
        let _ = project(&state, 1);
        assert_eq!(state, copy);
    }

    #[test]
    fn same_day_shift() {
        let view = project(&at(2013, 7, 26, 12), 1);
        assert_eq!((view.hours, view.day), (13, 26));
    }

    #[test]
    fn midnight_rollover() {
        let view = project(&at(2013, 7, 26, 23), 1);
        assert_eq!((view.hours, view.day, view.month), (0, 27, 7));
    }

    #[test]
    fn month_boundary_rollover() {
        let view = project(&at(2013, 6, 30, 23), 1);
        assert_eq!((view.day, view.month, view.year), (1, 7, 2013));
    }

    #[test]
    fn year_boundary_rollover() {
        let view = project(&at(2013, 12, 31, 23), 1);
        assert_eq!((view.day, view.month, view.year), (1, 1, 2014));
    }

    #[test]
    fn leap_february_rollover() {
        let view = project(&at(2024, 2, 28, 23), 1);
        assert_eq!((view.day, view.month), (29, 2));
        let view = project(&at(2024, 2, 29, 23), 1);
        assert_eq!((view.day, view.month), (1, 3));
    }
}
