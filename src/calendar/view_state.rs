use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;

/// Years chrono can represent. Every month of these years has a first day.
pub fn year_range() -> RangeInclusive<i32> {
    NaiveDate::MIN.year()..=NaiveDate::MAX.year()
}

/// The month currently on screen. `month` is zero-based (0 = January).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub year: i32,
    pub month: u32,
}

impl ViewState {
    /// Builds a normalized view state. Months outside 0..=11 roll into the
    /// year. Only shifts past chrono's own date range saturate.
    pub fn new(year: i32, month: i64) -> Self {
        let years = year_range();
        let total = year as i64 * 12 + month;
        let min_total = *years.start() as i64 * 12;
        let max_total = *years.end() as i64 * 12 + 11;
        let total = total.clamp(min_total, max_total);
        ViewState {
            year: total.div_euclid(12) as i32,
            month: total.rem_euclid(12) as u32,
        }
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        ViewState::new(date.year(), date.month0() as i64)
    }

    /// Returns the view shifted by `delta` whole months.
    pub fn shifted(self, delta: i32) -> Self {
        ViewState::new(self.year, self.month as i64 + delta as i64)
    }

    /// One-based month number, as used in dates and holiday keys.
    pub fn month_number(&self) -> u32 {
        self.month + 1
    }

    pub fn first_of_month(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month_number(), 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_new_keeps_valid_month() {
        let v = ViewState::new(2024, 2);
        assert_eq!(v, ViewState { year: 2024, month: 2 });
    }

    #[test]
    fn test_new_normalizes_overflow() {
        assert_eq!(ViewState::new(2024, 12), ViewState { year: 2025, month: 0 });
        assert_eq!(ViewState::new(2024, 25), ViewState { year: 2026, month: 1 });
    }

    #[test]
    fn test_new_normalizes_underflow() {
        assert_eq!(ViewState::new(2024, -1), ViewState { year: 2023, month: 11 });
        assert_eq!(ViewState::new(2024, -13), ViewState { year: 2022, month: 11 });
    }

    #[test]
    fn test_shift_forward_twelve_is_next_year() {
        for month in 0..12 {
            let v = ViewState::new(2024, month);
            assert_eq!(v.shifted(12), ViewState::new(2025, month));
        }
    }

    #[test]
    fn test_shift_back_from_january() {
        let v = ViewState::new(2024, 0);
        assert_eq!(v.shifted(-1), ViewState { year: 2023, month: 11 });
    }

    #[test]
    fn test_shift_forward_from_december() {
        let v = ViewState::new(2024, 11);
        assert_eq!(v.shifted(1), ViewState { year: 2025, month: 0 });
    }

    #[test]
    fn test_shift_crosses_year_9999() {
        let v = ViewState::new(9999, 3);
        assert_eq!(v.shifted(12), ViewState { year: 10000, month: 3 });
        assert_eq!(v.shifted(12).first_of_month(), d(10000, 4, 1));
        assert_eq!(ViewState::new(9999, 11).shifted(1), ViewState { year: 10000, month: 0 });
    }

    #[test]
    fn test_shift_crosses_year_zero() {
        let v = ViewState::new(1, 0);
        assert_eq!(v.shifted(-1), ViewState { year: 0, month: 11 });
        assert_eq!(v.shifted(-13), ViewState { year: -1, month: 11 });
        assert_eq!(v.shifted(-1).first_of_month(), d(0, 12, 1));
    }

    #[test]
    fn test_shift_saturates_only_at_chrono_limits() {
        let years = year_range();
        let last = ViewState::new(*years.end(), 11);
        assert_eq!(last.shifted(1), last);
        let first = ViewState::new(*years.start(), 0);
        assert_eq!(first.shifted(i32::MIN), first);
        assert_eq!(first.first_of_month(), NaiveDate::MIN);
    }

    #[test]
    fn test_from_date_uses_zero_based_month() {
        let v = ViewState::from_date(d(2024, 3, 15));
        assert_eq!(v, ViewState { year: 2024, month: 2 });
        assert_eq!(v.month_number(), 3);
    }

    #[test]
    fn test_first_of_month() {
        assert_eq!(ViewState::new(2024, 1).first_of_month(), d(2024, 2, 1));
    }

    #[test]
    fn test_contains() {
        let v = ViewState::new(2024, 0);
        assert!(v.contains(d(2024, 1, 31)));
        assert!(!v.contains(d(2024, 2, 1)));
        assert!(!v.contains(d(2023, 1, 1)));
    }
}
