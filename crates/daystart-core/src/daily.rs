//! Deterministic daily selection.
//!
//! Everything that rotates "once per day" (quotes, gradients, background
//! cache keys) derives from the same day ordinal so the rotation never
//! fragments across consumers.

use chrono::{Datelike, NaiveDate};

/// Zero-based count of days elapsed since January 1 of `date`'s year.
///
/// Stable within a calendar day; changes only at local-midnight boundaries
/// because callers feed it the current wall-clock date.
pub fn day_ordinal(date: NaiveDate) -> u32 {
    date.ordinal0()
}

/// Pick today's element: `list[day_ordinal(date) % list.len()]`.
///
/// Returns `None` for an empty list.
pub fn pick<T>(list: &[T], date: NaiveDate) -> Option<&T> {
    if list.is_empty() {
        return None;
    }
    list.get(day_ordinal(date) as usize % list.len())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ordinal_is_zero_based() {
        assert_eq!(day_ordinal(date(2026, 1, 1)), 0);
        assert_eq!(day_ordinal(date(2026, 1, 2)), 1);
        assert_eq!(day_ordinal(date(2026, 2, 12)), 42);
    }

    #[test]
    fn ordinal_year_end() {
        assert_eq!(day_ordinal(date(2026, 12, 31)), 364);
        // Leap year has one extra day
        assert_eq!(day_ordinal(date(2024, 12, 31)), 365);
    }

    #[test]
    fn equal_day_of_year_means_equal_ordinal() {
        assert_eq!(day_ordinal(date(2025, 3, 14)), day_ordinal(date(2026, 3, 14)));
    }

    #[test]
    fn pick_wraps_modulo() {
        let list = ["a", "b", "c"];
        // Ordinal 0, 1, 2, then back to 0
        assert_eq!(pick(&list, date(2026, 1, 1)), Some(&"a"));
        assert_eq!(pick(&list, date(2026, 1, 2)), Some(&"b"));
        assert_eq!(pick(&list, date(2026, 1, 3)), Some(&"c"));
        assert_eq!(pick(&list, date(2026, 1, 4)), Some(&"a"));
    }

    #[test]
    fn pick_is_stable_for_equal_dates() {
        let list = [1, 2, 3, 4, 5, 6, 7];
        let d = date(2026, 7, 19);
        assert_eq!(pick(&list, d), pick(&list, d));
    }

    #[test]
    fn pick_empty_list_is_none() {
        let list: [u8; 0] = [];
        assert_eq!(pick(&list, date(2026, 1, 1)), None);
    }
}
