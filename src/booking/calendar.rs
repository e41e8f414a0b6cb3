//! Calendar-day selection rules
//!
//! Pure predicates deciding which days the date pickers gray out. The
//! validation rules accept exactly the date pairs these predicates allow,
//! so a draft built through the pickers never fails on its dates.

use chrono::NaiveDate;

/// True when a candidate check-in day is not selectable. Days before the
/// current calendar day are off limits.
pub fn check_in_disabled(today: NaiveDate, candidate: NaiveDate) -> bool {
    candidate < today
}

/// True when a candidate check-out day is not selectable. Past days are off
/// limits, and once a check-in day is chosen the check-out must fall strictly
/// after it. Without a chosen check-in only the past-day rule applies.
pub fn check_out_disabled(
    today: NaiveDate,
    check_in: Option<NaiveDate>,
    candidate: NaiveDate,
) -> bool {
    if candidate < today {
        return true;
    }
    match check_in {
        Some(check_in) => candidate <= check_in,
        None => false,
    }
}

/// Exact whole-day difference between two calendar dates
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_check_in_disabled_before_today() {
        let today = day(2025, 3, 10);
        assert!(check_in_disabled(today, day(2025, 3, 9)));
        assert!(!check_in_disabled(today, today));
        assert!(!check_in_disabled(today, day(2025, 3, 11)));
    }

    #[test]
    fn test_check_out_disabled_without_check_in() {
        let today = day(2025, 3, 10);
        assert!(check_out_disabled(today, None, day(2025, 3, 9)));
        assert!(!check_out_disabled(today, None, today));
        assert!(!check_out_disabled(today, None, day(2025, 3, 11)));
    }

    #[test]
    fn test_check_out_disabled_on_or_before_check_in() {
        let today = day(2025, 3, 10);
        let check_in = Some(day(2025, 3, 12));
        assert!(check_out_disabled(today, check_in, day(2025, 3, 11)));
        assert!(check_out_disabled(today, check_in, day(2025, 3, 12)));
        assert!(!check_out_disabled(today, check_in, day(2025, 3, 13)));
    }

    #[test]
    fn test_nights_between_whole_days() {
        assert_eq!(nights_between(day(2025, 3, 10), day(2025, 3, 13)), 3);
        assert_eq!(nights_between(day(2025, 3, 10), day(2025, 3, 11)), 1);
        assert_eq!(nights_between(day(2025, 3, 10), day(2025, 3, 10)), 0);
        assert_eq!(nights_between(day(2025, 3, 13), day(2025, 3, 10)), -3);
    }

    #[test]
    fn test_nights_between_crosses_month_and_year() {
        assert_eq!(nights_between(day(2024, 12, 31), day(2025, 1, 1)), 1);
        assert_eq!(nights_between(day(2024, 2, 28), day(2024, 3, 1)), 2);
        assert_eq!(nights_between(day(2025, 2, 28), day(2025, 3, 1)), 1);
    }
}
