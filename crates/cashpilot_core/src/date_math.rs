//! Calendar-month arithmetic helpers for the projection loop.
//!
//! The engine steps one calendar month at a time over horizons of a few
//! hundred periods at most. jiff `Span` arithmetic is correct but heavier
//! than needed here, so these helpers do direct year/month arithmetic with
//! day-of-month clamping and never allocate a `Span`.

use jiff::civil::Date;

/// Fast leap year check.
#[inline]
pub fn is_leap_year(year: i16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Days in a given month without creating a `jiff::civil::Date`.
#[inline]
pub fn days_in_month(year: i16, month: i8) -> i8 {
    const DAYS: [i8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[(month - 1) as usize]
    }
}

/// Add `n` calendar months to a date, clamping the day to the target
/// month's length (Jan 31 + 1 month = Feb 28/29).
#[inline]
pub fn add_months(d: Date, n: i32) -> Date {
    let total = (d.year() as i32) * 12 + (d.month() as i32 - 1) + n;
    let year = total.div_euclid(12) as i16;
    let month = (total.rem_euclid(12) + 1) as i8;
    let day = d.day().min(days_in_month(year, month));
    jiff::civil::date(year, month, day)
}

/// Number of month steps from `start` to `end` inclusive, counting whole
/// calendar months (2026-01-01 → 2026-03-01 = 3).
#[inline]
pub fn months_between_inclusive(start: Date, end: Date) -> i32 {
    let a = (start.year() as i32) * 12 + start.month() as i32;
    let b = (end.year() as i32) * 12 + end.month() as i32;
    b - a + 1
}

/// Whether two dates fall in the same calendar month.
#[inline]
pub fn same_month(a: Date, b: Date) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Human-readable period label ("Jan 2026").
pub fn period_label(d: Date) -> String {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    format!("{} {}", MONTHS[(d.month() - 1) as usize], d.year())
}
