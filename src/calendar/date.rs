//!
//! Calendar day helpers.
//!
//! All dates in this crate are plain calendar days without
//! time of day or time zone.
//!

use crate::CalendarError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};

/// Strips everything but the calendar day.
///
/// Use this before handing timestamps to the calendar, two
/// timestamps of the same day must compare equal.
pub trait ToCalendarDate {
    fn to_calendar_date(&self) -> NaiveDate;
}

impl ToCalendarDate for NaiveDate {
    #[inline]
    fn to_calendar_date(&self) -> NaiveDate {
        *self
    }
}

impl ToCalendarDate for NaiveDateTime {
    #[inline]
    fn to_calendar_date(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> ToCalendarDate for DateTime<Tz> {
    #[inline]
    fn to_calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// Validated constructor.
pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::InvalidDate { year, month, day })
}

/// Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the month. Returns 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// First day of the month of the given date.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month of the given date.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(days_in_month(date.year(), date.month()))
        .unwrap_or(date)
}

/// Both dates lie in the same month of the same year.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
