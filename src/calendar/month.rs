use crate::calendar::date::{days_in_month, first_of_month, last_of_month, same_month, ymd};
use crate::calendar::weekday::column_index_of;
use crate::CalendarError;
use chrono::{Datelike, NaiveDate, Weekday};

/// Header rows of the classic layout: month title and weekday names.
pub const HEADER_ROWS: u16 = 2;

/// Data rows needed for any month with any first day of the week.
pub const MAX_WEEK_ROWS: u16 = 6;

/// Largest first row that leaves room for all week rows.
pub const MAX_FIRST_ROW: u16 = u16::MAX - MAX_WEEK_ROWS;

/// Fails if the week rows starting at `row` don't fit in u16.
pub fn check_first_row(row: u16) -> Result<(), CalendarError> {
    if row > MAX_FIRST_ROW {
        Err(CalendarError::InvalidFirstRow {
            row,
            max: MAX_FIRST_ROW,
        })
    } else {
        Ok(())
    }
}

/// Grid position of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayPlacement {
    pub date: NaiveDate,
    pub row: u16,
    pub column: u16,
}

/// Placement of all days of a month in a 7 column grid.
///
/// Days are stored in order, day `n` is at index `n - 1`. Rows
/// start at `first_row`, which leaves room for any header rows
/// the renderer wants to put above the days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLayout {
    start_date: NaiveDate,
    first_day: Weekday,
    first_row: u16,
    leading_blanks: u16,
    days: Vec<DayPlacement>,
}

impl Default for MonthLayout {
    fn default() -> Self {
        Self::new(NaiveDate::default(), Weekday::Sun, 0)
    }
}

impl MonthLayout {
    /// Layout for the month of the given date. Only year and
    /// month of the date are used.
    ///
    /// `first_row` is limited to [MAX_FIRST_ROW].
    pub fn new(date: NaiveDate, first_day: Weekday, first_row: u16) -> Self {
        let first_row = first_row.min(MAX_FIRST_ROW);
        let start_date = first_of_month(date);
        let len = days_in_month(start_date.year(), start_date.month());

        let leading_blanks = column_index_of(start_date.weekday(), first_day) as u16;

        let mut days = Vec::with_capacity(len as usize);
        let mut row = first_row;
        let mut column = leading_blanks;
        for day in start_date.iter_days().take(len as usize) {
            days.push(DayPlacement { date: day, row, column });

            column += 1;
            if column == 7 {
                column = 0;
                row += 1;
            }
        }

        Self {
            start_date,
            first_day,
            first_row,
            leading_blanks,
            days,
        }
    }

    /// Layout for year/month.
    pub fn for_month(
        year: i32,
        month: u32,
        first_day: Weekday,
        first_row: u16,
    ) -> Result<Self, CalendarError> {
        check_first_row(first_row)?;
        let date = ymd(year, month, 1)?;
        Ok(Self::new(date, first_day, first_row))
    }

    pub fn year(&self) -> i32 {
        self.start_date.year()
    }

    pub fn month(&self) -> u32 {
        self.start_date.month()
    }

    /// First of the month.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last of the month.
    pub fn end_date(&self) -> NaiveDate {
        last_of_month(self.start_date)
    }

    /// Weekday in column 0.
    pub fn first_day(&self) -> Weekday {
        self.first_day
    }

    /// Row of the first week.
    pub fn first_row(&self) -> u16 {
        self.first_row
    }

    /// Empty cells before the first of the month.
    pub fn leading_blanks(&self) -> u16 {
        self.leading_blanks
    }

    /// All days in order.
    pub fn days(&self) -> &[DayPlacement] {
        &self.days
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of rows used by the days.
    pub fn row_count(&self) -> u16 {
        match self.days.last() {
            Some(last) => last.row - self.first_row + 1,
            None => 0,
        }
    }

    /// Is the date part of this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        same_month(self.start_date, date)
    }

    /// Placement of the date, if it's in this month.
    pub fn position_of(&self, date: NaiveDate) -> Option<&DayPlacement> {
        if self.contains(date) {
            self.days.get(date.day0() as usize)
        } else {
            None
        }
    }

    /// Placement of the n-th day, 0 based.
    pub fn day(&self, n: usize) -> Option<&DayPlacement> {
        self.days.get(n)
    }
}
