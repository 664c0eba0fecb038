use crate::calendar::navigation::DateBounds;
use crate::calendar::tap_selection::SelectionMode;
use chrono::{Local, NaiveDate, Weekday};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// Host configuration for a [CalendarState](crate::calendar::CalendarState).
///
/// Validated by [CalendarState::from_config](crate::calendar::CalendarState::from_config).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalendarConfig {
    /// Weekday in the first column.
    pub first_day_of_week: Weekday,
    /// Inclusive lower bound.
    pub min_date: NaiveDate,
    /// Inclusive upper bound.
    pub max_date: NaiveDate,
    /// Tap behaviour.
    pub selection_mode: SelectionMode,
    /// Initially displayed month.
    pub anchor_date: NaiveDate,
    /// Initially selected dates.
    pub selected: Vec<NaiveDate>,
    /// Row of the first week in the grid.
    pub first_data_row: u16,
    /// Locale for month and weekday names.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub locale: chrono::Locale,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        let bounds = DateBounds::default();
        Self {
            first_day_of_week: Weekday::Sun,
            min_date: bounds.min(),
            max_date: bounds.max(),
            selection_mode: Default::default(),
            anchor_date: Local::now()
                .date_naive()
                .clamp(bounds.min(), bounds.max()),
            selected: Default::default(),
            first_data_row: 0,
            locale: Default::default(),
        }
    }
}

impl CalendarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weekday in the first column.
    #[inline]
    pub fn first_day_of_week(mut self, first_day: Weekday) -> Self {
        self.first_day_of_week = first_day;
        self
    }

    /// Date range.
    #[inline]
    pub fn bounds(mut self, min: NaiveDate, max: NaiveDate) -> Self {
        self.min_date = min;
        self.max_date = max;
        self
    }

    #[inline]
    pub fn selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Displayed month.
    #[inline]
    pub fn anchor_date(mut self, date: NaiveDate) -> Self {
        self.anchor_date = date;
        self
    }

    #[inline]
    pub fn selected(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.selected = dates.into_iter().collect();
        self
    }

    /// Leave room for header rows above the days.
    #[inline]
    pub fn first_data_row(mut self, row: u16) -> Self {
        self.first_data_row = row;
        self
    }

    /// Locale for month-names, day-names.
    #[inline]
    pub fn locale(mut self, loc: chrono::Locale) -> Self {
        self.locale = loc;
        self
    }
}
