use crate::CalendarError;
use chrono::{Datelike, Months, NaiveDate};
use log::debug;

/// Inclusive date range of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateBounds {
    min: NaiveDate,
    max: NaiveDate,
}

impl Default for DateBounds {
    /// 1980-01-01 to 2050-01-01
    fn default() -> Self {
        Self {
            min: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap_or(NaiveDate::MIN),
            max: NaiveDate::from_ymd_opt(2050, 1, 1).unwrap_or(NaiveDate::MAX),
        }
    }
}

impl DateBounds {
    pub fn new(min: NaiveDate, max: NaiveDate) -> Result<Self, CalendarError> {
        if min > max {
            return Err(CalendarError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> NaiveDate {
        self.min
    }

    pub fn max(&self) -> NaiveDate {
        self.max
    }

    /// Inside min..=max.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.min && date <= self.max
    }

    /// Is a day cell enabled.
    ///
    /// Only the lower bound is checked. Days after max_date still
    /// show as enabled, but taps on them are ignored.
    pub fn is_enabled(&self, date: NaiveDate) -> bool {
        date >= self.min
    }

    /// Fails if the date is outside the bounds.
    pub fn check(&self, date: NaiveDate) -> Result<(), CalendarError> {
        if self.contains(date) {
            Ok(())
        } else {
            Err(CalendarError::AnchorOutOfBounds {
                anchor: date,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Month navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

/// Owns the anchor date, which determines the displayed month.
///
/// The day of the anchor is kept when moving between months,
/// clamped to the length of the target month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationController {
    anchor: NaiveDate,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(NaiveDate::default())
    }
}

impl NavigationController {
    pub fn new(anchor: NaiveDate) -> Self {
        Self { anchor }
    }

    /// Anchor date.
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Displayed year and month.
    pub fn anchor_month(&self) -> (i32, u32) {
        (self.anchor.year(), self.anchor.month())
    }

    /// Anchor after one step in the direction, if it's representable.
    pub fn target(&self, direction: Direction) -> Option<NaiveDate> {
        match direction {
            Direction::Forward => self.anchor.checked_add_months(Months::new(1)),
            Direction::Backward => self.anchor.checked_sub_months(Months::new(1)),
        }
    }

    /// Would [advance](Self::advance) succeed.
    ///
    /// Moving forward needs the new anchor strictly before max_date,
    /// moving backward needs it strictly after min_date.
    pub fn can_advance(&self, direction: Direction, bounds: &DateBounds) -> bool {
        self.allowed_target(direction, bounds).is_some()
    }

    fn allowed_target(&self, direction: Direction, bounds: &DateBounds) -> Option<NaiveDate> {
        match (direction, self.target(direction)) {
            (Direction::Forward, Some(date)) if date < bounds.max() => Some(date),
            (Direction::Backward, Some(date)) if date > bounds.min() => Some(date),
            _ => None,
        }
    }

    /// Move one month. Returns false and changes nothing if the
    /// move is not allowed.
    pub fn advance(&mut self, direction: Direction, bounds: &DateBounds) -> bool {
        match self.allowed_target(direction, bounds) {
            Some(date) => {
                debug!("navigation {:?} {} -> {}", direction, self.anchor, date);
                self.anchor = date;
                true
            }
            None => {
                debug!("navigation rejected {:?} from {}", direction, self.anchor);
                false
            }
        }
    }

    /// Jump to the date.
    ///
    /// Returns true if the anchor changed.
    pub fn move_to(&mut self, date: NaiveDate, bounds: &DateBounds) -> Result<bool, CalendarError> {
        bounds.check(date)?;
        let old = self.anchor;
        self.anchor = date;
        Ok(old != date)
    }
}
