//!
//! Month calendar engine.
//!
//! Computes the day grid for one month, keeps track of the
//! selected dates and moves between months inside fixed bounds.
//!
//! Drawing is left to the host. [CalendarState] reports what
//! changed via the [CalendarView] callbacks, and the host reports
//! taps and navigation back.
//!

use chrono::NaiveDate;

#[allow(clippy::module_inception)]
mod calendar;
mod cells;
mod config;
pub mod date;
pub(crate) mod event;
mod month;
mod navigation;
mod tap_selection;
mod weekday;

pub use calendar::*;
pub use cells::*;
pub use config::*;
pub use month::*;
pub use navigation::*;
pub use tap_selection::*;
pub use weekday::*;

/// Selection model for a calendar.
pub trait CalendarSelection {
    /// Number of selected days.
    fn count(&self) -> usize;

    /// Is the given day selected.
    fn is_selected(&self, date: NaiveDate) -> bool;

    /// Most recently selected day.
    fn lead_selection(&self) -> Option<NaiveDate>;
}
