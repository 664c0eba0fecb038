#![doc = include_str!("../readme.md")]
//
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod event {
    //!
    //! Event-handler traits and Keybindings.
    //!
    //! See [rat-event](https://docs.rs/rat-event/latest/rat_event/)
    //!
    pub use rat_event::*;

    pub use crate::calendar::event::CalOutcome;
}

/// Module for focus-handling functionality.
/// See [rat-focus](https://docs.rs/rat-focus)
pub mod focus {
    pub use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus, Navigation};
}

/// Trait for relocatable widgets.
/// See also [rat-reloc](https://docs.rs/rat-reloc/latest/rat_reloc/)
pub mod reloc {
    pub use rat_reloc::{relocate_area, relocate_areas, RelocatableState};
}

pub mod calendar;

/// Configuration errors.
///
/// Taps and navigation never fail, they are either applied or
/// ignored. Only configuring the calendar or replacing the
/// selection wholesale can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// min_date is after max_date.
    InvalidBounds { min: NaiveDate, max: NaiveDate },
    /// The anchor date is not inside the bounds.
    AnchorOutOfBounds {
        anchor: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },
    /// Year/month/day don't form a valid date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// The week rows starting at this row don't fit in u16.
    InvalidFirstRow { row: u16, max: u16 },
    /// Single selection mode with more than one selected date.
    TooManySelected {
        mode: calendar::SelectionMode,
        count: usize,
    },
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CalendarError::InvalidBounds { min, max } => {
                write!(f, "min date {} is after max date {}", min, max)
            }
            CalendarError::AnchorOutOfBounds { anchor, min, max } => {
                write!(f, "anchor date {} is outside {}..={}", anchor, min, max)
            }
            CalendarError::InvalidDate { year, month, day } => {
                write!(f, "invalid date {:04}-{:02}-{:02}", year, month, day)
            }
            CalendarError::InvalidFirstRow { row, max } => {
                write!(f, "first data row {} is beyond {}", row, max)
            }
            CalendarError::TooManySelected { mode, count } => {
                write!(f, "{} dates selected, {:?} allows one", count, mode)
            }
        }
    }
}

impl Error for CalendarError {}

mod _private {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NonExhaustive;
}
