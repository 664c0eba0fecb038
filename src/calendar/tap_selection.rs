use crate::calendar::month::{DayPlacement, MonthLayout};
use crate::calendar::navigation::DateBounds;
use crate::calendar::CalendarSelection;
use crate::CalendarError;
use chrono::NaiveDate;
use log::debug;
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// What a tap on a day does.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SelectionMode {
    /// Taps are ignored.
    #[default]
    Disabled,
    /// At most one selected date. Tapping another date moves
    /// the selection there.
    SingleTapSelect,
    /// Taps toggle dates in and out of the selection.
    MultiTapSelect,
}

/// A single change of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateChange {
    Selected(NaiveDate),
    Deselected(NaiveDate),
}

impl DateChange {
    pub fn date(&self) -> NaiveDate {
        match self {
            DateChange::Selected(d) => *d,
            DateChange::Deselected(d) => *d,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, DateChange::Selected(_))
    }
}

/// All changes caused by one operation, in the order they
/// were applied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    changes: Vec<DateChange>,
}

impl SelectionChange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nothing changed.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn changes(&self) -> &[DateChange] {
        &self.changes
    }

    /// Newly selected dates.
    pub fn added(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.changes
            .iter()
            .filter(|v| v.is_selected())
            .map(|v| v.date())
    }

    /// Deselected dates.
    pub fn removed(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.changes
            .iter()
            .filter(|v| !v.is_selected())
            .map(|v| v.date())
    }

    /// Append the changes of a later operation.
    pub fn append(&mut self, mut other: SelectionChange) {
        self.changes.append(&mut other.changes);
    }

    fn push(&mut self, change: DateChange) {
        self.changes.push(change);
    }
}

/// Owner of the selected dates.
///
/// Dates are kept in insertion order without duplicates. All
/// changes return a [SelectionChange] describing exactly what
/// happened, which can be fed to [reconcile] to find the day cells
/// that need a redraw.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected: Vec<NaiveDate>,
}

impl CalendarSelection for SelectionState {
    fn count(&self) -> usize {
        self.selected.len()
    }

    fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected.contains(&date)
    }

    fn lead_selection(&self) -> Option<NaiveDate> {
        self.selected.last().copied()
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial selection.
    ///
    /// Duplicates are dropped. Fails if the mode allows only one
    /// selected date but more are given.
    pub fn with_dates(dates: &[NaiveDate], mode: SelectionMode) -> Result<Self, CalendarError> {
        let mut s = Self::new();
        s.set_selection(dates, mode)?;
        Ok(s)
    }

    /// Selected dates in insertion order.
    pub fn selected(&self) -> &[NaiveDate] {
        &self.selected
    }

    /// Apply a tap on a day.
    ///
    /// * Disabled mode or a date outside the bounds: nothing happens.
    /// * A selected date is deselected.
    /// * Single mode: an existing selection is removed first, then the
    ///   date is selected.
    /// * Multi mode: the date is added.
    pub fn on_tap(
        &mut self,
        date: NaiveDate,
        mode: SelectionMode,
        bounds: &DateBounds,
    ) -> SelectionChange {
        let mut change = SelectionChange::new();

        if mode == SelectionMode::Disabled || !bounds.contains(date) {
            debug!("tap ignored {} {:?}", date, mode);
            return change;
        }

        if let Some(idx) = self.selected.iter().position(|v| *v == date) {
            self.selected.remove(idx);
            change.push(DateChange::Deselected(date));
        } else if mode == SelectionMode::SingleTapSelect {
            for old in self.selected.drain(..) {
                change.push(DateChange::Deselected(old));
            }
            self.selected.push(date);
            change.push(DateChange::Selected(date));
        } else {
            self.selected.push(date);
            change.push(DateChange::Selected(date));
        }

        debug!("tap {} {:?}", date, change);
        change
    }

    /// Select a date from the host side.
    ///
    /// Single mode replaces an existing selection, otherwise the
    /// date is added. No bounds check, the host decides.
    pub fn select(&mut self, date: NaiveDate, mode: SelectionMode) -> SelectionChange {
        let mut change = SelectionChange::new();
        if self.selected.contains(&date) {
            return change;
        }
        if mode == SelectionMode::SingleTapSelect {
            for old in self.selected.drain(..) {
                change.push(DateChange::Deselected(old));
            }
        }
        self.selected.push(date);
        change.push(DateChange::Selected(date));
        change
    }

    /// Deselect a date from the host side.
    pub fn deselect(&mut self, date: NaiveDate) -> SelectionChange {
        let mut change = SelectionChange::new();
        if let Some(idx) = self.selected.iter().position(|v| *v == date) {
            self.selected.remove(idx);
            change.push(DateChange::Deselected(date));
        }
        change
    }

    /// Replace the selection.
    ///
    /// The change contains the removed dates first, then the added ones.
    /// Dates present before and after are not part of the change.
    pub fn set_selection(
        &mut self,
        dates: &[NaiveDate],
        mode: SelectionMode,
    ) -> Result<SelectionChange, CalendarError> {
        let mut new_selected = Vec::with_capacity(dates.len());
        for d in dates {
            if !new_selected.contains(d) {
                new_selected.push(*d);
            }
        }
        if mode == SelectionMode::SingleTapSelect && new_selected.len() > 1 {
            return Err(CalendarError::TooManySelected {
                mode,
                count: new_selected.len(),
            });
        }

        let mut change = SelectionChange::new();
        for old in &self.selected {
            if !new_selected.contains(old) {
                change.push(DateChange::Deselected(*old));
            }
        }
        for new in &new_selected {
            if !self.selected.contains(new) {
                change.push(DateChange::Selected(*new));
            }
        }
        self.selected = new_selected;

        Ok(change)
    }

    /// Remove everything.
    pub fn clear(&mut self) -> SelectionChange {
        let mut change = SelectionChange::new();
        for old in self.selected.drain(..) {
            change.push(DateChange::Deselected(old));
        }
        change
    }

    /// Make the selection valid for the mode.
    ///
    /// For single mode everything but the most recent date is dropped.
    pub fn enforce_mode(&mut self, mode: SelectionMode) -> SelectionChange {
        let mut change = SelectionChange::new();
        if mode == SelectionMode::SingleTapSelect && self.selected.len() > 1 {
            let keep = self.selected.len() - 1;
            for old in self.selected.drain(..keep) {
                change.push(DateChange::Deselected(old));
            }
        }
        change
    }
}

/// A visible day whose selected flag must change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionFlip {
    pub placement: DayPlacement,
    pub selected: bool,
}

/// Find the day cells affected by a selection change.
///
/// Only dates in the month of the layout are visible, everything
/// else is stored but has no visible effect. If a date changes
/// more than once the last change wins.
pub fn reconcile(change: &SelectionChange, layout: &MonthLayout) -> Vec<SelectionFlip> {
    let mut flips: Vec<SelectionFlip> = Vec::new();
    for c in change.changes() {
        let Some(placement) = layout.position_of(c.date()) else {
            continue;
        };
        if let Some(flip) = flips.iter_mut().find(|v| v.placement.date == c.date()) {
            flip.selected = c.is_selected();
        } else {
            flips.push(SelectionFlip {
                placement: *placement,
                selected: c.is_selected(),
            });
        }
    }
    flips
}
