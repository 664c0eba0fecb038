use crate::calendar::month::{DayPlacement, MonthLayout};
use crate::calendar::navigation::DateBounds;
use crate::calendar::CalendarSelection;
use chrono::NaiveDate;

/// Everything a renderer needs to draw one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellViewState {
    pub date: NaiveDate,
    pub row: u16,
    pub column: u16,
    pub is_selected: bool,
    pub is_enabled: bool,
}

/// View state for a single day.
pub fn project_cell<S>(placement: &DayPlacement, selection: &S, bounds: &DateBounds) -> CellViewState
where
    S: CalendarSelection + ?Sized,
{
    CellViewState {
        date: placement.date,
        row: placement.row,
        column: placement.column,
        is_selected: selection.is_selected(placement.date),
        is_enabled: bounds.is_enabled(placement.date),
    }
}

/// View state for all days of the layout, in day order.
pub fn project<S>(layout: &MonthLayout, selection: &S, bounds: &DateBounds) -> Vec<CellViewState>
where
    S: CalendarSelection + ?Sized,
{
    layout
        .days()
        .iter()
        .map(|v| project_cell(v, selection, bounds))
        .collect()
}
