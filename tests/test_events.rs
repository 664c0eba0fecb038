use chrono::{Datelike, NaiveDate, Weekday};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rat_calendar::calendar::{CalendarConfig, CalendarState, SelectionMode};
use rat_calendar::event::{CalOutcome, HandleEvent, MouseOnly, Outcome, Regular};
use rat_calendar::reloc::RelocatableState;
use ratatui::layout::Rect;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("date")
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Lays out the day areas the way a 3 column per day renderer would.
fn fake_render(cal: &mut CalendarState) {
    cal.area = Rect::new(0, 0, 21, 8);
    cal.area_days = Default::default();
    for cell in cal.cells().to_vec() {
        cal.area_days[cell.date.day0() as usize] = Rect::new(cell.column * 3, cell.row, 2, 1);
    }
}

fn calendar() -> CalendarState {
    let mut cal = CalendarState::from_config(
        &CalendarConfig::new()
            .first_day_of_week(Weekday::Mon)
            .bounds(d(2024, 1, 1), d(2024, 12, 31))
            .anchor_date(d(2024, 2, 10))
            .first_data_row(2)
            .selection_mode(SelectionMode::SingleTapSelect),
    )
    .expect("config");
    fake_render(&mut cal);
    cal
}

#[test]
fn test_keys_need_focus() {
    let mut cal = calendar();

    let r = cal.handle(&key(KeyCode::PageDown, KeyModifiers::NONE), Regular);
    assert_eq!(r, CalOutcome::Continue);
    assert_eq!(cal.anchor_date(), d(2024, 2, 10));

    cal.focus.set(true);
    let r = cal.handle(&key(KeyCode::PageDown, KeyModifiers::NONE), Regular);
    assert_eq!(r, CalOutcome::Changed);
    assert_eq!(cal.anchor_date(), d(2024, 3, 10));

    let r = cal.handle(&key(KeyCode::Left, KeyModifiers::CONTROL), Regular);
    assert_eq!(r, CalOutcome::Changed);
    let r = cal.handle(&key(KeyCode::PageUp, KeyModifiers::NONE), Regular);
    assert_eq!(r, CalOutcome::Changed);
    assert_eq!(cal.anchor_date(), d(2024, 1, 10));

    // 2023-12-10 would be before min_date
    let r = cal.handle(&key(KeyCode::PageUp, KeyModifiers::NONE), Regular);
    assert_eq!(r, CalOutcome::Unchanged);
    assert_eq!(cal.anchor_date(), d(2024, 1, 10));

    let r = cal.handle(&key(KeyCode::Right, KeyModifiers::CONTROL), Regular);
    assert_eq!(r, CalOutcome::Changed);
    assert_eq!(cal.anchor_date(), d(2024, 2, 10));
}

#[test]
fn test_click_day() {
    let mut cal = calendar();

    // Feb 1 2024 is a thursday: column 3, first data row 2.
    let r = cal.handle(&mouse(MouseEventKind::Down(MouseButton::Left), 9, 2), MouseOnly);
    assert_eq!(r, CalOutcome::Selected);
    assert_eq!(cal.selected_dates(), &[d(2024, 2, 1)]);

    // same day again deselects
    let r = cal.handle(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 2), Regular);
    assert_eq!(r, CalOutcome::Selected);
    assert!(cal.selected_dates().is_empty());

    // the blank before the first
    let r = cal.handle(&mouse(MouseEventKind::Down(MouseButton::Left), 0, 2), Regular);
    assert_eq!(r, CalOutcome::Continue);
}

#[test]
fn test_click_ignored() {
    let mut cal = calendar();
    cal.set_selection_mode(SelectionMode::Disabled);

    let r = cal.handle(&mouse(MouseEventKind::Down(MouseButton::Left), 9, 2), Regular);
    assert_eq!(r, CalOutcome::Unchanged);
    assert!(cal.selected_dates().is_empty());
}

#[test]
fn test_scroll() {
    let mut cal = calendar();

    let r = cal.handle(&mouse(MouseEventKind::ScrollDown, 5, 5), Regular);
    assert_eq!(r, CalOutcome::Changed);
    assert_eq!(cal.anchor_date(), d(2024, 3, 10));

    let r = cal.handle(&mouse(MouseEventKind::ScrollUp, 5, 5), Regular);
    assert_eq!(r, CalOutcome::Changed);
    assert_eq!(cal.anchor_date(), d(2024, 2, 10));

    let r = cal.handle(&mouse(MouseEventKind::ScrollUp, 50, 50), Regular);
    assert_eq!(r, CalOutcome::Continue);
}

#[test]
fn test_relocate() {
    let mut cal = calendar();
    cal.relocate((5, 1), Rect::new(0, 0, 100, 100));
    assert_eq!(cal.area, Rect::new(5, 1, 21, 8));

    let r = cal.handle(&mouse(MouseEventKind::Down(MouseButton::Left), 14, 3), Regular);
    assert_eq!(r, CalOutcome::Selected);
    assert_eq!(cal.selected_dates(), &[d(2024, 2, 1)]);
}

#[test]
fn test_outcome() {
    assert_eq!(Outcome::from(CalOutcome::Selected), Outcome::Changed);
    assert_eq!(CalOutcome::from(Outcome::Unchanged), CalOutcome::Unchanged);
    assert_eq!(CalOutcome::from(true), CalOutcome::Changed);
    assert_eq!(CalOutcome::from(false), CalOutcome::Unchanged);
}
