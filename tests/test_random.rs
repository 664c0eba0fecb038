use chrono::{Days, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rat_calendar::calendar::{
    project, CalendarConfig, CalendarSelection, CalendarState, Direction, SelectionMode,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("date")
}

fn calendar(mode: SelectionMode, first_day: Weekday) -> CalendarState {
    CalendarState::from_config(
        &CalendarConfig::new()
            .first_day_of_week(first_day)
            .bounds(d(2024, 1, 1), d(2024, 12, 31))
            .anchor_date(d(2024, 6, 15))
            .selection_mode(mode),
    )
    .expect("config")
}

/// Some date around the bounds, a few outside.
fn random_date(rng: &mut StdRng) -> NaiveDate {
    d(2023, 12, 1) + Days::new(rng.gen_range(0..430))
}

fn run(mode: SelectionMode, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let first_day = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ][rng.gen_range(0..7)];
    let mut cal = calendar(mode, first_day);

    for _ in 0..500 {
        match rng.gen_range(0..10) {
            0 => {
                cal.advance(Direction::Forward);
            }
            1 => {
                cal.advance(Direction::Backward);
            }
            2..=5 => {
                // tap a visible day
                let n = rng.gen_range(0..cal.layout().len());
                let date = cal.layout().days()[n].date;
                let was_selected = cal.is_selected(date);
                let change = cal.tap(date);
                if was_selected {
                    assert!(!cal.is_selected(date));
                    assert_eq!(change.removed().collect::<Vec<_>>(), vec![date]);
                    assert_eq!(change.added().count(), 0);
                } else if cal.bounds().contains(date) {
                    assert!(cal.is_selected(date));
                    assert_eq!(cal.lead_selection(), Some(date));
                } else {
                    assert!(change.is_empty());
                }
            }
            _ => {
                let date = random_date(&mut rng);
                let before = cal.selected_dates().to_vec();
                let change = cal.tap(date);
                if !cal.bounds().contains(date) {
                    assert!(change.is_empty());
                    assert_eq!(cal.selected_dates(), before.as_slice());
                }
            }
        }

        if mode == SelectionMode::SingleTapSelect {
            assert!(cal.selection().count() <= 1);
        }
        let mut sorted = cal.selected_dates().to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), cal.selected_dates().len());

        assert!(cal.bounds().contains(cal.anchor_date()));
        assert_eq!(
            cal.cells(),
            project(cal.layout(), cal.selection(), &cal.bounds()).as_slice()
        );
    }
}

#[test]
fn test_single() {
    for seed in 0..20 {
        run(SelectionMode::SingleTapSelect, seed);
    }
}

#[test]
fn test_multi() {
    for seed in 100..120 {
        run(SelectionMode::MultiTapSelect, seed);
    }
}

#[test]
fn test_disabled() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut cal = calendar(SelectionMode::Disabled, Weekday::Sun);
    for _ in 0..200 {
        assert!(cal.tap(random_date(&mut rng)).is_empty());
    }
    assert!(cal.selected_dates().is_empty());
}
