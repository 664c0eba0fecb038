//!
//! Prints a month to stdout and keeps it updated
//! from the cells the calendar reports.
//!

use chrono::{Datelike, Local, Weekday};
use rat_calendar::calendar::{
    CalendarConfig, CalendarState, CalendarView, CellViewState, Direction, SelectionMode,
    HEADER_ROWS,
};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let today = Local::now().date_naive();
    let screen = Rc::new(RefCell::new(Screen::default()));

    let mut cal = CalendarState::from_config(
        &CalendarConfig::new()
            .first_day_of_week(Weekday::Mon)
            .anchor_date(today)
            .first_data_row(HEADER_ROWS)
            .selection_mode(SelectionMode::MultiTapSelect),
    )?;
    cal.set_view(TextView(screen.clone()));
    println!("{}", screen.borrow());

    cal.tap(today);
    if let Some(d) = today.with_day(1) {
        cal.tap(d);
    }
    println!("{}", screen.borrow());

    if cal.advance(Direction::Forward) {
        cal.tap_day(14);
        println!("{}", screen.borrow());
    }

    cal.set_locale(chrono::Locale::de_DE);
    cal.move_to_today();
    println!("{}", screen.borrow());

    Ok(())
}

const WIDTH: usize = 7 * 3;

/// Character buffer with a header line, weekday line and up to
/// six weeks.
#[derive(Debug)]
struct Screen {
    lines: Vec<Vec<char>>,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            lines: vec![vec![' '; WIDTH]; HEADER_ROWS as usize + 6],
        }
    }
}

impl Screen {
    fn put(&mut self, row: usize, col: usize, text: &str) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        for (i, c) in text.chars().enumerate() {
            if let Some(v) = line.get_mut(col + i) {
                *v = c;
            }
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.iter().collect::<String>().trim_end())?;
        }
        Ok(())
    }
}

#[derive(Debug)]
struct TextView(Rc<RefCell<Screen>>);

impl CalendarView for TextView {
    fn grid_changed(&mut self, cells: &[CellViewState]) {
        let mut screen = self.0.borrow_mut();
        // a full grid starts with the first of the month.
        if cells.first().map(|v| v.date.day()) == Some(1) && cells.len() >= 28 {
            for row in HEADER_ROWS as usize..screen.lines.len() {
                screen.lines[row].fill(' ');
            }
        }
        for cell in cells {
            let marker = if !cell.is_enabled {
                "."
            } else if cell.is_selected {
                "*"
            } else {
                " "
            };
            let col = cell.column as usize * 3;
            screen.put(cell.row as usize, col, &format!("{:>2}", cell.date.day()));
            screen.put(cell.row as usize, col + 2, marker);
        }
    }

    fn month_header_changed(&mut self, label: &str) {
        let mut screen = self.0.borrow_mut();
        screen.lines[0].fill(' ');
        let col = WIDTH.saturating_sub(label.chars().count()) / 2;
        screen.put(0, col, label);
    }

    fn weekdays_changed(&mut self, labels: &[&str; 7]) {
        let mut screen = self.0.borrow_mut();
        screen.lines[1].fill(' ');
        for (i, label) in labels.iter().enumerate() {
            let short = label.chars().take(2).collect::<String>();
            screen.put(1, i * 3, &short);
        }
    }
}

fn setup_logging() -> Result<(), anyhow::Error> {
    let log = PathBuf::from("month1.log");
    if log.exists() {
        fs::remove_file(&log)?;
    }
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&log)?)
        .apply()?;
    Ok(())
}
