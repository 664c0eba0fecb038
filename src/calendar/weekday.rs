use chrono::{Days, NaiveDate, Weekday};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// Column of a weekday in a grid that starts with `first_day`.
///
/// This is the only place where the week is rotated. Header and
/// day cells both go through here.
pub fn column_index_of(weekday: Weekday, first_day: Weekday) -> usize {
    let shift = weekday.num_days_from_sunday() as i32 - first_day.num_days_from_sunday() as i32;
    if shift >= 0 {
        shift as usize
    } else {
        (7 + shift) as usize
    }
}

/// Names for the weekday header.
///
/// The table is keyed by weekday, the order in the header comes
/// from [WeekdayOrdering]. Defaults to english short names.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeekdayLabels {
    /// Monday first.
    labels: [String; 7],
}

impl Default for WeekdayLabels {
    fn default() -> Self {
        Self::new(["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"].map(String::from))
    }
}

impl WeekdayLabels {
    /// Labels starting with Monday.
    pub fn new(labels: [String; 7]) -> Self {
        Self { labels }
    }

    /// Short weekday names from the chrono locale data.
    pub fn localized(loc: chrono::Locale) -> Self {
        let mut day = NaiveDate::default().week(Weekday::Mon).first_day();
        let mut labels: [String; 7] = Default::default();
        for label in &mut labels {
            *label = day.format_localized("%a", loc).to_string();
            day = day + Days::new(1);
        }
        Self { labels }
    }

    /// Label for the weekday.
    pub fn label(&self, weekday: Weekday) -> &str {
        &self.labels[weekday.num_days_from_monday() as usize]
    }

    /// Replace a single label.
    pub fn set_label(&mut self, weekday: Weekday, label: impl Into<String>) {
        self.labels[weekday.num_days_from_monday() as usize] = label.into();
    }
}

/// Weekday to column mapping for a fixed first day of the week.
///
/// Recreate it when the first day changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayOrdering {
    first_day: Weekday,
    /// Column per weekday, Monday first.
    columns: [usize; 7],
    /// Weekday per column.
    header: [Weekday; 7],
}

impl Default for WeekdayOrdering {
    fn default() -> Self {
        Self::new(Weekday::Sun)
    }
}

impl WeekdayOrdering {
    pub fn new(first_day: Weekday) -> Self {
        let mut columns = [0; 7];
        let mut header = [first_day; 7];

        let mut weekday = Weekday::Mon;
        for _ in 0..7 {
            let column = column_index_of(weekday, first_day);
            columns[weekday.num_days_from_monday() as usize] = column;
            header[column] = weekday;
            weekday = weekday.succ();
        }

        Self {
            first_day,
            columns,
            header,
        }
    }

    /// Weekday in column 0.
    pub fn first_day(&self) -> Weekday {
        self.first_day
    }

    /// Column for the weekday.
    pub fn column_of(&self, weekday: Weekday) -> usize {
        self.columns[weekday.num_days_from_monday() as usize]
    }

    /// Weekday shown in the given column.
    pub fn weekday_at(&self, column: usize) -> Option<Weekday> {
        self.header.get(column).copied()
    }

    /// Weekdays in column order.
    pub fn weekdays(&self) -> [Weekday; 7] {
        self.header
    }

    /// Header labels in column order.
    pub fn labels<'a>(&self, labels: &'a WeekdayLabels) -> [&'a str; 7] {
        self.header.map(|v| labels.label(v))
    }
}
