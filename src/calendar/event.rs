use rat_event::{ConsumedEvent, Outcome};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CalOutcome {
    /// The event was not meant for the calendar.
    Continue,
    /// The event was recognized but didn't change anything.
    /// A tap that was ignored, or navigation against a bound.
    Unchanged,
    /// The displayed month changed.
    Changed,
    /// The selection changed.
    Selected,
}

impl ConsumedEvent for CalOutcome {
    fn is_consumed(&self) -> bool {
        *self != CalOutcome::Continue
    }
}

impl From<bool> for CalOutcome {
    fn from(value: bool) -> Self {
        if value {
            CalOutcome::Changed
        } else {
            CalOutcome::Unchanged
        }
    }
}

impl From<Outcome> for CalOutcome {
    fn from(value: Outcome) -> Self {
        match value {
            Outcome::Continue => CalOutcome::Continue,
            Outcome::Unchanged => CalOutcome::Unchanged,
            Outcome::Changed => CalOutcome::Changed,
        }
    }
}

impl From<CalOutcome> for Outcome {
    fn from(value: CalOutcome) -> Self {
        match value {
            CalOutcome::Continue => Outcome::Continue,
            CalOutcome::Unchanged => Outcome::Unchanged,
            CalOutcome::Changed => Outcome::Changed,
            CalOutcome::Selected => Outcome::Changed,
        }
    }
}
