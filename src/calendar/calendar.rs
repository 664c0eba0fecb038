use crate::_private::NonExhaustive;
use crate::calendar::cells::{project, project_cell, CellViewState};
use crate::calendar::config::CalendarConfig;
use crate::calendar::event::CalOutcome;
use crate::calendar::month::{check_first_row, MonthLayout};
use crate::calendar::navigation::{DateBounds, Direction, NavigationController};
use crate::calendar::tap_selection::{reconcile, SelectionChange, SelectionMode, SelectionState};
use crate::calendar::weekday::{WeekdayLabels, WeekdayOrdering};
use crate::calendar::CalendarSelection;
use crate::CalendarError;
use chrono::{Datelike, Local, NaiveDate, Weekday};
use log::{debug, warn};
use rat_event::util::item_at;
use rat_event::{ct_event, flow, HandleEvent, MouseOnly, Regular};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use rat_reloc::{relocate_area, relocate_areas, RelocatableState};
use ratatui::layout::Rect;
use std::fmt::{Debug, Formatter};

/// Receives everything the renderer has to redraw.
///
/// All calls happen synchronously from within the [CalendarState]
/// operation that caused them.
pub trait CalendarView {
    /// Day cells changed.
    ///
    /// After navigation or a configuration change this is the
    /// complete month, after a selection change only the affected
    /// days.
    fn grid_changed(&mut self, cells: &[CellViewState]);

    /// The displayed month changed. The label is the month name.
    fn month_header_changed(&mut self, label: &str);

    /// The weekday header changed. Labels are in column order.
    fn weekdays_changed(&mut self, labels: &[&str; 7]) {
        _ = labels;
    }

    /// A day cell was tapped. Called for every tap, whether it
    /// changed the selection or not.
    fn date_tapped(&mut self, date: NaiveDate) {
        _ = date;
    }
}

/// Calendar engine for one month.
///
/// Holds the configuration, the displayed month, the selection and
/// the derived day layout. The host forwards taps and navigation,
/// the attached [CalendarView] is told what needs redrawing.
///
/// The screen areas are not used for rendering. The renderer fills
/// them in so mouse events can be mapped to days.
pub struct CalendarState {
    /// Total area.
    /// __read+write__ set by the renderer.
    pub area: Rect,
    /// Area for the days of the month.
    /// __read+write__ set by the renderer.
    pub area_days: [Rect; 31],

    first_day: Weekday,
    ordering: WeekdayOrdering,
    labels: WeekdayLabels,
    loc: chrono::Locale,
    first_row: u16,

    bounds: DateBounds,
    mode: SelectionMode,

    navigation: NavigationController,
    selection: SelectionState,

    layout: MonthLayout,
    cells: Vec<CellViewState>,

    view: Option<Box<dyn CalendarView>>,

    /// Focus
    /// __read+write__
    pub focus: FocusFlag,

    pub non_exhaustive: NonExhaustive,
}

impl Debug for CalendarState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarState")
            .field("area", &self.area)
            .field("area_days", &self.area_days)
            .field("first_day", &self.first_day)
            .field("labels", &self.labels)
            .field("loc", &self.loc)
            .field("first_row", &self.first_row)
            .field("bounds", &self.bounds)
            .field("mode", &self.mode)
            .field("navigation", &self.navigation)
            .field("selection", &self.selection)
            .field("layout", &self.layout)
            .field("view", &self.view.as_ref().map(|_| "dyn CalendarView"))
            .field("focus", &self.focus)
            .finish()
    }
}

impl Default for CalendarState {
    fn default() -> Self {
        let bounds = DateBounds::default();
        let anchor = Local::now().date_naive().clamp(bounds.min(), bounds.max());
        Self::assemble(
            Weekday::Sun,
            Default::default(),
            0,
            bounds,
            Default::default(),
            NavigationController::new(anchor),
            Default::default(),
        )
    }
}

impl HasFocus for CalendarState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    #[inline]
    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    #[inline]
    fn area(&self) -> Rect {
        self.area
    }
}

impl RelocatableState for CalendarState {
    fn relocate(&mut self, shift: (i16, i16), clip: Rect) {
        self.area = relocate_area(self.area, shift, clip);
        relocate_areas(&mut self.area_days, shift, clip);
    }
}

impl CalendarState {
    /// Calendar for the current month with default bounds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &str) -> Self {
        let mut z = Self::default();
        z.focus = z.focus.with_name(name);
        z
    }

    /// Validate the configuration and create the calendar.
    pub fn from_config(config: &CalendarConfig) -> Result<Self, CalendarError> {
        let bounds = DateBounds::new(config.min_date, config.max_date)?;
        bounds.check(config.anchor_date)?;
        check_first_row(config.first_data_row)?;
        let selection = SelectionState::with_dates(&config.selected, config.selection_mode)?;

        debug!(
            "calendar {} {:?} {}..={}",
            config.anchor_date, config.selection_mode, bounds.min(), bounds.max()
        );

        Ok(Self::assemble(
            config.first_day_of_week,
            config.locale,
            config.first_data_row,
            bounds,
            config.selection_mode,
            NavigationController::new(config.anchor_date),
            selection,
        ))
    }

    fn assemble(
        first_day: Weekday,
        loc: chrono::Locale,
        first_row: u16,
        bounds: DateBounds,
        mode: SelectionMode,
        navigation: NavigationController,
        selection: SelectionState,
    ) -> Self {
        let layout = MonthLayout::new(navigation.anchor(), first_day, first_row);
        let cells = project(&layout, &selection, &bounds);
        Self {
            area: Default::default(),
            area_days: Default::default(),
            first_day,
            ordering: WeekdayOrdering::new(first_day),
            labels: WeekdayLabels::localized(loc),
            loc,
            first_row,
            bounds,
            mode,
            navigation,
            selection,
            layout,
            cells,
            view: None,
            focus: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> CalendarConfig {
        CalendarConfig {
            first_day_of_week: self.first_day,
            min_date: self.bounds.min(),
            max_date: self.bounds.max(),
            selection_mode: self.mode,
            anchor_date: self.navigation.anchor(),
            selected: self.selection.selected().to_vec(),
            first_data_row: self.first_row,
            locale: self.loc,
        }
    }

    /// Attach the renderer. It gets a full refresh right away.
    pub fn set_view(&mut self, view: impl CalendarView + 'static) {
        self.view = Some(Box::new(view));
        self.refresh();
    }

    /// Detach the renderer.
    pub fn take_view(&mut self) -> Option<Box<dyn CalendarView>> {
        self.view.take()
    }

    /// Send header, weekdays and all day cells to the view.
    pub fn refresh(&mut self) {
        let label = self.month_label();
        let weekdays = self.weekday_labels();
        if let Some(view) = &mut self.view {
            view.month_header_changed(&label);
            view.weekdays_changed(&weekdays.each_ref().map(|v| v.as_str()));
            view.grid_changed(&self.cells);
        }
    }

    /// Recompute the layout for the anchor and refresh.
    fn relayout(&mut self) {
        self.layout = MonthLayout::new(self.navigation.anchor(), self.first_day, self.first_row);
        self.cells = project(&self.layout, &self.selection, &self.bounds);
        self.refresh();
    }

    /// Recompute the cells only, the month didn't change.
    fn reproject(&mut self) {
        self.cells = project(&self.layout, &self.selection, &self.bounds);
        if let Some(view) = &mut self.view {
            view.grid_changed(&self.cells);
        }
    }

    /// Update the cached cells for a selection change and tell
    /// the view about the days that changed.
    fn apply_selection_change(&mut self, change: &SelectionChange) {
        if change.is_empty() {
            return;
        }
        let mut changed = Vec::new();
        for flip in reconcile(change, &self.layout) {
            let cell = project_cell(&flip.placement, &self.selection, &self.bounds);
            if let Some(c) = self.cells.get_mut(flip.placement.date.day0() as usize) {
                *c = cell;
            }
            changed.push(cell);
        }
        if !changed.is_empty() {
            if let Some(view) = &mut self.view {
                view.grid_changed(&changed);
            }
        }
    }

    /// Weekday in the first column.
    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day
    }

    /// Change the first weekday. Relayouts the month.
    pub fn set_first_day_of_week(&mut self, first_day: Weekday) {
        if self.first_day == first_day {
            return;
        }
        debug!("first day of week {:?}", first_day);
        self.first_day = first_day;
        self.ordering = WeekdayOrdering::new(first_day);
        self.relayout();
    }

    /// Weekday to column mapping.
    pub fn ordering(&self) -> &WeekdayOrdering {
        &self.ordering
    }

    /// Locale for month and weekday names.
    pub fn locale(&self) -> chrono::Locale {
        self.loc
    }

    /// Set the locale. This replaces the weekday labels with the
    /// names from the locale.
    pub fn set_locale(&mut self, loc: chrono::Locale) {
        debug!("locale {:?}", loc);
        self.loc = loc;
        self.labels = WeekdayLabels::localized(loc);
        self.refresh();
    }

    /// Replace the weekday label table.
    pub fn set_weekday_label_table(&mut self, labels: WeekdayLabels) {
        debug!("weekday labels {:?}", labels);
        self.labels = labels;
        self.refresh();
    }

    /// Weekday header in column order.
    pub fn weekday_labels(&self) -> [String; 7] {
        self.ordering.labels(&self.labels).map(String::from)
    }

    /// Name of the displayed month.
    pub fn month_label(&self) -> String {
        self.navigation
            .anchor()
            .format_localized("%B", self.loc)
            .to_string()
    }

    /// Row of the first week.
    pub fn first_data_row(&self) -> u16 {
        self.first_row
    }

    /// Move the days down to leave room for header rows.
    ///
    /// Fails if the week rows wouldn't fit below `row`.
    pub fn set_first_data_row(&mut self, row: u16) -> Result<(), CalendarError> {
        check_first_row(row)?;
        if self.first_row != row {
            debug!("first data row {}", row);
            self.first_row = row;
            self.relayout();
        }
        Ok(())
    }

    pub fn bounds(&self) -> DateBounds {
        self.bounds
    }

    /// Change the bounds.
    ///
    /// The anchor must stay inside, otherwise nothing changes.
    pub fn set_bounds(&mut self, min: NaiveDate, max: NaiveDate) -> Result<(), CalendarError> {
        let bounds = DateBounds::new(min, max)?;
        bounds.check(self.navigation.anchor())?;
        if self.bounds != bounds {
            debug!("bounds {}..={}", min, max);
            self.bounds = bounds;
            self.reproject();
        }
        Ok(())
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.mode
    }

    /// Change the selection mode.
    ///
    /// Switching to single selection keeps only the most recently
    /// selected date. The returned change lists the dropped dates.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) -> SelectionChange {
        debug!("selection mode {:?}", mode);
        self.mode = mode;
        let change = self.selection.enforce_mode(mode);
        if !change.is_empty() {
            warn!("selection mode {:?} dropped {} dates", mode, change.len());
        }
        self.apply_selection_change(&change);
        change
    }

    /// Anchor date.
    pub fn anchor_date(&self) -> NaiveDate {
        self.navigation.anchor()
    }

    /// Current day layout.
    pub fn layout(&self) -> &MonthLayout {
        &self.layout
    }

    /// Current view state of all days.
    pub fn cells(&self) -> &[CellViewState] {
        &self.cells
    }

    /// Is one step in this direction allowed.
    pub fn can_advance(&self, direction: Direction) -> bool {
        self.navigation.can_advance(direction, &self.bounds)
    }

    /// Move one month.
    ///
    /// On success the layout is recomputed and the view gets
    /// the new header and all days. A rejected move changes nothing.
    pub fn advance(&mut self, direction: Direction) -> bool {
        if self.navigation.advance(direction, &self.bounds) {
            self.relayout();
            true
        } else {
            false
        }
    }

    /// Show the previous month.
    pub fn prev_month(&mut self) -> CalOutcome {
        self.advance(Direction::Backward).into()
    }

    /// Show the next month.
    pub fn next_month(&mut self) -> CalOutcome {
        self.advance(Direction::Forward).into()
    }

    /// Show the month of the given date.
    pub fn move_to(&mut self, date: NaiveDate) -> Result<CalOutcome, CalendarError> {
        if self.navigation.move_to(date, &self.bounds)? {
            self.relayout();
            Ok(CalOutcome::Changed)
        } else {
            Ok(CalOutcome::Unchanged)
        }
    }

    /// Show the current month.
    pub fn move_to_today(&mut self) -> CalOutcome {
        let today = Local::now().date_naive();
        match self.move_to(today) {
            Ok(r) => r,
            Err(e) => {
                debug!("move_to_today {}", e);
                CalOutcome::Unchanged
            }
        }
    }

    /// Selected dates in insertion order.
    pub fn selected_dates(&self) -> &[NaiveDate] {
        self.selection.selected()
    }

    /// Selection state.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selection.is_selected(date)
    }

    /// Most recently selected date.
    pub fn lead_selection(&self) -> Option<NaiveDate> {
        self.selection.lead_selection()
    }

    /// A day cell was tapped.
    pub fn tap(&mut self, date: NaiveDate) -> SelectionChange {
        if let Some(view) = &mut self.view {
            view.date_tapped(date);
        }
        let change = self.selection.on_tap(date, self.mode, &self.bounds);
        self.apply_selection_change(&change);
        change
    }

    /// Tap the n-th day of the displayed month, 0 based.
    pub fn tap_day(&mut self, n: usize) -> CalOutcome {
        let Some(date) = self.layout.day(n).map(|v| v.date) else {
            return CalOutcome::Continue;
        };
        if self.tap(date).is_empty() {
            CalOutcome::Unchanged
        } else {
            CalOutcome::Selected
        }
    }

    /// Select a date from the host side.
    pub fn select_date(&mut self, date: NaiveDate) -> SelectionChange {
        let change = self.selection.select(date, self.mode);
        self.apply_selection_change(&change);
        change
    }

    /// Deselect a date from the host side.
    pub fn deselect_date(&mut self, date: NaiveDate) -> SelectionChange {
        let change = self.selection.deselect(date);
        self.apply_selection_change(&change);
        change
    }

    /// Replace the selection from the host side.
    pub fn set_selection(&mut self, dates: &[NaiveDate]) -> Result<SelectionChange, CalendarError> {
        let change = self.selection.set_selection(dates, self.mode)?;
        self.apply_selection_change(&change);
        Ok(change)
    }

    /// Remove all selected dates.
    pub fn clear_selection(&mut self) -> SelectionChange {
        let change = self.selection.clear();
        self.apply_selection_change(&change);
        change
    }
}

impl HandleEvent<crossterm::event::Event, Regular, CalOutcome> for CalendarState {
    fn handle(&mut self, event: &crossterm::event::Event, _qualifier: Regular) -> CalOutcome {
        if self.is_focused() {
            flow!(match event {
                ct_event!(keycode press PageUp) => self.prev_month(),
                ct_event!(keycode press PageDown) => self.next_month(),
                ct_event!(keycode press CONTROL-Left) => self.prev_month(),
                ct_event!(keycode press CONTROL-Right) => self.next_month(),
                ct_event!(keycode press CONTROL-Home) => self.move_to_today(),
                _ => CalOutcome::Continue,
            });
        }

        self.handle(event, MouseOnly)
    }
}

impl HandleEvent<crossterm::event::Event, MouseOnly, CalOutcome> for CalendarState {
    fn handle(&mut self, event: &crossterm::event::Event, _qualifier: MouseOnly) -> CalOutcome {
        match event {
            ct_event!(mouse down Left for x, y) => {
                if let Some(n) = item_at(&self.area_days, *x, *y) {
                    self.tap_day(n)
                } else {
                    CalOutcome::Continue
                }
            }
            ct_event!(scroll up for x, y) if self.area.contains((*x, *y).into()) => {
                self.prev_month()
            }
            ct_event!(scroll down for x, y) if self.area.contains((*x, *y).into()) => {
                self.next_month()
            }
            _ => CalOutcome::Continue,
        }
    }
}
