pub mod grid;
pub mod holidays;
pub mod view_state;

pub use grid::{GridCell, GridModel, render};
pub use holidays::HolidayTable;
pub use view_state::ViewState;

use chrono::{Local, NaiveDate};

/// Source of "today". Sampled on every render.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A fixed date acts as a clock that never moves.
impl Clock for NaiveDate {
    fn today(&self) -> NaiveDate {
        *self
    }
}

/// Asks the user for free-form event text. `None` means the prompt was
/// dismissed.
pub trait EventPrompt {
    fn prompt(&mut self, message: &str) -> Option<String>;
}

impl<F> EventPrompt for F
where
    F: FnMut(&str) -> Option<String>,
{
    fn prompt(&mut self, message: &str) -> Option<String> {
        self(message)
    }
}

/// A month calendar: the displayed month, the holiday table and the grid
/// currently on screen.
///
/// Events entered through [`CalendarView::on_cell_activate`] live in the
/// current grid only. Any navigation rebuilds the grid and drops them.
pub struct CalendarView<C: Clock = SystemClock> {
    view: ViewState,
    holidays: HolidayTable,
    clock: C,
    grid: GridModel,
}

impl<C: Clock> CalendarView<C> {
    pub fn new(holidays: HolidayTable, clock: C) -> Self {
        let today = clock.today();
        let view = ViewState::from_date(today);
        let grid = render(view, &holidays, today);
        CalendarView {
            view,
            holidays,
            clock,
            grid,
        }
    }

    pub fn view_state(&self) -> ViewState {
        self.view
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    /// Moves the view by whole months and re-renders.
    pub fn navigate(&mut self, delta_months: i32) -> &GridModel {
        self.view = self.view.shifted(delta_months);
        log::debug!("navigate {delta_months:+} -> {}", self.view.first_of_month());
        self.rerender()
    }

    /// Returns the view to the month containing today and re-renders.
    pub fn go_to_today(&mut self) -> &GridModel {
        self.view = ViewState::from_date(self.clock.today());
        self.rerender()
    }

    /// Prompts for event text for `day`. Non-empty input is attached to the
    /// cell. Returns true when the cell was annotated.
    pub fn on_cell_activate<P: EventPrompt + ?Sized>(&mut self, day: u32, prompt: &mut P) -> bool {
        let message = self.prompt_message(day);
        let Some(cell) = self.grid.day_mut(day) else {
            return false;
        };
        match prompt.prompt(&message) {
            Some(text) if !text.is_empty() => {
                cell.user_event = Some(text);
                true
            }
            _ => false,
        }
    }

    /// Text shown when asking for an event on `day` of the current month.
    pub fn prompt_message(&self, day: u32) -> String {
        format!(
            "Add/View event for {}-{}-{}:",
            day,
            self.view.month_number(),
            self.view.year
        )
    }

    fn rerender(&mut self) -> &GridModel {
        self.grid = render(self.view, &self.holidays, self.clock.today());
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn view_at(today: NaiveDate) -> CalendarView<NaiveDate> {
        CalendarView::new(HolidayTable::builtin(), today)
    }

    /// Clock whose date can be moved between renders.
    struct SteppingClock(Cell<NaiveDate>);

    impl Clock for SteppingClock {
        fn today(&self) -> NaiveDate {
            self.0.get()
        }
    }

    #[test]
    fn test_starts_on_current_month() {
        let cal = view_at(d(2024, 3, 15));
        assert_eq!(cal.view_state(), ViewState { year: 2024, month: 2 });
        assert_eq!(cal.grid().today().unwrap().day, 15);
    }

    #[test]
    fn test_navigate_twelve_forward() {
        let mut cal = view_at(d(2024, 5, 1));
        cal.navigate(12);
        assert_eq!(cal.view_state(), ViewState { year: 2025, month: 4 });
        assert_eq!(cal.grid().label, "May 2025");
    }

    #[test]
    fn test_navigate_back_from_january() {
        let mut cal = view_at(d(2024, 1, 10));
        let grid = cal.navigate(-1);
        assert_eq!(grid.view, ViewState { year: 2023, month: 11 });
        assert!(grid.today().is_none());
    }

    #[test]
    fn test_step_by_step_navigation_rolls_year() {
        let mut cal = view_at(d(2024, 11, 10));
        cal.navigate(1);
        cal.navigate(1);
        assert_eq!(cal.view_state(), ViewState { year: 2025, month: 0 });
        cal.navigate(-1);
        assert_eq!(cal.view_state(), ViewState { year: 2024, month: 11 });
    }

    #[test]
    fn test_go_to_today_after_navigating_away() {
        let today = d(2024, 3, 15);
        let mut cal = view_at(today);
        cal.navigate(-7);
        cal.navigate(30);
        let grid = cal.go_to_today();
        let cell = grid.today().unwrap();
        assert_eq!(cell.day, 15);
        assert!(cell.is_today);
        assert_eq!(cal.view_state(), ViewState::from_date(today));
    }

    #[test]
    fn test_today_sampled_at_each_render() {
        let clock = SteppingClock(Cell::new(d(2024, 3, 31)));
        let mut cal = CalendarView::new(HolidayTable::builtin(), clock);
        assert_eq!(cal.grid().today().unwrap().day, 31);

        cal.clock.0.set(d(2024, 4, 1));
        cal.navigate(1);
        assert_eq!(cal.grid().today().unwrap().day, 1);

        cal.clock.0.set(d(2024, 6, 2));
        cal.go_to_today();
        assert_eq!(cal.view_state(), ViewState { year: 2024, month: 5 });
        assert_eq!(cal.grid().today().unwrap().day, 2);
    }

    #[test]
    fn test_activate_records_event() {
        let mut cal = view_at(d(2024, 3, 15));
        let mut seen = String::new();
        let mut prompt = |msg: &str| {
            seen = msg.to_string();
            Some("Team offsite".to_string())
        };
        assert!(cal.on_cell_activate(20, &mut prompt));
        assert_eq!(seen, "Add/View event for 20-3-2024:");
        let cell = cal.grid().day(20).unwrap();
        assert!(cell.has_event());
        assert_eq!(cell.title(), Some("Team offsite"));
    }

    #[test]
    fn test_activate_event_overrides_holiday_title() {
        let mut cal = view_at(d(2024, 1, 2));
        let mut prompt = |_: &str| Some("Parade duty".to_string());
        cal.on_cell_activate(26, &mut prompt);
        let cell = cal.grid().day(26).unwrap();
        assert!(cell.is_holiday);
        assert_eq!(cell.holiday_label.as_deref(), Some("Republic Day"));
        assert_eq!(cell.title(), Some("Parade duty"));
    }

    #[test]
    fn test_activate_empty_or_cancelled_is_no_change() {
        let mut cal = view_at(d(2024, 3, 15));
        let before = cal.grid().clone();
        let mut empty = |_: &str| Some(String::new());
        assert!(!cal.on_cell_activate(5, &mut empty));
        let mut cancel = |_: &str| -> Option<String> { None };
        assert!(!cal.on_cell_activate(5, &mut cancel));
        assert_eq!(cal.grid(), &before);
    }

    #[test]
    fn test_activate_out_of_range_day_does_not_prompt() {
        let mut cal = view_at(d(2024, 2, 1));
        let mut called = false;
        let mut prompt = |_: &str| {
            called = true;
            Some("x".to_string())
        };
        assert!(!cal.on_cell_activate(30, &mut prompt));
        assert!(!cal.on_cell_activate(0, &mut prompt));
        assert!(!called);
    }

    #[test]
    fn test_events_dropped_on_rerender() {
        let mut cal = view_at(d(2024, 3, 15));
        let mut prompt = |_: &str| Some("Dentist".to_string());
        cal.on_cell_activate(18, &mut prompt);
        cal.navigate(1);
        cal.navigate(-1);
        assert!(!cal.grid().day(18).unwrap().has_event());

        cal.on_cell_activate(18, &mut prompt);
        cal.go_to_today();
        assert!(!cal.grid().day(18).unwrap().has_event());
    }

    #[test]
    fn test_second_activation_replaces_event() {
        let mut cal = view_at(d(2024, 3, 15));
        cal.on_cell_activate(9, &mut |_: &str| Some("first".to_string()));
        cal.on_cell_activate(9, &mut |_: &str| Some("second".to_string()));
        assert_eq!(cal.grid().day(9).unwrap().title(), Some("second"));
    }
}
