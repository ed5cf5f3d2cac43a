use crate::calendar::holidays::{HolidayTable, SUNDAY_LABEL};
use crate::calendar::view_state::ViewState;
use chrono::{Datelike, NaiveDate};

/// One rendered day of the month.
#[derive(Clone, Debug, PartialEq)]
pub struct DayCell {
    pub day: u32,
    /// 0 = Sunday .. 6 = Saturday.
    pub weekday: u32,
    pub is_today: bool,
    pub is_holiday: bool,
    pub holiday_label: Option<String>,
    pub user_event: Option<String>,
}

impl DayCell {
    pub fn has_event(&self) -> bool {
        self.user_event.is_some()
    }

    /// Hover text for the cell. An entered event replaces the holiday label.
    pub fn title(&self) -> Option<&str> {
        self.user_event.as_deref().or(self.holiday_label.as_deref())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GridCell {
    Blank,
    Day(DayCell),
}

impl GridCell {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            GridCell::Day(cell) => Some(cell),
            GridCell::Blank => None,
        }
    }
}

/// The month grid for one `ViewState`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridModel {
    pub view: ViewState,
    pub label: String,
    pub leading_blanks: u32,
    pub days_in_month: u32,
    pub rows: Vec<Vec<GridCell>>,
}

impl GridModel {
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.rows.iter().flatten()
    }

    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.cells().filter_map(GridCell::as_day).find(|c| c.day == day)
    }

    pub fn day_mut(&mut self, day: u32) -> Option<&mut DayCell> {
        self.rows.iter_mut().flatten().find_map(|cell| match cell {
            GridCell::Day(c) if c.day == day => Some(c),
            _ => None,
        })
    }

    pub fn today(&self) -> Option<&DayCell> {
        self.cells().filter_map(GridCell::as_day).find(|c| c.is_today)
    }
}

/// Builds the grid for `view`. Pure apart from the caller-supplied `today`.
pub fn render(view: ViewState, holidays: &HolidayTable, today: NaiveDate) -> GridModel {
    let first_weekday = view.first_of_month().weekday().num_days_from_sunday();
    let last_date = days_in_month(view.year, view.month_number());
    let current_month = view.contains(today);

    let mut rows = Vec::new();
    let mut row: Vec<GridCell> = (0..first_weekday).map(|_| GridCell::Blank).collect();

    for day in 1..=last_date {
        let weekday = (first_weekday + day - 1) % 7;
        let fixed = holidays.lookup(day, view.month_number());
        let is_holiday = weekday == 0 || fixed.is_some();
        let holiday_label = match fixed {
            Some(name) => Some(name.to_string()),
            None if is_holiday => Some(SUNDAY_LABEL.to_string()),
            None => None,
        };

        row.push(GridCell::Day(DayCell {
            day,
            weekday,
            is_today: current_month && today.day() == day,
            is_holiday,
            holiday_label,
            user_event: None,
        }));

        // The last row is left short rather than padded.
        if (first_weekday + day) % 7 == 0 || day == last_date {
            rows.push(std::mem::take(&mut row));
        }
    }

    GridModel {
        view,
        label: format!("{} {}", month_name(view.month_number()), view.year),
        leading_blanks: first_weekday,
        days_in_month: last_date,
        rows,
    }
}

pub(crate) fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Number of days in a one-based `month`.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
