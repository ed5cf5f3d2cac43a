use crate::calendar::holidays::SUNDAY_LABEL;
use crate::calendar::view_state::year_range;
use crate::calendar::{Clock, GridCell, GridModel, SystemClock, ViewState, render};
use crate::data::{HolidayData, Persistable};
use anyhow::{Result, bail};
use chrono::Datelike;

/// Prints one month. Defaults to the current month; `month` is 1-12.
pub fn run(year: Option<i32>, month: Option<u32>) -> Result<()> {
    let today = SystemClock.today();
    let view = resolve_view(year, month, today)?;
    let table = HolidayData::load()?.to_table();
    let grid = render(view, &table, today);
    write_month(&grid, &mut std::io::stdout())
}

fn resolve_view(year: Option<i32>, month: Option<u32>, today: chrono::NaiveDate) -> Result<ViewState> {
    let year = year.unwrap_or(today.year());
    let month = month.unwrap_or(today.month());
    if !(1..=12).contains(&month) {
        bail!("month must be between 1 and 12, got {month}");
    }
    let years = year_range();
    if !years.contains(&year) {
        bail!("year must be between {} and {}, got {year}", years.start(), years.end());
    }
    Ok(ViewState::new(year, month as i64 - 1))
}

/// Each day takes four columns: `[dd]` for today, ` dd*` for holidays.
pub(crate) fn write_month<W: std::io::Write>(grid: &GridModel, out: &mut W) -> Result<()> {
    writeln!(out, "{:^28}", grid.label)?;
    writeln!(out, " Su  Mo  Tu  We  Th  Fr  Sa")?;
    for row in &grid.rows {
        let line: String = row
            .iter()
            .map(|cell| match cell {
                GridCell::Blank => "    ".to_string(),
                GridCell::Day(c) if c.is_today => format!("[{:>2}]", c.day),
                GridCell::Day(c) if c.is_holiday => format!(" {:>2}*", c.day),
                GridCell::Day(c) => format!(" {:>2} ", c.day),
            })
            .collect();
        writeln!(out, "{}", line.trim_end())?;
    }

    let named: Vec<_> = grid
        .cells()
        .filter_map(GridCell::as_day)
        .filter_map(|c| match c.holiday_label.as_deref() {
            Some(label) if label != SUNDAY_LABEL => Some((c.day, label)),
            _ => None,
        })
        .collect();
    if !named.is_empty() {
        writeln!(out)?;
        for (day, label) in named {
            writeln!(out, "  {day:>2}  {label}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayTable;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn month_text(year: i32, month: u32, today: NaiveDate) -> String {
        let view = resolve_view(Some(year), Some(month), today).unwrap();
        let grid = render(view, &HolidayTable::builtin(), today);
        let mut buf = Vec::new();
        write_month(&grid, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_march_2024_layout() {
        let out = month_text(2024, 3, d(2024, 3, 15));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0].trim(), "March 2024");
        // Friday the 1st and Saturday the 2nd after five blanks.
        assert_eq!(lines[2], format!("{}  1   2", " ".repeat(20)));
        assert_eq!(lines[3], "  3*  4   5   6   7   8   9");
        assert!(lines[4].contains("[15]"));
        assert_eq!(lines[7], " 31*");
    }

    #[test]
    fn test_named_holidays_listed() {
        let out = month_text(2024, 1, d(2000, 1, 1));
        assert!(out.contains("  26  Republic Day"));
        assert!(out.contains("  23  Netaji Jayanti"));
        assert!(!out.contains("Sunday"));
    }

    #[test]
    fn test_defaults_to_today() {
        let view = resolve_view(None, None, d(2024, 8, 9)).unwrap();
        assert_eq!(view, ViewState { year: 2024, month: 7 });
    }

    #[test]
    fn test_rejects_bad_month_and_year() {
        let today = d(2024, 1, 1);
        assert!(resolve_view(Some(2024), Some(0), today).is_err());
        assert!(resolve_view(Some(2024), Some(13), today).is_err());
        assert!(resolve_view(Some(i32::MAX), Some(1), today).is_err());
        assert!(resolve_view(Some(i32::MIN), Some(1), today).is_err());
    }

    #[test]
    fn test_accepts_years_beyond_four_digits() {
        let today = d(2024, 1, 1);
        let view = resolve_view(Some(10_000), Some(1), today).unwrap();
        assert_eq!(view, ViewState { year: 10_000, month: 0 });
        let view = resolve_view(Some(0), Some(12), today).unwrap();
        assert_eq!(view, ViewState { year: 0, month: 11 });
        assert!(month_text(10_000, 1, today).contains("January 10000"));
    }
}
