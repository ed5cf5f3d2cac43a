use crate::calendar::HolidayTable;
use crate::data::{HolidayData, Persistable};
use anyhow::Result;

pub fn run() -> Result<()> {
    let table = HolidayData::load()?.to_table();
    write_holidays(&table, &mut std::io::stdout())
}

pub(crate) fn write_holidays<W: std::io::Write>(table: &HolidayTable, out: &mut W) -> Result<()> {
    writeln!(out, "Holidays")?;
    writeln!(out, "---")?;
    writeln!(out, "  {:<8} {}", "Date", "Name")?;
    for (day, month, name) in table.sorted() {
        writeln!(out, "  {:<8} {}", format!("{day:02}-{month:02}"), name)?;
    }
    writeln!(out, "---")?;
    writeln!(out, "Sundays are always holidays.")?;
    writeln!(out, "Total: {} fixed holiday(s)", table.len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &HolidayTable) -> String {
        let mut buf = Vec::new();
        write_holidays(table, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_holidays_empty() {
        let out = render(&HolidayTable::default());
        assert!(out.contains("Total: 0 fixed holiday(s)"));
    }

    #[test]
    fn test_write_holidays_builtin() {
        let out = render(&HolidayTable::builtin());
        assert!(out.contains("26-01    Republic Day"));
        assert!(out.contains("25-12    Christmas"));
        assert!(out.contains("Total: 6 fixed holiday(s)"));
    }

    #[test]
    fn test_write_holidays_in_calendar_order() {
        let out = render(&HolidayTable::builtin());
        let new_year = out.find("New Year's Day").unwrap();
        let gandhi = out.find("Gandhi Jayanti").unwrap();
        let christmas = out.find("Christmas").unwrap();
        assert!(new_year < gandhi && gandhi < christmas);
    }
}
