use std::collections::HashMap;

/// Label used for Sundays that have no fixed holiday.
pub const SUNDAY_LABEL: &str = "Sunday";

/// Fixed holidays shipped with the portal, as (day, month, name).
const BUILTIN_HOLIDAYS: [(u32, u32, &str); 6] = [
    (1, 1, "New Year's Day"),
    (23, 1, "Netaji Jayanti"),
    (26, 1, "Republic Day"),
    (15, 8, "Independence Day"),
    (2, 10, "Gandhi Jayanti"),
    (25, 12, "Christmas"),
];

/// Immutable (day, month) -> label lookup. Months are one-based.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HolidayTable {
    entries: HashMap<(u32, u32), String>,
}

impl HolidayTable {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32, S)>,
        S: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(day, month, name)| ((day, month), name.into()))
            .collect();
        HolidayTable { entries }
    }

    pub fn builtin() -> Self {
        HolidayTable::from_entries(BUILTIN_HOLIDAYS)
    }

    pub fn lookup(&self, day: u32, month: u32) -> Option<&str> {
        self.entries.get(&(day, month)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by month, then day.
    pub fn sorted(&self) -> Vec<(u32, u32, &str)> {
        let mut out: Vec<_> = self
            .entries
            .iter()
            .map(|(&(day, month), name)| (day, month, name.as_str()))
            .collect();
        out.sort_by_key(|&(day, month, _)| (month, day));
        out
    }
}
