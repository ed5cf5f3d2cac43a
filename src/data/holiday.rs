use crate::calendar::holidays::HolidayTable;
use crate::data::persistence::Persistable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A fixed yearly holiday. `month` is one-based.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Holiday {
    pub name: String,
    pub day: u32,
    pub month: u32,
}

impl Holiday {
    pub fn new(name: &str, day: u32, month: u32) -> Self {
        Holiday {
            name: name.to_string(),
            day,
            month,
        }
    }

    /// True when the day exists in some year (29 February included).
    pub fn is_valid(&self) -> bool {
        NaiveDate::from_ymd_opt(2024, self.month, self.day).is_some()
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct HolidayData {
    pub holidays: Vec<Holiday>,
}

impl Default for HolidayData {
    fn default() -> Self {
        HolidayData {
            holidays: HolidayTable::builtin()
                .sorted()
                .into_iter()
                .map(|(day, month, name)| Holiday::new(name, day, month))
                .collect(),
        }
    }
}

impl Persistable for HolidayData {
    fn filename() -> &'static str {
        "holidays.yaml"
    }
    fn is_json() -> bool {
        false
    }
}

impl HolidayData {
    /// Freezes the list into a lookup table, skipping impossible dates.
    /// A later entry for the same day replaces an earlier one.
    pub fn to_table(&self) -> HolidayTable {
        HolidayTable::from_entries(self.holidays.iter().filter_map(|h| {
            if h.is_valid() {
                Some((h.day, h.month, h.name.clone()))
            } else {
                log::warn!("skipping holiday '{}' with invalid date {}-{}", h.name, h.day, h.month);
                None
            }
        }))
    }
}
