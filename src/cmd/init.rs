use crate::data::{AppSettings, HolidayData, Persistable, UserData};
use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn run() -> Result<()> {
    let dir = crate::data::persistence::get_data_dir()?;
    fs::create_dir_all(&dir)?;
    run_in_dir(&dir)?;
    println!("Data files initialized successfully.");
    Ok(())
}

/// Writes the default settings and holiday table into `dir`. An existing
/// users.json is left alone so re-running init never drops accounts.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    AppSettings::default().save_to(dir)?;
    HolidayData::default().save_to(dir)?;
    if dir.join(UserData::filename()).exists() {
        log::info!("keeping existing {}", UserData::filename());
    } else {
        UserData::default().save_to(dir)?;
    }
    Ok(())
}
