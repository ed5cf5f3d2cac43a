pub mod holidays;
pub mod init;
pub mod login;
pub mod month;
pub mod profile;
pub mod register;
pub mod root;

use crate::data::AppSettings;
use crate::store::{FileUserStore, Portal};
use anyhow::Result;
use std::path::Path;

/// Opens the portal over the users stored in `dir`.
pub(crate) fn open_portal(dir: &Path) -> Result<Portal<FileUserStore>> {
    let settings = AppSettings::load_from(dir)?;
    let store = FileUserStore::open(dir)?;
    Ok(Portal::new(store, settings.password_cost))
}

/// A data directory whose settings use the cheapest bcrypt cost.
#[cfg(test)]
pub(crate) fn fast_dir() -> tempfile::TempDir {
    let tmp = tempfile::TempDir::new().unwrap();
    AppSettings {
        password_cost: 4,
        ..AppSettings::default()
    }
    .save_to(tmp.path())
    .unwrap();
    tmp
}
