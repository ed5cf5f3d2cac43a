use crate::data::{Persistable, Session, persistence::get_data_dir};
use anyhow::Result;
use std::path::Path;

pub fn run(email: &str, password: &str) -> Result<()> {
    run_in(&get_data_dir()?, email, password, &mut std::io::stdout())
}

pub fn run_logout() -> Result<()> {
    logout_in(&get_data_dir()?, &mut std::io::stdout())
}

/// Checks the credentials and records the user as signed in.
pub(crate) fn run_in<W: std::io::Write>(
    dir: &Path,
    email: &str,
    password: &str,
    out: &mut W,
) -> Result<()> {
    let portal = super::open_portal(dir)?;
    let profile = portal.login(email, password)?;
    Session::signed_in(&profile.email).save_to(dir)?;
    writeln!(out, "Login successful! Welcome, {}", profile.full_name)?;
    Ok(())
}

pub(crate) fn logout_in<W: std::io::Write>(dir: &Path, out: &mut W) -> Result<()> {
    Session::default().save_to(dir)?;
    writeln!(out, "Logged out successfully.")?;
    Ok(())
}
