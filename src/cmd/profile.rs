use crate::data::{Persistable, Profile, Session, persistence::get_data_dir};
use crate::store::ProfileUpdate;
use anyhow::{Result, bail};
use std::path::Path;

pub fn run(email: Option<&str>) -> Result<()> {
    show_in(&get_data_dir()?, email, &mut std::io::stdout())
}

pub fn run_edit(original_email: Option<&str>, update: ProfileUpdate) -> Result<()> {
    edit_in(&get_data_dir()?, original_email, update, &mut std::io::stdout())
}

/// The explicit email if given, otherwise the session user's.
fn resolve_email(dir: &Path, explicit: Option<&str>) -> Result<String> {
    if let Some(email) = explicit {
        return Ok(email.to_string());
    }
    match Session::load_from(dir)?.email {
        Some(email) => Ok(email),
        None => bail!("Not signed in. Pass --email or run `portal login` first."),
    }
}

pub(crate) fn show_in<W: std::io::Write>(dir: &Path, email: Option<&str>, out: &mut W) -> Result<()> {
    let email = resolve_email(dir, email)?;
    let portal = super::open_portal(dir)?;
    write_profile(&portal.profile(&email)?, out)
}

pub(crate) fn edit_in<W: std::io::Write>(
    dir: &Path,
    original_email: Option<&str>,
    update: ProfileUpdate,
    out: &mut W,
) -> Result<()> {
    let original = resolve_email(dir, original_email)?;
    let mut portal = super::open_portal(dir)?;
    let profile = portal.update_profile(&original, update)?;

    let session = Session::load_from(dir)?;
    if session.email() == Some(original.as_str()) && profile.email != original {
        Session::signed_in(&profile.email).save_to(dir)?;
        log::debug!("session moved from {original} to {}", profile.email);
    }

    writeln!(out, "Profile updated successfully!")?;
    write_profile(&profile, out)
}

pub(crate) fn write_profile<W: std::io::Write>(profile: &Profile, out: &mut W) -> Result<()> {
    writeln!(out, "Profile")?;
    writeln!(out, "---")?;
    writeln!(out, "  {:<14} {}", "Full Name", profile.full_name)?;
    writeln!(out, "  {:<14} {}", "Email", profile.email)?;
    writeln!(out, "  {:<14} {}", "Employee ID", profile.employee_id)?;
    writeln!(out, "  {:<14} {}", "Phone Number", profile.phone_number)?;
    Ok(())
}
