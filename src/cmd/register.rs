use crate::data::persistence::get_data_dir;
use crate::store::RegistrationForm;
use anyhow::Result;
use std::path::Path;

pub fn run(form: RegistrationForm) -> Result<()> {
    run_in(&get_data_dir()?, form, &mut std::io::stdout())
}

pub(crate) fn run_in<W: std::io::Write>(dir: &Path, form: RegistrationForm, out: &mut W) -> Result<()> {
    let mut portal = super::open_portal(dir)?;
    let profile = portal.register(form)?;
    writeln!(out, "Registration successful!")?;
    writeln!(out, "Welcome aboard, {} ({}).", profile.full_name, profile.employee_id)?;
    Ok(())
}
