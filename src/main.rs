mod calendar;
mod cmd;
mod data;
mod store;
mod ui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use store::{ProfileUpdate, RegistrationForm};

#[derive(Parser)]
#[command(name = "portal", about = "employee portal and calendar")]
struct Cli {
    /// Path to the data directory containing config and data files (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize data files with defaults
    Init,
    /// List the fixed holidays
    Holidays,
    /// Print a month grid (defaults to the current month)
    Month {
        #[arg(short, long)]
        year: Option<i32>,
        /// Month number, 1-12
        #[arg(short, long)]
        month: Option<u32>,
    },
    /// Register a new employee account
    Register {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        employee_id: String,
        #[arg(long)]
        phone_number: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Sign in and remember the account for profile commands
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the signed-in account
    Logout,
    /// Show a profile (defaults to the signed-in account)
    Profile {
        #[arg(long)]
        email: Option<String>,
    },
    /// Update a profile (defaults to the signed-in account)
    EditProfile {
        /// Current email of the account to edit
        #[arg(long)]
        original_email: Option<String>,
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        employee_id: String,
        #[arg(long)]
        phone_number: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Resolve data_dir to an absolute path so file I/O works regardless of
    // future directory changes within the process.
    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir.clone());
    log::debug!("data dir {}", data_dir.display());

    // Auto-init when the data directory is missing or empty and the user did not
    // explicitly invoke the `init` subcommand.
    let is_init_command = matches!(cli.command, Some(Commands::Init));
    if !is_init_command && dir_needs_init(&data_dir) {
        eprintln!(
            "Data directory '{}' is missing or empty, running init...",
            data_dir.display()
        );
        cmd::init::run()?;
    }

    match cli.command {
        None => cmd::root::run(),
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Holidays) => cmd::holidays::run(),
        Some(Commands::Month { year, month }) => cmd::month::run(year, month),
        Some(Commands::Register {
            full_name,
            email,
            employee_id,
            phone_number,
            password,
            confirm_password,
        }) => cmd::register::run(RegistrationForm {
            full_name,
            email,
            employee_id,
            phone_number,
            password,
            confirm_password,
        }),
        Some(Commands::Login { email, password }) => cmd::login::run(&email, &password),
        Some(Commands::Logout) => cmd::login::run_logout(),
        Some(Commands::Profile { email }) => cmd::profile::run(email.as_deref()),
        Some(Commands::EditProfile {
            original_email,
            full_name,
            email,
            employee_id,
            phone_number,
        }) => cmd::profile::run_edit(
            original_email.as_deref(),
            ProfileUpdate {
                full_name,
                email,
                employee_id,
                phone_number,
            },
        ),
    }
}

/// Returns true when `dir` does not exist or exists but contains no files.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    if !dir.exists() {
        return true;
    }
    dir.read_dir()
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dir_needs_init_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("does_not_exist");
        assert!(dir_needs_init(&missing));
    }

    #[test]
    fn test_dir_needs_init_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(dir_needs_init(tmp.path()));
    }

    #[test]
    fn test_dir_needs_init_nonempty_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("file.txt"), "data").unwrap();
        assert!(!dir_needs_init(tmp.path()));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_month_and_edit_profile() {
        let cli = Cli::try_parse_from(["portal", "month", "--year", "2024", "--month", "2"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Month { year: Some(2024), month: Some(2) })
        ));

        let cli = Cli::try_parse_from([
            "portal",
            "--data-dir",
            "/tmp/portal",
            "edit-profile",
            "--full-name",
            "Asha",
            "--email",
            "a@x.com",
            "--employee-id",
            "E1",
            "--phone-number",
            "555",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/portal"));
        assert!(matches!(
            cli.command,
            Some(Commands::EditProfile { original_email: None, .. })
        ));
    }

    #[test]
    fn test_cli_register_requires_confirmation() {
        let result = Cli::try_parse_from([
            "portal",
            "register",
            "--full-name",
            "Asha",
            "--email",
            "a@x.com",
            "--employee-id",
            "E1",
            "--phone-number",
            "555",
            "--password",
            "pw",
        ]);
        assert!(result.is_err());
    }
}
