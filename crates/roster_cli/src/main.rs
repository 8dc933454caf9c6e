//! Command-line front end for the employee roster.
//!
//! # Responsibility
//! - Act as the presentation surface: print the table and rejections.
//! - Map subcommands onto form requests against the durable store.
//!
//! Usage:
//!   roster list
//!   roster add --name Amy --age 22 --hours 20 --pay-rate 15
//!   roster edit 2 --hours 45
//!   roster delete 2
//!   roster export

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use log::info;
use roster_core::db::open_db;
use roster_core::{
    core_version, init_logging, Employee, EmployeeForm, FormService, KeyValueStore,
    PresentationSurface, RosterConfig, RosterRepository, SqliteStore, TextTableSurface,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Employee roster editor backed by a local store")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// SQLite file holding the roster (overrides ROSTER_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Storage key of the roster entry (overrides ROSTER_STORAGE_KEY)
    #[arg(long, global = true)]
    key: Option<String>,

    /// Absolute directory for rolling logs (overrides ROSTER_LOG_DIR)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error (overrides ROSTER_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the roster table
    List,
    /// Add a part-time employee
    Add(AddArgs),
    /// Edit an employee; omitted fields keep their current values
    Edit(EditArgs),
    /// Delete an employee by id
    Delete { id: u32 },
    /// Print the persisted JSON entry
    Export,
}

#[derive(Args)]
struct AddArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    age: String,
    #[arg(long)]
    hours: String,
    #[arg(long)]
    pay_rate: String,
}

#[derive(Args)]
struct EditArgs {
    id: u32,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    age: Option<String>,
    #[arg(long)]
    hours: Option<String>,
    #[arg(long)]
    pay_rate: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = resolve_config(&cli);

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir).context("logging init failed")?;
    }
    info!(
        "event=cli_start module=cli status=ok version={} db={}",
        core_version(),
        config.db_path.display()
    );

    let conn = open_db(&config.db_path)
        .with_context(|| format!("cannot open roster store `{}`", config.db_path.display()))?;
    let mut repo = RosterRepository::with_storage_key(
        SqliteStore::new(&conn),
        CliSurface::default(),
        config.storage_key.as_str(),
    );
    repo.load();
    let mut service = FormService::new(repo);

    let response = match cli.command {
        Command::List => None,
        Command::Export => {
            let blob = service.repo().store().get_item(&config.storage_key)?;
            println!("{}", blob.unwrap_or_default());
            return Ok(ExitCode::SUCCESS);
        }
        Command::Add(args) => Some(service.request_add(&EmployeeForm {
            name: args.name,
            age: args.age,
            hours: args.hours,
            pay_rate: args.pay_rate,
        })),
        Command::Edit(args) => {
            let current = service.edit_form(args.id)?;
            let form = EmployeeForm {
                name: args.name.unwrap_or(current.name),
                age: args.age.unwrap_or(current.age),
                hours: args.hours.unwrap_or(current.hours),
                pay_rate: args.pay_rate.unwrap_or(current.pay_rate),
            };
            Some(service.request_edit(args.id, &form))
        }
        Command::Delete { id } => Some(service.request_delete(id)),
    };

    let repo = service.into_repo();
    let surface = repo.surface();
    surface.flush();
    match response {
        // The surface already printed the validation message.
        Some(response) if !response.ok && surface.rejected => Ok(ExitCode::FAILURE),
        Some(response) if !response.ok => bail!("{}", response.message),
        Some(response) => {
            eprintln!("{}", response.message);
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::SUCCESS),
    }
}

/// Keeps only the latest render so one command prints one table.
#[derive(Default)]
struct CliSurface {
    latest: Option<Vec<Employee>>,
    rejected: bool,
}

impl CliSurface {
    fn flush(&self) {
        if let Some(employees) = &self.latest {
            TextTableSurface::stdio().render(employees);
        }
    }
}

impl PresentationSurface for CliSurface {
    fn render(&mut self, employees: &[Employee]) {
        self.latest = Some(employees.to_vec());
    }

    fn show_validation_error(&mut self, message: &str) {
        self.rejected = true;
        TextTableSurface::stdio().show_validation_error(message);
    }
}

fn resolve_config(cli: &Cli) -> RosterConfig {
    let mut config = RosterConfig::from_env();
    if let Some(db) = &cli.db {
        config.db_path = db.clone();
    }
    if let Some(key) = &cli.key {
        config.storage_key = key.clone();
    }
    if let Some(log_dir) = &cli.log_dir {
        config.log_dir = Some(log_dir.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    config
}
