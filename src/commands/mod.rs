use crate::components::StaffoClient;
use crate::error::StaffoResult;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

// Export submodules
pub mod account;
pub mod resources;
pub mod schedules;

/// Command line interface
#[derive(Debug, Parser)]
#[command(name = "staffo", version, about = "Query the Staffomatic scheduling API")]
pub struct Cli {
    /// Path to the config file (defaults to ./config.toml)
    #[arg(short, long, env = "STAFFO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Fail on undecodable responses instead of returning empty results
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the current time in the account's time zone
    TimeZone,
    /// Print a location
    Location { location_id: u64 },
    /// Print all departments of all locations
    Departments,
    /// Print a department
    Department { department_id: u64 },
    /// Print all schedules of a location
    Schedules { location_id: u64 },
    /// Print the IDs of a location's schedules between two dates (YYYY-MM-DD)
    ScheduleIds {
        location_id: u64,
        from: NaiveDate,
        until: NaiveDate,
    },
    /// Print the shifts of a schedule
    Shifts { schedule_id: u64 },
    /// Print the shifts of one or more departments
    DepartmentShifts {
        #[arg(required = true)]
        department_ids: Vec<u64>,
    },
}

/// Shared context for all commands
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub client: StaffoClient,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(client: StaffoClient) -> Self {
        Self { client }
    }
}

/// Type alias for command result
pub type CommandResult = StaffoResult<()>;

/// Run `command`, writing its output to `out`
pub async fn execute<W: Write>(ctx: &CommandContext, command: Command, out: &mut W) -> CommandResult {
    match command {
        Command::TimeZone => account::time_zone(ctx, chrono::Utc::now(), out).await,
        Command::Location { location_id } => resources::location(ctx, location_id, out).await,
        Command::Departments => resources::departments(ctx, out).await,
        Command::Department { department_id } => {
            resources::department(ctx, department_id, out).await
        }
        Command::Schedules { location_id } => resources::schedules(ctx, location_id, out).await,
        Command::ScheduleIds {
            location_id,
            from,
            until,
        } => schedules::schedule_ids(ctx, location_id, from, until, out).await,
        Command::Shifts { schedule_id } => resources::shifts(ctx, schedule_id, out).await,
        Command::DepartmentShifts { department_ids } => {
            resources::department_shifts(ctx, &department_ids, out).await
        }
    }
}
