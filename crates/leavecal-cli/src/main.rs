use clap::{Parser, Subcommand};
use dotenv::dotenv;
use leavecal_api::{LeaveSource, LeavesClient};
use leavecal_core::{LeaveCalError, LeaveDataset};
use log::{error, info};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

mod components;

use components::{day::DayArgs, month::MonthArgs, months::MonthsArgs, stats::StatsArgs};

/// Management leave calendar
#[derive(Parser)]
#[command(name = "leavecal", version, about, long_about = None)]
struct Cli {
    /// Leave API endpoint, overrides LEAVECAL_API_URL
    #[arg(long, global = true)]
    url: Option<String>,

    /// HTTP timeout such as "5s" or "1500ms", overrides LEAVECAL_HTTP_TIMEOUT_MS
    #[arg(long, global = true, value_parser = humantime::parse_duration)]
    timeout: Option<Duration>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive calendar view (default)
    Tui,
    /// Print the navigable month window
    Months(MonthsArgs),
    /// Print the calendar grid for one month
    Month(MonthArgs),
    /// Print everyone on leave on a day
    Day(DayArgs),
    /// Print the aggregate leave counts
    Stats(StatsArgs),
    /// Print the department color legend
    Legend,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    let cli = Cli::parse();
    _main(cli).await
}

async fn _main(cli: Cli) -> ExitCode {
    let command = cli.command.unwrap_or(Commands::Tui);

    // the TUI installs its own in-memory logger
    if !matches!(command, Commands::Tui) {
        let _ = env_logger::try_init();
    }

    let client = match LeavesClient::from_env(cli.url.as_deref(), cli.timeout) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let output = match command {
        Commands::Tui => {
            return match leavecal_tui::tui_main(Arc::new(client)).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("{e}");
                    ExitCode::FAILURE
                }
            };
        }
        Commands::Legend => Ok(components::legend::render()),
        Commands::Months(args) => args.run(),
        Commands::Month(args) => match fetch(&client).await {
            Ok(dataset) => args.run(&dataset),
            Err(e) => Err(e),
        },
        Commands::Day(args) => match fetch(&client).await {
            Ok(dataset) => args.run(&dataset),
            Err(e) => Err(e),
        },
        Commands::Stats(args) => match fetch(&client).await {
            Ok(dataset) => args.run(&dataset),
            Err(e) => Err(e),
        },
    };

    match output {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn fetch(client: &LeavesClient) -> Result<LeaveDataset, LeaveCalError> {
    info!("Fetching leaves from {}", client.describe());
    client.fetch_leaves().await
}

/// Local date used when a command is not given `--today`
pub fn local_today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
