use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;
mod config;
mod view;

use commands::{
    ConfigCommand, LimitCommand, MealCommand, ResetCommand, StatusCommand, WorkoutCommand,
};
use config::Config;

#[derive(Parser)]
#[command(name = "caltrack")]
#[command(version)]
#[command(about = "Track meals and workouts against a daily calorie limit", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Log storage and tracker activity to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log and manage meals
    Meal(MealCommand),

    /// Log and manage workouts
    Workout(WorkoutCommand),

    /// Show or change the daily calorie limit
    Limit(LimitCommand),

    /// Show today's totals
    Status(StatusCommand),

    /// Clear meals, workouts and the running total
    Reset(ResetCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cli_config_path = cli.config.clone();
    let config = Config::load(cli.config)?;
    tracing::debug!(config_file = ?config.config_file, "Loaded configuration");

    match &cli.command {
        Some(Commands::Meal(cmd)) => cmd.run(&config)?,
        Some(Commands::Workout(cmd)) => cmd.run(&config)?,
        Some(Commands::Limit(cmd)) => cmd.run(&config)?,
        Some(Commands::Status(cmd)) => cmd.run(&config)?,
        Some(Commands::Reset(cmd)) => cmd.run(&config)?,
        Some(Commands::Config(cmd)) => cmd.run(&config, cli_config_path)?,
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

/// Logs go to stderr so command output on stdout stays pipeable.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "caltrack=debug,caltrack_core=debug"
    } else {
        "caltrack=warn,caltrack_core=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
