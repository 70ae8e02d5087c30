use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lessonfit", version, about = "Fit learning plans to the time you have")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a goal into a duration constraint
    Parse(commands::parse::ParseArgs),
    /// Show the study budget for a number of days
    Budget(commands::budget::BudgetArgs),
    /// Build a day-by-day study plan for a goal
    Schedule(commands::schedule::ScheduleArgs),
    /// Fit a curriculum file to a goal's duration
    Fit(commands::fit::FitArgs),
    /// Generate a complete learning plan
    Plan(commands::plan::PlanArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    // stdout carries JSON only; logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Parse(args) => commands::parse::run(args),
        Commands::Budget(args) => commands::budget::run(args),
        Commands::Schedule(args) => commands::schedule::run(args),
        Commands::Fit(args) => commands::fit::run(args),
        Commands::Plan(args) => commands::plan::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
