use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{BufReader, IsTerminal};
use std::path::PathBuf;

use goal_planner::cli::{handle_project, handle_status, ProjectArgs, Session, StatusArgs};
use goal_planner::config::{paths::PlannerPaths, settings::Settings};
use goal_planner::logging::init_tracing;
use goal_planner::models::MonthYear;

#[derive(Parser)]
#[command(
    name = "goalplan",
    version,
    about = "Plan savings goals and track how long is left",
    long_about = "goalplan projects the month a savings goal will be reached, either \
                  from a fixed monthly amount or a fixed number of months, and reports \
                  the time remaining as savings are added."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Project the finish month of a savings plan
    #[command(alias = "when")]
    Project(ProjectArgs),

    /// Show the time remaining for a plan given the amount saved
    Status(StatusArgs),

    /// Start an interactive goal session
    #[command(alias = "shell")]
    Session {
        /// Read commands from a file instead of stdin
        #[arg(long)]
        script: Option<PathBuf>,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = PlannerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let today = MonthYear::current();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Project(args)) => handle_project(&args, today, &mut out)?,
        Some(Commands::Status(args)) => handle_status(&args, &settings, today, &mut out)?,
        Some(Commands::Session { script }) => {
            let mut session = Session::new(&settings, today);
            match script {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("Failed to open script {}", path.display()))?;
                    session.run(BufReader::new(file), &mut out)?;
                }
                None => {
                    let stdin = std::io::stdin();
                    let mut session = session.with_prompt(stdin.is_terminal());
                    session.run(stdin.lock(), &mut out)?;
                }
            }
        }
        Some(Commands::Init) => {
            println!("Initializing goal planner at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Goal Planner Configuration");
            println!("==========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency label:       {}", settings.currency_label);
            println!("  Start year window:    {}", settings.start_year_window);
            println!("  Default savings mode: {}", settings.default_savings_mode);
        }
        None => {
            println!("goalplan - savings goal planner");
            println!();
            println!("Run 'goalplan --help' for usage information.");
            println!("Run 'goalplan session' to plan goals interactively.");
        }
    }

    Ok(())
}
