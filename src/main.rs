use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tally::cli::{handle_export_command, handle_summary_command, ExportArgs, SummaryArgs};
use tally::config::{Settings, TallyPaths};

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Categorized budget summaries from spreadsheet rows",
    long_about = "tally reads income and expense rows from a CSV or JSON file, \
                  groups expenses into fixed buckets, and presents the totals \
                  for a weekly, biweekly or monthly period together with the \
                  progress toward a savings goal."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the categorized summary of a budget file
    Summary(SummaryArgs),

    /// Export a budget report as text, JSON, YAML or CSV
    Export(ExportArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "tally=warn",
        1 => "tally=info",
        _ => "tally=debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    tracing::debug!(config = %paths.settings_file().display(), "settings loaded");

    match cli.command {
        Some(Commands::Summary(args)) => {
            handle_summary_command(&settings, args)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&settings, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing tally at: {}", paths.base_dir().display());
            if paths.is_initialized() {
                println!("Settings file already exists, keeping current values.");
            }
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Edit {} to change the defaults.", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("tally Configuration");
            println!("===================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Default period:  {}", settings.default_period);
            println!(
                "  Savings goal:    {}",
                settings.savings_goal.amount().format_with_symbol(&settings.currency_symbol)
            );
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  CSV delimiter:   '{}'", settings.csv_delimiter);
        }
        None => {
            println!("tally - categorized budget summaries");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally summary <FILE>' to summarize a budget file.");
        }
    }

    Ok(())
}
