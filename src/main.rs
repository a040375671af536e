use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use boxoffice_cli::catalog::{film_catalog, inflation_rates};
use boxoffice_cli::cli::{
    handle_chart_command, handle_export_command, handle_run, ChartArgs, ExportArgs, RunArgs,
};
use boxoffice_cli::config::Settings;
use boxoffice_cli::display::format_record_table;
use boxoffice_cli::logging::{init_logging, DEFAULT_LOG_LEVEL};
use boxoffice_cli::services::Analysis;

#[derive(Parser)]
#[command(
    name = "boxoffice",
    version,
    about = "Inflation-adjusted box office analysis",
    long_about = "Adjusts the budget and box office of every film in the built-in \
                  catalog to 2025 dollars, draws budget, box office and profit \
                  charts, names the record holders and exports the full table."
)]
struct Cli {
    /// Settings file (JSON)
    #[arg(short, long, global = true, env = "BOXOFFICE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level for diagnostics on stderr
    #[arg(long, global = true, env = "BOXOFFICE_LOG", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis: charts, highlights and CSV table (default)
    Run(RunArgs),

    /// Show the enriched records as a table
    Table,

    /// Draw a single chart
    Chart(ChartArgs),

    /// Export the analysis to a file
    Export(ExportArgs),

    /// Browse the charts interactively
    #[command(alias = "ui")]
    Tui,

    /// Show the effective settings, optionally saving them to a file
    Config {
        /// Write the settings as JSON to this path
        #[arg(long)]
        save: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "settings loaded");

    let analysis = Analysis::run(&film_catalog(), &inflation_rates())?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        None => handle_run(&analysis, &settings, RunArgs::default(), &mut stdout)?,
        Some(Commands::Run(args)) => handle_run(&analysis, &settings, args, &mut stdout)?,
        Some(Commands::Table) => {
            println!("{}", format_record_table(analysis.records()));
        }
        Some(Commands::Chart(args)) => {
            handle_chart_command(&analysis, &settings, args, &mut stdout)?
        }
        Some(Commands::Export(args)) => handle_export_command(&analysis, args, &mut stdout)?,
        Some(Commands::Tui) => {
            drop(stdout);
            boxoffice_cli::tui::run_tui(&analysis)?;
        }
        Some(Commands::Config { save }) => {
            println!("boxoffice Configuration");
            println!("=======================");
            println!("Export path: {}", settings.export_path.display());
            match &settings.chart_dir {
                Some(dir) => println!("Chart dir:   {}", dir.display()),
                None => println!("Chart dir:   (not saved)"),
            }
            println!(
                "Chart size:  {}x{}",
                settings.chart_width, settings.chart_height
            );
            if let Some(path) = save {
                settings.save(&path)?;
                println!("Settings saved to: {}", path.display());
            }
        }
    }

    Ok(())
}
