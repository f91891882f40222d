mod commands;
mod output;

use clap::{Parser, Subcommand};
use sitrep_core::config::DEFAULT_REPORT_URL;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sitrep",
    version,
    about = "Extract incident tables and summaries from wildfire situation reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a report (URL, PDF or text file) and write the daily file set
    Extract {
        /// URL, PDF or plain-text report
        #[arg(default_value = DEFAULT_REPORT_URL)]
        source: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Root directory for the daily file set
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Run date as YYYYMMDD (default: today)
        #[arg(long, value_name = "YYYYMMDD")]
        date: Option<String>,

        /// Custom JSON layout profile
        #[arg(long, value_name = "FILE")]
        profile: Option<PathBuf>,

        /// Print the report without writing any files
        #[arg(long)]
        dry_run: bool,
    },
    /// List the region blocks detected in a report
    Regions {
        /// PDF or plain-text report
        input_file: PathBuf,

        /// Custom JSON layout profile
        #[arg(long, value_name = "FILE")]
        profile: Option<PathBuf>,
    },
    /// Inspect and validate layout profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the default layout profile as JSON
    Show,
    /// Validate a custom profile file
    Validate {
        /// Path to JSON profile file
        file: PathBuf,
    },
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            source,
            output,
            data_dir,
            date,
            profile,
            dry_run,
        } => commands::extract::run(commands::extract::ExtractArgs {
            source,
            output_format: output,
            data_dir,
            date,
            profile,
            dry_run,
        }),
        Commands::Regions {
            input_file,
            profile,
        } => commands::regions::run(input_file, profile),
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::profile::show(),
            ProfileAction::Validate { file } => commands::profile::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
