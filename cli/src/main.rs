use clap::{CommandFactory, Parser};
use std::path::Path;

mod client;
mod commands;
mod core;

use client::ReportSection;
use commands::{Commands, SUBCOMMAND_NAMES};
use crate::core::exit_code::ExitCode;

#[derive(Parser)]
#[command(name = "clex")]
#[command(
    about = "A lexical analyzer for a small C-like language. Defaults to 'analyze' if no subcommand is provided."
)]
#[command(version)]
struct Args {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser)]
#[command(name = "clex")]
struct DefaultArgs {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,
    #[command(flatten)]
    analyze_args: commands::analyze::AnalyzeArgs,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args_error = match Args::try_parse() {
        Ok(Args {
            debug,
            command: Some(command),
        }) => {
            crate::core::logger::Logger::init(debug);
            return execute(command);
        }
        Ok(_) => {
            if std::env::args().len() == 1 && !has_source_files_in_current_dir() {
                Args::command().print_help()?;
                println!();
                return Ok(());
            }
            None
        }
        Err(e)
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion =>
        {
            e.print()?;
            return Ok(());
        }
        Err(e) => Some(e),
    };

    match DefaultArgs::try_parse() {
        Ok(default_args) => {
            crate::core::logger::Logger::init(default_args.debug);
            commands::analyze::execute(&default_args.analyze_args, ReportSection::Full)
        }
        // A named subcommand that failed to parse reports its own usage error.
        Err(default_error) => match args_error {
            Some(e) if names_subcommand() => e.exit(),
            _ => default_error.exit(),
        },
    }
}

fn execute(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Analyze(analyze_args) => {
            commands::analyze::execute(&analyze_args, ReportSection::Full)
        }
        Commands::Tokens(analyze_args) => {
            commands::analyze::execute(&analyze_args, ReportSection::Tokens)
        }
        Commands::Counts(analyze_args) => {
            commands::analyze::execute(&analyze_args, ReportSection::Counts)
        }
        Commands::Strip(strip_args) => commands::strip::execute(&strip_args),
    }
}

fn names_subcommand() -> bool {
    std::env::args()
        .skip(1)
        .any(|arg| SUBCOMMAND_NAMES.contains(&arg.as_str()))
}

/// Checks whether the current working directory contains any source files (non-recursive).
fn has_source_files_in_current_dir() -> bool {
    if let Ok(entries) = std::fs::read_dir(Path::new(".")) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() && client::has_source_extension(&path) {
                return true;
            }
        }
    }
    false
}
