//! fieldgen CLI tool

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use console::style;
use fieldgen::GenError;
use fieldgen_cli::observability::{self, LogFormat};
use fieldgen_cli::{FieldgenConfig, FlutterCommand, Invocation, ServerCommand, ServerOutput};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fieldgen")]
#[command(version)]
#[command(
    about = "Generate models, DAOs and API converters from terse field specs",
    long_about = None
)]
struct Cli {
    /// Project root (skips discovery)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Additional configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Log line format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate code for a Flutter client
    Flutter {
        #[command(subcommand)]
        command: FlutterCommand,
    },
    /// Generate code for a Rust server
    Server {
        #[command(subcommand)]
        command: ServerCommand,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = observability::init(cli.verbose, cli.log_format) {
        eprintln!("{} {err:#}", style("warning:").yellow().bold());
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = FieldgenConfig::load(cli.config.as_deref())?;
    let invocation = Invocation::new(config, cli.root);

    match cli.command {
        Commands::Flutter { command } => {
            command.execute(&invocation)?;
        }
        Commands::Server { command } => {
            if let ServerOutput::Source(source) = command.execute(&invocation)? {
                print!("{source}");
            }
        }
    }

    Ok(())
}

/// Print `err` and choose the exit code
///
/// Expected outcomes such as an existing destination are warnings and exit
/// successfully.
fn report(err: &anyhow::Error) -> ExitCode {
    let is_warning = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<GenError>())
        .is_some_and(GenError::is_warning);

    if is_warning {
        eprintln!("{} {err}", style("warning:").yellow().bold());
        ExitCode::SUCCESS
    } else {
        tracing::error!(error = %format!("{err:#}"), "generation failed");
        eprintln!("{} {err:#}", style("error:").red().bold());
        ExitCode::FAILURE
    }
}
