use chrome_debug_utils::{
    default_target_filter, filter_targets, logging, resolve_host_launch_command,
    resolve_launch_command, LaunchCommand, Platform, RealFileSystem, Result, TargetDescriptor,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Chrome launch and debug target helpers", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "human", global = true)]
    format: OutputFormat,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the command that launches Chrome
    LaunchCommand {
        /// Platform to resolve for (darwin, win32, linux, ...); defaults to the host
        #[arg(long)]
        platform: Option<String>,
    },
    /// Filter a JSON list of debug targets by type
    FilterTargets {
        /// Target type to keep; repeat to keep several
        #[arg(long = "type", value_name = "TYPE")]
        types: Vec<String>,

        /// Keep page targets only
        #[arg(long, conflicts_with = "types")]
        default: bool,

        /// File holding the target list; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputFormat {
    Human,
    Json,
}

#[derive(Debug, Serialize)]
struct LaunchJsonResponse<'a> {
    action: &'static str,
    platform: Platform,
    command: &'a LaunchCommand,
}

fn main() {
    let args = Args::parse();

    logging::setup_logging(args.verbose, args.format == OutputFormat::Json);

    let result = match &args.command {
        Commands::LaunchCommand { platform } => {
            handle_launch_command(platform.as_deref(), args.format)
        }
        Commands::FilterTargets {
            types,
            default,
            file,
        } => handle_filter_targets(types, *default, file.as_deref()),
    };

    if let Err(err) = result {
        error!("{}", err);
        process::exit(1);
    }
}

fn handle_launch_command(raw_platform: Option<&str>, format: OutputFormat) -> Result<()> {
    let (platform, command) = match raw_platform {
        Some(raw) => {
            let platform = Platform::from_raw(raw);
            (platform, resolve_launch_command(platform, &RealFileSystem))
        }
        None => (Platform::current(), resolve_host_launch_command()),
    };

    match format {
        OutputFormat::Human => {
            info!("Launch command for {}", platform);
            println!("{}", command);
        }
        OutputFormat::Json => {
            let response = LaunchJsonResponse {
                action: "launch-command",
                platform,
                command: &command,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

fn handle_filter_targets(types: &[String], default: bool, file: Option<&Path>) -> Result<()> {
    let input = match file {
        Some(path) => {
            debug!(path = %path.display(), "Reading targets from file");
            fs::read_to_string(path)?
        }
        None => {
            debug!("Reading targets from stdin");
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let targets: Vec<TargetDescriptor> = serde_json::from_str(&input)?;
    let total = targets.len();

    let filtered: Vec<TargetDescriptor> = if default {
        targets.into_iter().filter(default_target_filter).collect()
    } else {
        filter_targets(targets, Some(types))
    };

    info!("Kept {} of {} targets", filtered.len(), total);
    println!("{}", serde_json::to_string_pretty(&filtered)?);

    Ok(())
}
