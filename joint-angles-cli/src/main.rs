mod inspect;
mod prompt;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use joint_angles_lib::{read_analysis_config, run_analysis, AnalysisConfig, PitchDomain};
use log::LevelFilter;

use crate::inspect::inspect_sensor_folder;
use crate::prompt::SensorPrompt;

#[derive(Parser)]
#[command(name = "Joint Angles")]
#[command(bin_name = "joint-angles")]
struct Cli {
    /// More logging, repeat for trace output
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Analyze(AnalyzeArgs),
    Inspect(InspectArgs),
}

#[derive(clap::Args)]
#[command(about = "Compute joint angles between three sensors")]
struct AnalyzeArgs {
    /// JSON analysis config
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Directory containing the sensor data folders
    #[arg(long, short)]
    parent: Option<PathBuf>,

    /// Sensor data folder names, in sensor order
    #[arg(long, short, num_args = 3, value_names = ["SENSOR1", "SENSOR2", "SENSOR3"])]
    sensors: Option<Vec<String>>,

    /// Report file
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Fail instead of clamping when the pitch leaves the asin domain
    #[arg(long, action)]
    strict_pitch: bool,
}

#[derive(clap::Args)]
#[command(about = "Show what a single sensor folder contains")]
struct InspectArgs {
    folder: PathBuf,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .try_init();

    let result = match args.command {
        Commands::Analyze(args) => analyze(args),
        Commands::Inspect(args) => inspect_sensor_folder(&args.folder),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_not_found(&err) => {
            log::debug!("{:#}", err);
            eprintln!("File not found. Please check the directory paths and try again.");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("An error occurred: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn analyze(args: AnalyzeArgs) -> Result<()> {
    let mut prompt = SensorPrompt::new();
    let config = resolve_config(args, &mut prompt);
    prompt.save_history();
    let summary = run_analysis(&config?)?;

    println!(
        "Angles between sensors saved to {}",
        summary.output_path.display()
    );
    Ok(())
}

/// Command line arguments win over the config file; whatever is still missing
/// is asked for interactively.
fn resolve_config(args: AnalyzeArgs, prompt: &mut SensorPrompt) -> Result<AnalysisConfig> {
    let file_config = args
        .config
        .as_deref()
        .map(read_analysis_config)
        .transpose()?;

    let parent_directory = match args.parent {
        Some(parent) => parent,
        None => match &file_config {
            Some(config) => config.parent_directory.clone(),
            None => prompt.parent_directory()?,
        },
    };

    let sensor_folders = match args.sensors {
        Some(sensors) => <[String; 3]>::try_from(sensors)
            .map_err(|sensors| anyhow!("expected 3 sensor folders, got {}", sensors.len()))?,
        None => match &file_config {
            Some(config) => config.sensor_folders.clone(),
            None => [
                prompt.sensor_folder(1)?,
                prompt.sensor_folder(2)?,
                prompt.sensor_folder(3)?,
            ],
        },
    };

    let mut config = AnalysisConfig::new(parent_directory, sensor_folders);
    if let Some(file_config) = file_config {
        config.output_path = file_config.output_path;
        config.pitch_domain = file_config.pitch_domain;
    }
    if let Some(output) = args.output {
        config.output_path = output;
    }
    if args.strict_pitch {
        config.pitch_domain = PitchDomain::Strict;
    }

    Ok(config)
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .map_or(false, |err| err.kind() == io::ErrorKind::NotFound)
    })
}
