//! imgsig: identify image formats by their magic numbers
//!
//! Detects PNG, JPEG, GIF, TIFF, BMP and WEBP content regardless of the file
//! extension, and validates claimed extensions.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use imgsig::{
    cli,
    config::{AppConfig, CheckConfig, OutputConfig, ScanConfig},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported image formats:",
        "\n  PNG, JPEG (JFIF, Exif), GIF (87a, 89a), TIFF, BMP, WEBP",
        "\n\nOutput formats:",
        "\n  summary, table, json"
    )
}

#[derive(Parser)]
#[command(name = "imgsig")]
#[command(version, long_version = build_long_version())]
#[command(about = "Identify image formats by their magic numbers", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  All files identified and matched their extensions
    1  Extension mismatch (or unknown format with --fail-on-unknown)
    3  Error occurred

EXAMPLES:
    # Identify uploads
    imgsig identify uploads/*

    # Reject files whose content does not match their extension
    imgsig identify --check-extensions uploads/* -o json

    # Check one file against a claimed extension
    imgsig check avatar.bin --ext png")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `identify` subcommand
#[derive(Parser)]
struct IdentifyArgs {
    /// Files to identify
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Check each file against its own extension (files without one count as mismatches)
    #[arg(short = 'c', long)]
    check_extensions: bool,

    /// Exit with code 1 if any file's format is not recognized
    #[arg(long)]
    fail_on_unknown: bool,

    /// Worker threads (defaults to CPU count)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Output format (auto detects TTY: table if interactive, summary otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `check` subcommand
#[derive(Parser)]
struct CheckArgs {
    /// File to check
    file: PathBuf,

    /// Claimed extension (defaults to the file's own extension)
    #[arg(short, long)]
    ext: Option<String>,

    /// Compare the extension exactly, without lowercasing or stripping a leading dot
    #[arg(long)]
    no_normalize: bool,

    /// Output format (auto detects TTY: table if interactive, summary otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Identify the format of one or more files
    Identify(IdentifyArgs),

    /// Check whether a file matches a claimed extension
    Check(CheckArgs),

    /// List supported formats and their signatures
    Formats {
        /// Output format
        #[arg(short, long, default_value = "auto")]
        output: ReportFormat,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .imgsig.yaml in the current directory
    Init,
    /// Print the JSON schema for config files
    Schema,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(exit_codes::ERROR);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match cli.command {
        Commands::Identify(args) => {
            let overrides = AppConfig {
                output: OutputConfig {
                    format: args.output,
                    file: args.output_file,
                    no_color: cli.no_color,
                },
                check: CheckConfig {
                    normalize_extensions: true,
                    fail_on_unknown: args.fail_on_unknown,
                },
                scan: ScanConfig { jobs: args.jobs },
            };
            let (config, _) = AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides)?;
            let exit_code = cli::run_identify(args.files, args.check_extensions, &config)?;
            if exit_code != exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Check(args) => {
            let overrides = AppConfig {
                output: OutputConfig {
                    format: args.output,
                    file: args.output_file,
                    no_color: cli.no_color,
                },
                check: CheckConfig {
                    normalize_extensions: !args.no_normalize,
                    fail_on_unknown: false,
                },
                scan: ScanConfig::default(),
            };
            let (config, _) = AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides)?;
            let exit_code = cli::run_check(args.file, args.ext, &config)?;
            if exit_code != exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Formats { output } => {
            let overrides = AppConfig::builder()
                .output_format(output)
                .no_color(cli.no_color)
                .build();
            let (config, _) = AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides)?;
            cli::run_formats(&config)?;
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "imgsig", &mut io::stdout());
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = imgsig::config::load_or_default(cli.config.as_deref())?;
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    ::dirs::config_dir().map(|p| p.join("imgsig").display().to_string()),
                    ::dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                match imgsig::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".imgsig.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, imgsig::config::generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
            ConfigAction::Schema => {
                println!("{}", imgsig::config::generate_json_schema()?);
                Ok(())
            }
        },
    }
}
