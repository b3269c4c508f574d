//! cvss2: CVSS v2 vector parser and score calculator

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use cvss2_tools::{
    cli::{self, exit_codes, VectorInput},
    config::{self, AppConfig, Validatable},
    corpus::CorpusMode,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cvss2")]
#[command(version)]
#[command(about = "CVSS v2 vector parser and score calculator", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  All vectors valid / all corpus entries verified
    1  Invalid vector or corpus mismatch
    3  Error occurred

EXAMPLES:
    # Score a vector
    cvss2 score AV:N/AC:L/Au:N/C:P/I:P/A:P

    # Red Hat style vector with declared base score
    cvss2 rh 7.5/AV:N/AC:L/Au:N/C:P/I:P/A:P

    # Minimal CVSS v2.0 JSON
    cvss2 --format json score --minimal AV:N/AC:L/Au:N/C:C/I:C/A:C/E:F

    # Verify an oracle corpus through the RH path
    cvss2 check --rh tests/data/vectors_simple2")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, global = true, value_enum)]
    format: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long, global = true)]
    output_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `score` and `rh` subcommands
#[derive(Parser)]
struct VectorArgs {
    /// Vectors to parse and score
    #[arg(required = true)]
    vectors: Vec<String>,

    /// Omit Not Defined metrics and absent scores from JSON output
    #[arg(long)]
    minimal: bool,
}

/// Arguments for the `check` subcommand
#[derive(Parser)]
struct CheckArgs {
    /// Corpus files with `vector - (base, temporal, environmental)` lines
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Verify through the Red Hat `<score>/<vector>` path
    #[arg(long)]
    rh: bool,

    /// Stop after the first file with failures
    #[arg(long)]
    fail_fast: bool,

    /// Maximum failures listed per file (0 = all)
    #[arg(long)]
    max_failures: Option<usize>,

    /// Verification threads (0 = one per CPU)
    #[arg(long, env = "CVSS2_TOOLS_THREADS")]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and score CVSS2 vectors
    Score(VectorArgs),

    /// Parse Red Hat style `<score>/<vector>` strings
    Rh(VectorArgs),

    /// Verify oracle corpus files against the calculator
    Check(CheckArgs),

    /// Show the effective configuration, its JSON Schema, or an example file
    Config {
        /// Print the JSON Schema for the config file format
        #[arg(long, conflicts_with = "example")]
        schema: bool,

        /// Print an example .cvss2-tools.yaml
        #[arg(long)]
        example: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

fn init_tracing(verbose: bool, quiet: bool) {
    let log_level = if quiet {
        "error"
    } else if verbose {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Score(args) => {
            let config = effective_config(&cli, args.minimal, None)?;
            cli::run_score(&args.vectors, VectorInput::Plain, &config)
        }

        Commands::Rh(args) => {
            let config = effective_config(&cli, args.minimal, None)?;
            cli::run_score(&args.vectors, VectorInput::RedHat, &config)
        }

        Commands::Check(args) => {
            let config = effective_config(&cli, false, Some(args))?;
            let mode = if args.rh {
                CorpusMode::RedHat
            } else {
                CorpusMode::Plain
            };
            cli::run_check(&args.files, mode, &config)
        }

        Commands::Config { schema, example } => {
            let content = if *schema {
                config::generate_json_schema().context("failed to generate schema")?
            } else if *example {
                config::generate_example_config()
            } else {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                match &loaded_from {
                    Some(path) => eprintln!("# Loaded from: {}", path.display()),
                    None => eprintln!("# No config file found; showing defaults"),
                }
                serde_yaml_ng::to_string(&config).context("failed to serialize config")?
            };
            print!("{content}");
            if !content.ends_with('\n') {
                println!();
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "cvss2", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    }
}

/// Layer command-line flags over the discovered config file.
fn effective_config(cli: &Cli, minimal: bool, check: Option<&CheckArgs>) -> Result<AppConfig> {
    let mut overrides = AppConfig::default();
    overrides.output.file.clone_from(&cli.output_file);
    overrides.output.no_color = cli.no_color;
    overrides.output.minimal_json = minimal;
    if let Some(args) = check {
        overrides.check.fail_fast = args.fail_fast;
    }

    let (mut config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
    if let Some(path) = loaded_from {
        tracing::info!("Using config file {}", path.display());
    }

    // Explicit values win even when they equal the defaults
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(args) = check {
        if let Some(max) = args.max_failures {
            config.check.max_reported_failures = max;
        }
        if let Some(threads) = args.threads {
            config.check.threads = threads;
        }
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for error in &errors {
            tracing::error!("{error}");
        }
        bail!("invalid configuration ({} errors)", errors.len());
    }
    Ok(config)
}
