//! qds-tools: Quality Design Score calculator
//!
//! Scores a software design questionnaire across ten quality attributes.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use qds_tools::{
    cli,
    config::{AppConfig, CliOverrides, CONFIG_FILE_NAMES},
    pipeline::exit_codes,
    reports::ReportFormat,
    scoring::SuggestionPolicy,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with attribute info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nAttributes:",
        "\n  modularity, maintainability, reliability, performance, scalability,",
        "\n  security, usability, interoperability, testability, portability",
        "\n\nOutput Formats:",
        "\n  summary, json, markdown"
    )
}

#[derive(Parser)]
#[command(name = "qds-tools")]
#[command(version, long_version = build_long_version())]
#[command(about = "Quality Design Score calculator", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Score below --min-score
    2  Responses incomplete
    3  Total weight is zero / error occurred

EXAMPLES:
    # Start from an empty response sheet
    qds-tools template -O answers.yaml

    # Score it in the terminal
    qds-tools score answers.yaml

    # CI gate with JSON output
    qds-tools score answers.yaml -o json --min-score 6")]
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

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Response sheet (JSON or YAML)
    sheet: PathBuf,

    /// Output format (auto: summary if interactive, json otherwise)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Which attributes receive improvement suggestions
    #[arg(long, value_enum)]
    policy: Option<SuggestionPolicy>,

    /// Single-line JSON, Markdown without the metadata block
    #[arg(long)]
    compact: bool,

    /// Exit with code 1 if the score is below this value (0-10)
    #[arg(long)]
    min_score: Option<f64>,
}

/// Arguments for the `replay` subcommand
#[derive(Parser)]
struct ReplayArgs {
    /// Replay script (JSON or YAML)
    script: PathBuf,

    /// Output format for rendered steps
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Which attributes receive improvement suggestions
    #[arg(long, value_enum)]
    policy: Option<SuggestionPolicy>,

    /// Single-line JSON, Markdown without the metadata block
    #[arg(long)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a response sheet
    Score(ScoreArgs),

    /// Report unanswered fields without scoring
    Check {
        /// Response sheet (JSON or YAML)
        sheet: PathBuf,
    },

    /// List the quality attributes and their suggestions
    Attributes {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write an empty response sheet
    Template {
        /// Output file path (stdout if not specified)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },

    /// Run a scripted questionnaire session
    Replay(ReplayArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
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
    /// Generate an example .qds-tools.yaml in the current directory
    Init,
}

/// Layer CLI flags over the discovered config file.
fn effective_config(cli: &Cli, overrides: CliOverrides) -> AppConfig {
    let overrides = CliOverrides {
        no_color: cli.no_color,
        quiet: cli.quiet,
        ..overrides
    };
    let (config, loaded_from) = AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }
    config
}

fn main() {
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

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_codes::ERROR
        }
    };
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Commands::Score(args) => {
            let config = effective_config(
                cli,
                CliOverrides {
                    suggestion_policy: args.policy,
                    format: args.output,
                    output_file: args.output_file.clone(),
                    compact: args.compact,
                    min_score: args.min_score,
                    ..CliOverrides::default()
                },
            );
            cli::run_score(&args.sheet, &config)
        }

        Commands::Check { sheet } => cli::run_check(sheet, cli.quiet),

        Commands::Attributes { json } => cli::run_attributes(*json),

        Commands::Template { output_file } => cli::run_template(output_file.clone(), cli.quiet),

        Commands::Replay(args) => {
            let config = effective_config(
                cli,
                CliOverrides {
                    suggestion_policy: args.policy,
                    format: args.output,
                    output_file: args.output_file.clone(),
                    compact: args.compact,
                    ..CliOverrides::default()
                },
            );
            cli::run_replay_script(&args.script, &config)
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "qds-tools", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema =
                qds_tools::config::generate_json_schema().context("failed to build schema")?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    qds_tools::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for path in qds_tools::config::search_paths() {
                    eprintln!("  {}", path.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match qds_tools::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".qds-tools.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = qds_tools::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}
