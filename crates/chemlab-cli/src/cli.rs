use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "ChemLab Contributors",
    version,
    about = "ChemLab CLI - an interactive chemical-bond lab. Explore ethene, ethane and ethyne, ask an AI tutor about any atom or bond, run virtual experiments and take quizzes.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub service: ServiceArgs,
}

/// Options for the AI explanation backend, shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ServiceArgs {
    /// Path to a configuration file in TOML format.
    /// Defaults to `config.toml` in the user configuration directory, if present.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the model name (e.g., 'gemini-2.5-flash').
    #[arg(long, global = true, value_name = "NAME")]
    pub model: Option<String>,

    /// Override the API base URL.
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Override the request timeout in seconds.
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Read the API key from this environment variable instead of `API_KEY`.
    #[arg(long, global = true, value_name = "VAR")]
    pub api_key_env: Option<String>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S service.model=gemini-2.5-pro
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", global = true)]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the molecules in the catalog.
    List,
    /// Show a molecule's atoms, bonds and lab actions.
    Show(ShowArgs),
    /// Write a molecule diagram as SVG.
    Render(RenderArgs),
    /// Ask the AI tutor about one atom or bond.
    Explain(ExplainArgs),
    /// Run a virtual experiment on a molecule.
    Experiment(ExperimentArgs),
    /// Generate a quiz question and answer it.
    Quiz(QuizArgs),
    /// Start an interactive lab session.
    Lab(LabArgs),
}

/// Arguments for the `show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Molecule id (e.g., 'ethene').
    #[arg(required = true)]
    pub molecule: String,

    /// Print the molecule definition as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Molecule id (e.g., 'ethene').
    #[arg(required = true)]
    pub molecule: String,

    /// Highlight this atom or bond.
    #[arg(short, long, value_name = "ID")]
    pub select: Option<String>,

    /// Output SVG file. Writes to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `explain` subcommand.
#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Molecule id (e.g., 'ethene').
    #[arg(required = true)]
    pub molecule: String,

    /// Atom or bond id (e.g., 'b1', 'c1').
    #[arg(required = true, value_name = "ID")]
    pub element: String,
}

/// Arguments for the `experiment` subcommand.
#[derive(Args, Debug)]
pub struct ExperimentArgs {
    /// Molecule id (e.g., 'ethene').
    #[arg(required = true)]
    pub molecule: String,

    /// Lab action label, or its 1-based position as listed by `show`.
    #[arg(required = true, value_name = "ACTION")]
    pub action: String,
}

/// Arguments for the `quiz` subcommand.
#[derive(Args, Debug)]
pub struct QuizArgs {
    /// Molecule id (e.g., 'ethene').
    #[arg(required = true)]
    pub molecule: String,

    /// Answer with this 1-based option instead of prompting.
    #[arg(short, long, value_name = "N")]
    pub answer: Option<usize>,
}

/// Arguments for the `lab` subcommand.
#[derive(Args, Debug)]
pub struct LabArgs {
    /// Molecule to start with. Defaults to the first catalog entry.
    pub molecule: Option<String>,
}
