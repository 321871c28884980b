mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod ui;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run_app().await {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("🧪 ChemLab CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let result = match cli.command {
        Commands::List => commands::list::run(),
        Commands::Show(args) => commands::show::run(args),
        Commands::Render(args) => commands::render::run(args),
        Commands::Explain(args) => {
            info!("Dispatching to 'explain' command.");
            let app = config::build_config(&cli.service)?;
            commands::explain::run(args, &app).await
        }
        Commands::Experiment(args) => {
            info!("Dispatching to 'experiment' command.");
            let app = config::build_config(&cli.service)?;
            commands::experiment::run(args, &app).await
        }
        Commands::Quiz(args) => {
            info!("Dispatching to 'quiz' command.");
            let app = config::build_config(&cli.service)?;
            commands::quiz::run(args, &app).await
        }
        Commands::Lab(args) => {
            info!("Dispatching to 'lab' command.");
            let app = config::build_config(&cli.service)?;
            commands::lab::run(args, &app).await
        }
    };

    if let Err(e) = &result {
        error!("❌ Command failed: {}", e);
    }
    result
}
