use super::open_controller;
use crate::cli::ExperimentArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::ui;
use tracing::info;

pub async fn run(args: ExperimentArgs, app: &AppConfig) -> Result<()> {
    let mut controller = open_controller(app, Some(&args.molecule))?;
    let session = controller.session();
    let Some(label) = session.resolve_action(&args.action) else {
        return Err(CliError::Argument(format!(
            "'{}' is not a lab action of {}. Available:\n{}",
            args.action,
            args.molecule,
            ui::lab_actions(session.molecule())
        )));
    };
    info!("Running '{}' on {}", label, args.molecule);
    controller.lab_action(label).await?;
    print!("{}", ui::info_panel(controller.session()));
    Ok(())
}
