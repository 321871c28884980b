use super::open_controller;
use crate::cli::ExplainArgs;
use crate::config::AppConfig;
use crate::error::Result;
use crate::ui;
use tracing::info;

pub async fn run(args: ExplainArgs, app: &AppConfig) -> Result<()> {
    let mut controller = open_controller(app, Some(&args.molecule))?;
    info!("Explaining {} of {}", args.element, args.molecule);
    controller.click(&args.element).await?;
    print!("{}", ui::info_panel(controller.session()));
    Ok(())
}
