pub mod experiment;
pub mod explain;
pub mod lab;
pub mod list;
pub mod quiz;
pub mod render;
pub mod show;

use crate::config::AppConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use chemlab::core::catalog::Catalog;
use chemlab::engine::gemini::GeminiClient;
use chemlab::engine::progress::ProgressReporter;
use chemlab::engine::service::ExplanationService;
use chemlab::workflows::controller::Controller;
use tracing::{info, warn};

pub type LabController = Controller<'static, GeminiClient>;

/// Builds a controller on the built-in catalog with a terminal spinner,
/// switched to `molecule` when given.
pub fn open_controller(app: &AppConfig, molecule: Option<&str>) -> Result<LabController> {
    let client = GeminiClient::new(&app.service)?;
    if !app.service.has_credential() {
        warn!(
            "No API key configured. Set ${} or `service.api-key` to enable AI answers.",
            app.api_key_env
        );
    }
    info!("Using model {} at {}", app.service.model, client.url());

    let progress = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress.get_callback());
    let mut controller =
        Controller::new(Catalog::global(), ExplanationService::new(client))?.with_reporter(reporter);

    if let Some(id) = molecule {
        controller.select_molecule(id)?;
    }
    Ok(controller)
}
