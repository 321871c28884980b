use super::client::{GenerationRequest, TextGenerator};
use super::error::ServiceError;
use super::messages::{NO_EXPERIMENT_RESULT, NO_EXPLANATION};
use super::prompts;
use crate::core::models::molecule::{Molecule, Selectable};
use crate::core::quiz::{Quiz, parse_quiz};
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// The three request kinds the service issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Explain,
    Experiment,
    Quiz,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Explain => "explain",
            Operation::Experiment => "experiment",
            Operation::Quiz => "quiz",
        })
    }
}

/// Builds prompts, sends them through a [`TextGenerator`] and interprets the
/// replies.
///
/// The service keeps no state between calls. A missing credential is detected
/// before any request is made.
pub struct ExplanationService<M> {
    model: M,
}

impl<M: TextGenerator> ExplanationService<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn is_configured(&self) -> bool {
        self.model.is_configured()
    }

    /// Explains a clicked atom or bond of `molecule`.
    ///
    /// An empty reply yields a fixed "no explanation" text rather than an error.
    #[instrument(skip_all, fields(molecule = %molecule.id, element = %selection.id()))]
    pub async fn explain_element(
        &self,
        molecule: &Molecule,
        selection: Selectable<'_>,
    ) -> Result<String, ServiceError> {
        let prompt = prompts::element_prompt(molecule, selection);
        self.complete_text(&prompt, NO_EXPLANATION).await
    }

    /// Simulates the lab action labelled `action` on `molecule`.
    #[instrument(skip_all, fields(molecule = %molecule.id, action = %action))]
    pub async fn run_experiment(
        &self,
        molecule: &Molecule,
        action: &str,
    ) -> Result<String, ServiceError> {
        let prompt = prompts::experiment_prompt(molecule, action);
        self.complete_text(&prompt, NO_EXPERIMENT_RESULT).await
    }

    /// Asks for one multiple-choice question about `molecule`.
    ///
    /// The reply is validated locally; an empty reply counts as an object with
    /// no question.
    #[instrument(skip_all, fields(molecule = %molecule.id))]
    pub async fn generate_quiz(&self, molecule: &Molecule) -> Result<Quiz, ServiceError> {
        self.ensure_configured()?;
        let prompt = prompts::quiz_prompt(molecule);
        let schema = Quiz::response_schema();
        debug!(%prompt, "Quiz prompt");

        let text = self
            .model
            .generate(GenerationRequest::json(&prompt, &schema))
            .await
            .inspect_err(|e| warn!(error = %e, "Quiz request failed"))?;

        let payload = if text.trim().is_empty() { "{}" } else { text.as_str() };
        let quiz = parse_quiz(payload).map_err(|e| {
            warn!(error = %e, "Rejected quiz payload");
            ServiceError::from(e)
        })?;
        info!(options = quiz.options.len(), "Quiz generated");
        Ok(quiz)
    }

    fn ensure_configured(&self) -> Result<(), ServiceError> {
        if self.model.is_configured() {
            Ok(())
        } else {
            info!("No API credential configured; skipping request");
            Err(ServiceError::MissingCredential)
        }
    }

    async fn complete_text(&self, prompt: &str, fallback: &str) -> Result<String, ServiceError> {
        self.ensure_configured()?;
        debug!(%prompt, "Prompt");
        let text = self
            .model
            .generate(GenerationRequest::text(prompt))
            .await
            .inspect_err(|e| warn!(error = %e, "Request failed"))?;
        if text.trim().is_empty() {
            warn!("Model returned no text");
            Ok(fallback.to_string())
        } else {
            Ok(text)
        }
    }
}
