use super::presenter::Choice;
use super::session::{Outcome, Phase, Request, Response, Session, SessionError};
use crate::core::catalog::Catalog;
use crate::core::render::Hit;
use crate::engine::client::TextGenerator;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::service::{ExplanationService, Operation};
use nalgebra::Point2;
use tracing::{info, instrument};

/// Drives a [`Session`] against an [`ExplanationService`].
///
/// Each request-issuing method awaits its request to completion, so one owner
/// can only ever have one request outstanding; the session's Loading gate
/// still applies underneath.
pub struct Controller<'c, M> {
    session: Session<'c>,
    service: ExplanationService<M>,
    reporter: ProgressReporter<'c>,
}

impl<'c, M: TextGenerator> Controller<'c, M> {
    pub fn new(catalog: &'c Catalog, service: ExplanationService<M>) -> Result<Self, SessionError> {
        Ok(Self {
            session: Session::new(catalog)?,
            service,
            reporter: ProgressReporter::new(),
        })
    }

    pub fn with_reporter(mut self, reporter: ProgressReporter<'c>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn session(&self) -> &Session<'c> {
        &self.session
    }

    pub fn service(&self) -> &ExplanationService<M> {
        &self.service
    }

    pub fn select_molecule(&mut self, id: &str) -> Result<(), SessionError> {
        self.session.select_molecule(id)?;
        info!(molecule = id, "Molecule loaded");
        Ok(())
    }

    /// Explains the atom or bond `id` of the active molecule.
    pub async fn click(&mut self, id: &str) -> Result<(), SessionError> {
        let request = self.session.begin_explain(id)?;
        self.execute(request).await;
        Ok(())
    }

    /// Hit-tests a canvas point and explains whatever is there. Returns the
    /// id that was hit, or `None` for a click on empty canvas.
    pub async fn click_at(&mut self, point: Point2<f64>) -> Result<Option<String>, SessionError> {
        let scene = self.session.scene();
        let id = match scene.hit_test(&point) {
            Some(Hit::Atom(id) | Hit::Bond(id)) => id.to_string(),
            None => return Ok(None),
        };
        self.click(&id).await?;
        Ok(Some(id))
    }

    pub async fn lab_action(&mut self, label: &str) -> Result<(), SessionError> {
        let request = self.session.begin_experiment(label)?;
        self.execute(request).await;
        Ok(())
    }

    /// Generates a quiz. On success the session is left in
    /// [`Phase::QuizOpen`]; otherwise the info text carries the failure.
    pub async fn start_quiz(&mut self) -> Result<Phase, SessionError> {
        let request = self.session.begin_quiz()?;
        self.execute(request).await;
        Ok(self.session.phase())
    }

    pub fn answer(&mut self, index: usize) -> Result<Choice, SessionError> {
        self.session.answer(index)
    }

    pub fn close_quiz(&mut self) -> Result<(), SessionError> {
        self.session.close_quiz()
    }

    #[instrument(skip_all, fields(operation = %request.operation()))]
    async fn execute(&mut self, request: Request<'c>) {
        let operation = request.operation();
        let status = (operation != Operation::Quiz).then(|| self.session.info().to_string());
        self.reporter
            .report(Progress::LoadingStarted { operation, status });

        let outcome: Outcome = match request {
            Request::Explain { molecule, target } => self
                .service
                .explain_element(molecule, target)
                .await
                .map(Response::Text),
            Request::Experiment { molecule, action } => self
                .service
                .run_experiment(molecule, action)
                .await
                .map(Response::Text),
            Request::Quiz { molecule } => self
                .service
                .generate_quiz(molecule)
                .await
                .map(Response::Quiz),
        };

        let succeeded = outcome.is_ok();
        self.session.complete(outcome);
        self.reporter.report(Progress::LoadingFinished {
            operation,
            succeeded,
        });
    }
}
