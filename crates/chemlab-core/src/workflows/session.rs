use super::presenter::{Choice, QuizPresenter};
use crate::core::catalog::Catalog;
use crate::core::models::molecule::{Molecule, Selectable};
use crate::core::quiz::Quiz;
use crate::core::render::{Scene, render};
use crate::engine::error::ServiceError;
use crate::engine::messages;
use crate::engine::service::Operation;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// A request of this kind is outstanding.
    Loading(Operation),
    QuizOpen,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("A request is already in progress")]
    Busy,
    #[error("A quiz is open; close it first")]
    QuizOpen,
    #[error("No quiz is open")]
    NoQuiz,
    #[error("Unknown molecule '{0}'")]
    UnknownMolecule(String),
    #[error("'{id}' is not an atom or bond of {molecule}")]
    UnknownElement { molecule: String, id: String },
    #[error("'{label}' is not a lab action of {molecule}")]
    UnknownAction { molecule: String, label: String },
    #[error("The catalog has no molecules")]
    EmptyCatalog,
}

/// A request the session has committed to. Whoever drives the session must
/// execute it and hand the outcome back through [`Session::complete`].
#[derive(Debug, Clone, PartialEq)]
pub enum Request<'c> {
    Explain {
        molecule: &'c Molecule,
        target: Selectable<'c>,
    },
    Experiment {
        molecule: &'c Molecule,
        action: &'c str,
    },
    Quiz {
        molecule: &'c Molecule,
    },
}

impl Request<'_> {
    pub fn operation(&self) -> Operation {
        match self {
            Request::Explain { .. } => Operation::Explain,
            Request::Experiment { .. } => Operation::Experiment,
            Request::Quiz { .. } => Operation::Quiz,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Text(String),
    Quiz(Quiz),
}

pub type Outcome = Result<Response, ServiceError>;

/// The interaction state of one learner: active molecule, selection, info
/// panel text and the Idle / Loading / QuizOpen phase.
///
/// Transitions are synchronous. Issuing a request is split into `begin_*`,
/// which enforces the Loading gate and returns a [`Request`], and
/// [`Session::complete`], which applies the result.
#[derive(Debug, Clone)]
pub struct Session<'c> {
    catalog: &'c Catalog,
    molecule: &'c Molecule,
    selection: Option<String>,
    info: String,
    phase: Phase,
    quiz: Option<QuizPresenter>,
}

impl<'c> Session<'c> {
    /// Starts on the first catalog molecule with the welcome text.
    pub fn new(catalog: &'c Catalog) -> Result<Self, SessionError> {
        let molecule = catalog.first().ok_or(SessionError::EmptyCatalog)?;
        Ok(Self {
            catalog,
            molecule,
            selection: None,
            info: messages::WELCOME.to_string(),
            phase: Phase::Idle,
            quiz: None,
        })
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn molecule(&self) -> &'c Molecule {
        self.molecule
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Text of the info panel.
    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading(_))
    }

    pub fn quiz(&self) -> Option<&QuizPresenter> {
        self.quiz.as_ref()
    }

    /// The diagram for the active molecule and selection.
    pub fn scene(&self) -> Scene {
        render(self.molecule, self.selection.as_deref())
    }

    /// Switches the active molecule and clears the selection.
    ///
    /// Allowed in any phase. An outstanding request is not cancelled and its
    /// result will still replace the info text when it completes.
    pub fn select_molecule(&mut self, id: &str) -> Result<(), SessionError> {
        let molecule = self
            .catalog
            .get(id)
            .ok_or_else(|| SessionError::UnknownMolecule(id.to_string()))?;
        if self.is_loading() {
            debug!(molecule = id, "Switching molecule while a request is outstanding");
        }
        self.molecule = molecule;
        self.selection = None;
        self.info = messages::molecule_loaded(&molecule.name, &molecule.description);
        Ok(())
    }

    /// Finds a lab action by exact label or by 1-based position.
    pub fn resolve_action(&self, key: &str) -> Option<&'c str> {
        let molecule: &'c Molecule = self.molecule;
        if let Some(label) = molecule.lab_action(key) {
            return Some(label);
        }
        key.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| molecule.lab_actions.get(i))
            .map(String::as_str)
    }

    /// Selects the atom or bond `id` and starts explaining it.
    pub fn begin_explain(&mut self, id: &str) -> Result<Request<'c>, SessionError> {
        self.ensure_ready()?;
        let molecule = self.molecule;
        let target = molecule
            .selectable(id)
            .ok_or_else(|| SessionError::UnknownElement {
                molecule: molecule.id.clone(),
                id: id.to_string(),
            })?;
        self.selection = Some(target.id().to_string());
        self.info = match target {
            Selectable::Bond(_) => messages::ANALYZING_BOND.to_string(),
            Selectable::Atom(_) => messages::ANALYZING_ATOM.to_string(),
        };
        self.phase = Phase::Loading(Operation::Explain);
        Ok(Request::Explain { molecule, target })
    }

    /// Starts the lab action `label`. The selection is left as is.
    pub fn begin_experiment(&mut self, label: &str) -> Result<Request<'c>, SessionError> {
        self.ensure_ready()?;
        let molecule = self.molecule;
        let action = molecule
            .lab_actions
            .iter()
            .find(|a| a.as_str() == label)
            .ok_or_else(|| SessionError::UnknownAction {
                molecule: molecule.id.clone(),
                label: label.to_string(),
            })?;
        self.info = messages::running_experiment(action);
        self.phase = Phase::Loading(Operation::Experiment);
        Ok(Request::Experiment { molecule, action })
    }

    /// Starts generating a quiz. The info text is left as is meanwhile.
    pub fn begin_quiz(&mut self) -> Result<Request<'c>, SessionError> {
        self.ensure_ready()?;
        self.phase = Phase::Loading(Operation::Quiz);
        Ok(Request::Quiz {
            molecule: self.molecule,
        })
    }

    /// Applies the outcome of the outstanding request and leaves Loading.
    ///
    /// A quiz only completes a quiz request and text only completes an explain
    /// or experiment request; a mismatched response ends the request without
    /// touching the info text. Returns the completed operation, or `None` if
    /// nothing was outstanding or the response was discarded.
    pub fn complete(&mut self, outcome: Outcome) -> Option<Operation> {
        let Phase::Loading(operation) = self.phase else {
            warn!("Discarding a result with no outstanding request");
            return None;
        };
        self.phase = Phase::Idle;
        let matches = match &outcome {
            Ok(Response::Quiz(_)) => operation == Operation::Quiz,
            Ok(Response::Text(_)) => operation != Operation::Quiz,
            Err(_) => true,
        };
        if !matches {
            warn!(%operation, "Discarding a response of the wrong kind");
            return None;
        }
        match outcome {
            Ok(Response::Text(text)) => self.info = text,
            Ok(Response::Quiz(quiz)) => {
                self.quiz = Some(QuizPresenter::new(quiz));
                self.phase = Phase::QuizOpen;
            }
            Err(err) => {
                warn!(%operation, error = %err, "Request failed");
                self.info = messages::failure_message(operation, &err).to_string();
            }
        }
        Some(operation)
    }

    /// Picks option `index` of the open quiz.
    pub fn answer(&mut self, index: usize) -> Result<Choice, SessionError> {
        match (&self.phase, self.quiz.as_mut()) {
            (Phase::QuizOpen, Some(presenter)) => Ok(presenter.choose(index)),
            _ => Err(SessionError::NoQuiz),
        }
    }

    /// Closes the quiz, discarding it and any answer.
    pub fn close_quiz(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::QuizOpen {
            return Err(SessionError::NoQuiz);
        }
        self.quiz = None;
        self.phase = Phase::Idle;
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Idle => Ok(()),
            Phase::Loading(_) => Err(SessionError::Busy),
            Phase::QuizOpen => Err(SessionError::QuizOpen),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::MalformedKind;
    use crate::engine::prompts;
    use crate::workflows::presenter::{OptionStyle, Verdict};

    fn session() -> Session<'static> {
        Session::new(Catalog::global()).unwrap()
    }

    fn quiz(answer: &str) -> Quiz {
        Quiz {
            question: "乙烯分子的空间构型是？".into(),
            options: vec!["直线形".into(), "四面体".into(), "平面形".into()],
            answer: answer.into(),
            explanation: "乙烯六个原子共平面。".into(),
        }
    }

    #[test]
    fn starts_idle_on_first_molecule_with_welcome() {
        let s = session();
        assert_eq!(s.molecule().id, "ethene");
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.selection(), None);
        assert_eq!(s.info(), messages::WELCOME);
        assert!(s.quiz().is_none());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let empty = Catalog::new(Vec::new());
        assert_eq!(Session::new(&empty).unwrap_err(), SessionError::EmptyCatalog);
    }

    #[test]
    fn select_molecule_clears_selection_and_shows_description() {
        let mut s = session();
        s.begin_explain("b1").unwrap();
        s.complete(Ok(Response::Text("ok".into())));
        assert_eq!(s.selection(), Some("b1"));

        s.select_molecule("ethane").unwrap();
        let ethane = Catalog::global().get("ethane").unwrap();
        assert_eq!(s.molecule().id, "ethane");
        assert_eq!(s.selection(), None);
        assert_eq!(
            s.info(),
            format!(
                "已加载 {}。\n{}\n\n请尝试点击化学键进行学习，或在右侧运行虚拟实验。",
                ethane.name, ethane.description
            )
        );
    }

    #[test]
    fn select_unknown_molecule_changes_nothing() {
        let mut s = session();
        assert_eq!(
            s.select_molecule("benzene"),
            Err(SessionError::UnknownMolecule("benzene".into()))
        );
        assert_eq!(s.molecule().id, "ethene");
        assert_eq!(s.info(), messages::WELCOME);
    }

    #[test]
    fn clicking_double_bond_builds_explain_request() {
        let mut s = session();
        let request = s.begin_explain("b1").unwrap();
        assert_eq!(s.phase(), Phase::Loading(Operation::Explain));
        assert_eq!(s.selection(), Some("b1"));
        assert_eq!(s.info(), "正在分析化学键性质...");

        let Request::Explain { molecule, target } = request else {
            panic!("expected an explain request");
        };
        let prompt = prompts::element_prompt(molecule, target);
        assert!(prompt.contains("C=C 双键 (1σ + 1π)"));
        assert!(prompt.contains("乙烯 (Ethene)"));
        assert!(prompt.contains("C₂H₄"));
    }

    #[test]
    fn clicking_atom_shows_atom_loading_text() {
        let mut s = session();
        s.begin_explain("h1").unwrap();
        assert_eq!(s.info(), "正在分析原子性质...");
        assert_eq!(s.scene().atom("h1").map(|a| a.selected), Some(true));
    }

    #[test]
    fn unknown_element_is_rejected_without_state_change() {
        let mut s = session();
        assert!(matches!(
            s.begin_explain("b9"),
            Err(SessionError::UnknownElement { .. })
        ));
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.selection(), None);
        assert_eq!(s.info(), messages::WELCOME);
    }

    #[test]
    fn missing_credential_shows_fallback_and_returns_to_idle() {
        let mut s = session();
        s.begin_explain("b1").unwrap();
        assert_eq!(
            s.complete(Err(ServiceError::MissingCredential)),
            Some(Operation::Explain)
        );
        assert_eq!(s.info(), "请配置 API Key 以获取 AI 解释。");
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.selection(), Some("b1"));
    }

    #[test]
    fn lab_action_keeps_selection_and_quotes_label() {
        let mut s = session();
        s.begin_explain("b1").unwrap();
        s.complete(Ok(Response::Text("π 键".into())));

        let request = s.begin_experiment("加氢反应 (H₂)").unwrap();
        assert_eq!(s.info(), "正在模拟实验: 加氢反应 (H₂)...");
        assert_eq!(s.selection(), Some("b1"));
        assert_eq!(
            request,
            Request::Experiment {
                molecule: s.molecule(),
                action: "加氢反应 (H₂)",
            }
        );
        s.complete(Ok(Response::Text("生成乙烷".into())));
        assert_eq!(s.info(), "生成乙烷");
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn lab_action_of_other_molecule_is_rejected() {
        let mut s = session();
        assert!(matches!(
            s.begin_experiment("光照卤代反应"),
            Err(SessionError::UnknownAction { .. })
        ));
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn resolve_action_accepts_label_or_one_based_index() {
        let s = session();
        assert_eq!(s.resolve_action("加入溴水 (Br₂)"), Some("加入溴水 (Br₂)"));
        assert_eq!(s.resolve_action("3"), Some("加氢反应 (H₂)"));
        assert_eq!(s.resolve_action("0"), None);
        assert_eq!(s.resolve_action("9"), None);
        assert_eq!(s.resolve_action("燃烧分析"), None);
    }

    #[test]
    fn loading_gate_refuses_second_request() {
        let mut s = session();
        s.begin_explain("b1").unwrap();
        assert_eq!(s.begin_explain("b2"), Err(SessionError::Busy));
        assert_eq!(s.begin_experiment("加入溴水 (Br₂)"), Err(SessionError::Busy));
        assert_eq!(s.begin_quiz(), Err(SessionError::Busy));
        assert_eq!(s.selection(), Some("b1"));
        assert_eq!(s.phase(), Phase::Loading(Operation::Explain));
    }

    #[test]
    fn stale_response_lands_after_molecule_switch() {
        let mut s = session();
        s.begin_experiment("加入溴水 (Br₂)").unwrap();
        s.select_molecule("ethyne").unwrap();
        assert!(s.is_loading());
        s.complete(Ok(Response::Text("溴水褪色".into())));
        assert_eq!(s.molecule().id, "ethyne");
        assert_eq!(s.info(), "溴水褪色");
    }

    #[test]
    fn valid_quiz_opens_presenter() {
        let mut s = session();
        let info_before = s.info().to_string();
        assert_eq!(s.begin_quiz().unwrap().operation(), Operation::Quiz);
        assert_eq!(s.info(), info_before);

        s.complete(Ok(Response::Quiz(quiz("2"))));
        assert_eq!(s.phase(), Phase::QuizOpen);
        assert_eq!(s.begin_explain("b1"), Err(SessionError::QuizOpen));
        assert_eq!(s.begin_quiz(), Err(SessionError::QuizOpen));
    }

    #[test]
    fn quiz_without_question_stays_idle() {
        let mut s = session();
        s.begin_quiz().unwrap();
        s.complete(Err(ServiceError::Malformed(MalformedKind::MissingQuestion)));
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.quiz().is_none());
        assert_eq!(s.info(), "生成测验失败，请重试。");
    }

    #[test]
    fn unparsable_quiz_reports_parse_error() {
        let mut s = session();
        s.begin_quiz().unwrap();
        s.complete(Err(ServiceError::Malformed(MalformedKind::InvalidJson)));
        assert_eq!(s.info(), "生成测验数据解析错误。");
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn answering_quiz_reveals_verdict_and_close_discards_it() {
        let mut s = session();
        s.begin_quiz().unwrap();
        s.complete(Ok(Response::Quiz(quiz("2"))));

        assert_eq!(s.answer(1), Ok(Choice::Locked(Verdict::Incorrect)));
        let presenter = s.quiz().unwrap();
        assert_eq!(presenter.style(2), OptionStyle::Correct);
        assert_eq!(presenter.style(1), OptionStyle::Incorrect);
        assert_eq!(presenter.banner(), Some("回答错误"));
        assert_eq!(s.answer(2), Ok(Choice::AlreadyAnswered));

        s.close_quiz().unwrap();
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.quiz().is_none());
        assert_eq!(s.answer(0), Err(SessionError::NoQuiz));
        assert_eq!(s.close_quiz(), Err(SessionError::NoQuiz));
    }

    #[test]
    fn quiz_answer_two_is_correct_on_third_option() {
        let mut s = session();
        s.begin_quiz().unwrap();
        s.complete(Ok(Response::Quiz(quiz("2"))));
        assert_eq!(s.answer(2), Ok(Choice::Locked(Verdict::Correct)));
        assert_eq!(s.quiz().and_then(QuizPresenter::banner), Some("回答正确!"));
    }

    #[test]
    fn complete_without_outstanding_request_is_ignored() {
        let mut s = session();
        assert_eq!(s.complete(Ok(Response::Text("late".into()))), None);
        assert_eq!(s.info(), messages::WELCOME);
    }

    #[test]
    fn complete_discards_response_of_the_wrong_kind() {
        let mut s = session();
        s.begin_explain("b1").unwrap();
        assert_eq!(s.complete(Ok(Response::Quiz(quiz("0")))), None);
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.quiz().is_none());
        assert_eq!(s.info(), messages::ANALYZING_BOND);

        s.begin_quiz().unwrap();
        assert_eq!(s.complete(Ok(Response::Text("stray".into()))), None);
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.info(), messages::ANALYZING_BOND);
    }
}
