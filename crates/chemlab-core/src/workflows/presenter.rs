use crate::core::quiz::Quiz;

pub const CORRECT_BANNER: &str = "回答正确!";
pub const INCORRECT_BANNER: &str = "回答错误";

/// How an option is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionStyle {
    /// Not yet answered; clickable.
    Neutral,
    /// The correct option, after an answer was locked in.
    Correct,
    /// The learner's wrong choice.
    Incorrect,
    /// Any other option after reveal.
    Dimmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn banner(self) -> &'static str {
        match self {
            Verdict::Correct => CORRECT_BANNER,
            Verdict::Incorrect => INCORRECT_BANNER,
        }
    }
}

/// Result of picking an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// The pick was locked in as the answer.
    Locked(Verdict),
    /// An answer was already locked in; the pick was ignored.
    AlreadyAnswered,
    /// No option has this index.
    OutOfRange,
}

/// Presents one quiz. The first valid pick locks in; later picks change
/// nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizPresenter {
    quiz: Quiz,
    correct: Option<usize>,
    chosen: Option<usize>,
}

impl QuizPresenter {
    pub fn new(quiz: Quiz) -> Self {
        let correct = quiz.correct_index();
        Self {
            quiz,
            correct,
            chosen: None,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn question(&self) -> &str {
        &self.quiz.question
    }

    pub fn options(&self) -> impl Iterator<Item = (usize, &str, OptionStyle)> {
        self.quiz
            .options
            .iter()
            .enumerate()
            .map(|(i, text)| (i, text.as_str(), self.style(i)))
    }

    pub fn style(&self, index: usize) -> OptionStyle {
        let Some(chosen) = self.chosen else {
            return OptionStyle::Neutral;
        };
        if Some(index) == self.correct {
            OptionStyle::Correct
        } else if index == chosen {
            OptionStyle::Incorrect
        } else {
            OptionStyle::Dimmed
        }
    }

    pub fn choose(&mut self, index: usize) -> Choice {
        if self.chosen.is_some() {
            return Choice::AlreadyAnswered;
        }
        if index >= self.quiz.options.len() {
            return Choice::OutOfRange;
        }
        self.chosen = Some(index);
        Choice::Locked(self.verdict_for(index))
    }

    pub fn is_answered(&self) -> bool {
        self.chosen.is_some()
    }

    pub fn chosen(&self) -> Option<usize> {
        self.chosen
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.chosen.map(|i| self.verdict_for(i))
    }

    /// The verdict banner, once answered.
    pub fn banner(&self) -> Option<&'static str> {
        self.verdict().map(Verdict::banner)
    }

    /// The explanation is only revealed after an answer.
    pub fn explanation(&self) -> Option<&str> {
        self.chosen.map(|_| self.quiz.explanation.as_str())
    }

    fn verdict_for(&self, index: usize) -> Verdict {
        if Some(index) == self.correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }
}
