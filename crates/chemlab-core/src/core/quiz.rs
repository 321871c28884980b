use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

/// One multiple-choice question.
///
/// `answer` keeps the wire form, a stringified zero-based index into
/// `options`. A `Quiz` obtained from [`parse_quiz`] is guaranteed to have a
/// non-empty question, at least two options and an answer that indexes one of
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("Quiz response is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("Quiz response has no question")]
    MissingQuestion,
    #[error("Quiz needs at least 2 options, got {0}")]
    TooFewOptions(usize),
    #[error("Quiz answer '{answer}' is not an index into {options} options")]
    InvalidAnswer { answer: String, options: usize },
    #[error("Quiz response has no explanation")]
    MissingExplanation,
}

// Every field is optional here so that missing fields surface as `QuizError`
// variants instead of a generic serde message.
#[derive(Debug, Deserialize)]
struct RawQuiz {
    question: Option<String>,
    options: Option<Vec<String>>,
    answer: Option<Value>,
    explanation: Option<String>,
}

impl Quiz {
    /// The zero-based index of the correct option.
    pub fn correct_index(&self) -> Option<usize> {
        parse_index(&self.answer).filter(|&i| i < self.options.len())
    }

    /// The structured-output schema sent with quiz requests.
    pub fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "question": { "type": "STRING" },
                "options": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                },
                "answer": {
                    "type": "STRING",
                    "description": "Index of the correct option (0-3)"
                },
                "explanation": { "type": "STRING" }
            },
            "required": ["question", "options", "answer", "explanation"]
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn parse_index(answer: &str) -> Option<usize> {
    answer.trim().parse().ok()
}

/// Parses and validates a quiz returned by the model.
///
/// The remote schema is a request, not a guarantee, so every constraint is
/// checked again here. A numeric `answer` is accepted and normalized to its
/// string form.
///
/// # Errors
///
/// Returns [`QuizError::InvalidJson`] when `text` is not a JSON object of the
/// expected shape, and the other variants when a required field is missing or
/// inconsistent.
pub fn parse_quiz(text: &str) -> Result<Quiz, QuizError> {
    let value: Value =
        serde_json::from_str(text.trim()).map_err(|e| QuizError::InvalidJson(e.to_string()))?;
    // A derived struct also deserializes from a positional array.
    if !value.is_object() {
        return Err(QuizError::InvalidJson(format!(
            "expected a JSON object, found {}",
            json_kind(&value)
        )));
    }
    let raw: RawQuiz =
        serde_json::from_value(value).map_err(|e| QuizError::InvalidJson(e.to_string()))?;

    let question = raw
        .question
        .filter(|q| !q.trim().is_empty())
        .ok_or(QuizError::MissingQuestion)?;

    let options = raw.options.unwrap_or_default();
    if options.len() < 2 {
        return Err(QuizError::TooFewOptions(options.len()));
    }

    let answer = match raw.answer {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    if parse_index(&answer).is_none_or(|i| i >= options.len()) {
        return Err(QuizError::InvalidAnswer {
            answer,
            options: options.len(),
        });
    }

    let explanation = raw.explanation.ok_or(QuizError::MissingExplanation)?;

    Ok(Quiz {
        question,
        options,
        answer: answer.trim().to_string(),
        explanation,
    })
}
