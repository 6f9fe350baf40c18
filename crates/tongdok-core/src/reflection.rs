//! Daily reflection payloads.
//!
//! Devotional content arrives as JSON produced by a language model and is
//! not trusted: it is checked field by field before use. Validated
//! reflections are cached per (date, passage) in an injected [`KvStore`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::Result;
use crate::storage::KvStore;

/// A devotional for one day's reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReflection {
    pub title: String,
    pub summary: String,
    pub meditation: String,
    pub prayer: String,
    pub questions: Vec<String>,
}

/// Why a payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("payload is not valid JSON: {0}")]
    Malformed(String),

    #[error("payload must be a JSON object")]
    NotAnObject,

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("field {field} must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("field {0} is blank")]
    BlankField(&'static str),

    #[error("reflection has no questions")]
    NoQuestions,
}

/// Remove a surrounding Markdown code fence, if present.
fn strip_code_fence(input: &str) -> &str {
    let trimmed = input.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening line.
    let body = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn text_field(
    object: &serde_json::Map<String, Value>,
    field: &'static str,
) -> std::result::Result<String, ValidationError> {
    let value = object
        .get(field)
        .ok_or(ValidationError::MissingField(field))?;
    let text = value.as_str().ok_or(ValidationError::WrongType {
        field,
        expected: "a string",
    })?;
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(text.to_string())
}

/// Validate an untrusted reflection payload.
pub fn parse_reflection(input: &str) -> std::result::Result<DailyReflection, ValidationError> {
    let value: Value = serde_json::from_str(strip_code_fence(input))
        .map_err(|e| ValidationError::Malformed(e.to_string()))?;
    let object = value.as_object().ok_or(ValidationError::NotAnObject)?;

    let title = text_field(object, "title")?;
    let summary = text_field(object, "summary")?;
    let meditation = text_field(object, "meditation")?;
    let prayer = text_field(object, "prayer")?;

    let questions = object
        .get("questions")
        .ok_or(ValidationError::MissingField("questions"))?
        .as_array()
        .ok_or(ValidationError::WrongType {
            field: "questions",
            expected: "an array of strings",
        })?;
    let mut parsed_questions = Vec::new();
    for question in questions {
        let text = question.as_str().ok_or(ValidationError::WrongType {
            field: "questions",
            expected: "an array of strings",
        })?;
        if !text.trim().is_empty() {
            parsed_questions.push(text.trim().to_string());
        }
    }
    if parsed_questions.is_empty() {
        return Err(ValidationError::NoQuestions);
    }

    Ok(DailyReflection {
        title,
        summary,
        meditation,
        prayer,
        questions: parsed_questions,
    })
}

/// Reflection cache over a key/value store.
pub struct ReflectionCache<'a, S: KvStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: KvStore + ?Sized> ReflectionCache<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    fn key(date: NaiveDate, passage: &str) -> String {
        format!("reflection:{}:{}", date, passage)
    }

    /// Cached reflection, if present and still valid.
    pub fn get(&self, date: NaiveDate, passage: &str) -> Result<Option<DailyReflection>> {
        let Some(raw) = self.store.get(&Self::key(date, passage))? else {
            return Ok(None);
        };
        match parse_reflection(&raw) {
            Ok(reflection) => Ok(Some(reflection)),
            Err(err) => {
                tracing::warn!(
                    %date,
                    passage,
                    error = %err,
                    "discarding invalid cached reflection"
                );
                Ok(None)
            }
        }
    }

    pub fn put(
        &mut self,
        date: NaiveDate,
        passage: &str,
        reflection: &DailyReflection,
    ) -> Result<()> {
        let json = serde_json::to_string(reflection)?;
        self.store.set(&Self::key(date, passage), &json)
    }

    pub fn invalidate(&mut self, date: NaiveDate, passage: &str) -> Result<bool> {
        self.store.remove(&Self::key(date, passage))
    }
}
