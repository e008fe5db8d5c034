// src/store/mod.rs

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;

use crate::models::question::Question;

/// Failure while building the store snapshot. Any variant aborts startup.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Database(sqlx::Error),
    DuplicateId(i64),
    InvalidQuestion { id: i64, reason: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "failed to read question file: {}", e),
            StoreError::Parse(e) => write!(f, "failed to parse question JSON: {}", e),
            StoreError::Database(e) => write!(f, "failed to load questions from database: {}", e),
            StoreError::DuplicateId(id) => write!(f, "duplicate question id {}", id),
            StoreError::InvalidQuestion { id, reason } => {
                write!(f, "invalid question {}: {}", id, reason)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Parse(err)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

/// Row shape of the `questions` table. The `options` column holds a
/// JSON-encoded array string that is decoded before serving.
#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    topic: String,
    skill_area: String,
    question: String,
    options: String,
    answer: String,
    explanation: String,
}

impl QuestionRow {
    fn decode(self) -> Result<Question, StoreError> {
        let options: Vec<String> =
            serde_json::from_str(&self.options).map_err(|e| StoreError::InvalidQuestion {
                id: self.id,
                reason: format!("options column is not a JSON array: {}", e),
            })?;

        Ok(Question {
            id: self.id,
            topic: self.topic,
            skill_area: self.skill_area,
            question: self.question,
            options,
            answer: self.answer,
            explanation: self.explanation,
        })
    }
}

/// The authoritative question set: built once at startup, validated, sorted
/// by ascending id, and read-only for the lifetime of the process.
#[derive(Debug)]
pub struct QuestionStore {
    questions: Vec<Question>,
}

impl QuestionStore {
    /// Validates and orders a raw question set into a snapshot.
    pub fn from_questions(mut questions: Vec<Question>) -> Result<Self, StoreError> {
        questions.sort_by_key(|q| q.id);

        for pair in questions.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(StoreError::DuplicateId(pair[0].id));
            }
        }

        for question in &questions {
            question
                .validate_record()
                .map_err(|reason| StoreError::InvalidQuestion {
                    id: question.id,
                    reason,
                })?;
        }

        Ok(Self { questions })
    }

    /// Loads the store from a JSON array on disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, StoreError> {
        let questions: Vec<Question> = serde_json::from_str(raw)?;
        Self::from_questions(questions)
    }

    /// Loads the store from the `questions` table of a SQLite database.
    ///
    /// All rows are read once through the pool; the resulting snapshot is
    /// served from memory, so no per-request SQL happens afterwards.
    pub async fn from_database(url: &str) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(url)
            .await?;

        let rows: Vec<QuestionRow> = sqlx::query_as(
            "SELECT id, topic, skill_area, question, options, answer, explanation \
             FROM questions ORDER BY id",
        )
        .fetch_all(&pool)
        .await?;

        tracing::info!("Fetched {} question rows from database", rows.len());

        let questions = rows
            .into_iter()
            .map(QuestionRow::decode)
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_questions(questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
