use async_trait::async_trait;
use quiz_core::model::{Question, Year};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("connection error: {0}")]
    Connection(String),
}

/// A record that was present in a bank file but could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Zero-based position in the bank's record array.
    pub position: usize,
    pub reason: String,
}

/// One year's worth of questions as loaded from a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    pub year: Year,
    pub questions: Vec<Question>,
    pub rejected: Vec<RejectedRecord>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(year: Year, questions: Vec<Question>) -> Self {
        Self {
            year,
            questions,
            rejected: Vec::new(),
        }
    }

    /// Parse a bank from its JSON text, keeping every valid record.
    ///
    /// The document must be an array. Records that fail to deserialize or
    /// violate question invariants are collected in `rejected`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the text is not a JSON array.
    pub fn from_json(year: Year, text: &str) -> Result<Self, StorageError> {
        let raw: Vec<serde_json::Value> =
            serde_json::from_str(text).map_err(|e| StorageError::Serialization(e.to_string()))?;

        let mut questions = Vec::with_capacity(raw.len());
        let mut rejected = Vec::new();
        for (position, value) in raw.into_iter().enumerate() {
            let parsed = serde_json::from_value::<Question>(value)
                .map_err(|e| e.to_string())
                .and_then(|q| q.validate().map(|()| q).map_err(|e| e.to_string()));
            match parsed {
                Ok(question) => questions.push(question),
                Err(reason) => rejected.push(RejectedRecord { position, reason }),
            }
        }

        Ok(Self {
            year,
            questions,
            rejected,
        })
    }
}

/// Repository contract for yearly question banks.
#[async_trait]
pub trait QuestionBankRepository: Send + Sync {
    /// Years with an available bank, ascending.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be listed.
    async fn list_years(&self) -> Result<Vec<Year>, StorageError>;

    /// Load the bank for one year.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the year has no bank, or other storage errors.
    async fn load_bank(&self, year: Year) -> Result<QuestionBank, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    banks: Arc<Mutex<HashMap<Year, Vec<Question>>>>,
    failing: Arc<Mutex<HashSet<Year>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the bank for `year`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the internal lock is poisoned.
    pub fn insert_bank(&self, year: Year, questions: Vec<Question>) -> Result<(), StorageError> {
        let mut guard = self
            .banks
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(year, questions);
        Ok(())
    }

    /// Make every subsequent load of `year` fail, while still listing it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the internal lock is poisoned.
    pub fn fail_year(&self, year: Year) -> Result<(), StorageError> {
        let mut guard = self
            .failing
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(year);
        Ok(())
    }
}

#[async_trait]
impl QuestionBankRepository for InMemoryRepository {
    async fn list_years(&self) -> Result<Vec<Year>, StorageError> {
        let banks = self
            .banks
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let failing = self
            .failing
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut years: Vec<Year> = banks.keys().chain(failing.iter()).copied().collect();
        years.sort_unstable();
        years.dedup();
        Ok(years)
    }

    async fn load_bank(&self, year: Year) -> Result<QuestionBank, StorageError> {
        let failing = self
            .failing
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?
            .contains(&year);
        if failing {
            return Err(StorageError::Io(format!("bank {year} is unavailable")));
        }
        let guard = self
            .banks
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard
            .get(&year)
            .cloned()
            .map(|questions| QuestionBank::new(year, questions))
            .ok_or(StorageError::NotFound)
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub banks: Arc<dyn QuestionBankRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    #[must_use]
    pub fn from_repository(repo: impl QuestionBankRepository + 'static) -> Self {
        let banks: Arc<dyn QuestionBankRepository> = Arc::new(repo);
        Self { banks }
    }
}
