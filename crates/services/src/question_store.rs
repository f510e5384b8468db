use std::sync::Arc;

use futures::future::join_all;
use quiz_core::model::{Question, Year, YearRange};
use storage::repository::{QuestionBank, QuestionBankRepository, StorageError};

use crate::error::QuestionStoreError;

/// Questions loaded for a year range, concatenated in year order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionCollection {
    questions: Vec<Question>,
}

impl QuestionCollection {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Distinct non-empty categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for question in &self.questions {
            let category = question.category.as_str();
            if !category.is_empty() && !seen.iter().any(|c| c == category) {
                seen.push(category.to_string());
            }
        }
        seen
    }
}

/// Counts gathered while checking one bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BankStats {
    pub questions: usize,
    pub rejected: usize,
    /// Questions whose answer matches none of their options.
    pub unmatched_answers: usize,
}

/// Outcome of checking one year's bank.
#[derive(Debug)]
pub struct BankReport {
    pub year: Year,
    pub result: Result<BankStats, StorageError>,
}

impl BankReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Loads yearly banks and merges them into one collection.
#[derive(Clone)]
pub struct QuestionStore {
    banks: Arc<dyn QuestionBankRepository>,
}

impl QuestionStore {
    #[must_use]
    pub fn new(banks: Arc<dyn QuestionBankRepository>) -> Self {
        Self { banks }
    }

    /// Years with a bank, ascending.
    ///
    /// # Errors
    ///
    /// Returns `QuestionStoreError::Storage` if the backend cannot be listed.
    pub async fn available_years(&self) -> Result<Vec<Year>, QuestionStoreError> {
        let years = self.banks.list_years().await?;
        Ok(years)
    }

    /// Load every year in `range` concurrently.
    ///
    /// A year that fails to load contributes nothing; the others are kept.
    pub async fn load(&self, range: YearRange) -> QuestionCollection {
        let loads = range.years().into_iter().map(|year| async move {
            match self.banks.load_bank(year).await {
                Ok(bank) => bank.questions,
                Err(StorageError::NotFound) => {
                    tracing::warn!(%year, "no question bank for year");
                    Vec::new()
                }
                Err(err) => {
                    tracing::warn!(%year, error = %err, "failed to load question bank");
                    Vec::new()
                }
            }
        });

        let questions: Vec<Question> = join_all(loads).await.into_iter().flatten().collect();
        tracing::info!(%range, questions = questions.len(), "question banks loaded");
        QuestionCollection::new(questions)
    }

    /// Load every available bank and summarize it.
    ///
    /// # Errors
    ///
    /// Returns `QuestionStoreError::Storage` if the backend cannot be listed.
    pub async fn inspect_all(&self) -> Result<Vec<BankReport>, QuestionStoreError> {
        let years = self.available_years().await?;
        let loads = years.into_iter().map(|year| async move {
            let result = self.banks.load_bank(year).await.map(|bank| stats_for(&bank));
            BankReport { year, result }
        });
        Ok(join_all(loads).await)
    }
}

fn stats_for(bank: &QuestionBank) -> BankStats {
    BankStats {
        questions: bank.questions.len(),
        rejected: bank.rejected.len(),
        unmatched_answers: bank
            .questions
            .iter()
            .filter(|q| !q.unmatched_answers().is_empty())
            .count(),
    }
}
