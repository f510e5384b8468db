use std::path::PathBuf;
use std::sync::Arc;

use quiz_core::model::Year;
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::question_store::QuestionStore;

/// Assembles app-facing services and the years discovered at launch.
#[derive(Clone)]
pub struct AppServices {
    question_store: Arc<QuestionStore>,
    available_years: Vec<Year>,
}

impl AppServices {
    /// Build services backed by a directory of `questions_YYYY.json` files.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the directory is unusable or cannot be listed.
    pub async fn open_json_dir(root: impl Into<PathBuf>) -> Result<Self, AppServicesError> {
        let storage = Storage::json_dir(root)?;
        Self::from_storage(storage).await
    }

    /// Build services over an already-constructed storage aggregate.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Store` if year discovery fails.
    pub async fn from_storage(storage: Storage) -> Result<Self, AppServicesError> {
        let question_store = Arc::new(QuestionStore::new(Arc::clone(&storage.banks)));
        let available_years = question_store.available_years().await?;
        tracing::info!(years = available_years.len(), "question banks discovered");

        Ok(Self {
            question_store,
            available_years,
        })
    }

    #[must_use]
    pub fn question_store(&self) -> Arc<QuestionStore> {
        Arc::clone(&self.question_store)
    }

    #[must_use]
    pub fn available_years(&self) -> &[Year] {
        &self.available_years
    }
}
