//! Shared error types for the services crate.

use thiserror::Error;

use storage::json::JsonInitError;
use storage::repository::StorageError;

/// Errors emitted by `QuestionStore`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionStoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Json(#[from] JsonInitError),
    #[error(transparent)]
    Store(#[from] QuestionStoreError),
}
