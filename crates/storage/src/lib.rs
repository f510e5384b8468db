#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use repository::{QuestionBank, QuestionBankRepository, RejectedRecord, Storage, StorageError};
