#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod question_store;
pub mod scoring;
pub mod sessions;

pub use app_services::AppServices;
pub use error::{AppServicesError, QuestionStoreError};
pub use question_store::{BankReport, BankStats, QuestionCollection, QuestionStore};
pub use scoring::{
    CategoryBreakdown, CategoryScore, Score, UNCATEGORIZED_LABEL, should_show_breakdown,
};
pub use sessions::{
    IgnoreReason, QuizBuilder, QuizPlan, QuizSession, RecordOutcome, SessionProgress, derive_quiz,
};
