mod plan;
mod progress;
mod service;

// Public API of the session subsystem.
pub use plan::{QuizBuilder, QuizPlan, derive_quiz};
pub use progress::SessionProgress;
pub use service::{IgnoreReason, QuizSession, RecordOutcome};
