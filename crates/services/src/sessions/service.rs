use std::collections::BTreeMap;

use quiz_core::model::Question;

use super::progress::SessionProgress;
use crate::scoring::Score;

/// Why a `record` call left the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    OutOfRange,
    AlreadyAnswered,
}

/// Result of recording one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Recorded { correct: bool },
    /// The answer was recorded and every position now has one.
    Completed { correct: bool },
    Ignored(IgnoreReason),
}

impl RecordOutcome {
    #[must_use]
    pub fn is_recorded(self) -> bool {
        !matches!(self, RecordOutcome::Ignored(_))
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// An in-memory quiz: the selected questions plus one answer per position.
///
/// The first answer for a position is final. The session completes once every
/// position has an answer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizSession {
    questions: Vec<Question>,
    answers: BTreeMap<usize, String>,
    completed: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            answers: BTreeMap::new(),
            completed: false,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, position: usize) -> Option<&Question> {
        self.questions.get(position)
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of positions that already have an answer.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn answer_at(&self, position: usize) -> Option<&str> {
        self.answers.get(&position).map(String::as_str)
    }

    /// Whether the recorded answer at `position` is correct; `None` when unanswered.
    #[must_use]
    pub fn is_correct_at(&self, position: usize) -> Option<bool> {
        let answer = self.answer_at(position)?;
        let question = self.questions.get(position)?;
        Some(question.is_correct(answer))
    }

    /// Returns a summary of the current progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.len(),
            answered: self.answered_count(),
            remaining: self.len().saturating_sub(self.answered_count()),
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn score(&self) -> Score {
        let correct = (0..self.len())
            .filter(|&position| self.is_correct_at(position) == Some(true))
            .count();
        Score {
            correct,
            total: self.len(),
        }
    }

    /// Record the chosen option text for `position`.
    ///
    /// Out-of-range positions and positions that already have an answer are
    /// ignored without error.
    pub fn record(&mut self, position: usize, value: impl Into<String>) -> RecordOutcome {
        let Some(question) = self.questions.get(position) else {
            tracing::debug!(position, len = self.len(), "ignoring answer outside the session");
            return RecordOutcome::Ignored(IgnoreReason::OutOfRange);
        };
        if self.answers.contains_key(&position) {
            return RecordOutcome::Ignored(IgnoreReason::AlreadyAnswered);
        }

        let value = value.into();
        let correct = question.is_correct(&value);
        self.answers.insert(position, value);

        if self.answers.len() == self.questions.len() {
            self.completed = true;
            RecordOutcome::Completed { correct }
        } else {
            RecordOutcome::Recorded { correct }
        }
    }

    /// Questions whose answer is wrong or missing, in session order.
    #[must_use]
    pub fn retry_incorrect_questions(&self) -> Vec<Question> {
        self.questions
            .iter()
            .enumerate()
            .filter(|(position, _)| self.is_correct_at(*position) != Some(true))
            .map(|(_, question)| question.clone())
            .collect()
    }

    /// Narrow the session to its incorrect questions and start over on them.
    ///
    /// Returns the new session length.
    pub fn retry_incorrect(&mut self) -> usize {
        let remaining = self.retry_incorrect_questions();
        tracing::info!(
            from = self.len(),
            to = remaining.len(),
            "retrying incorrect questions"
        );
        *self = Self::new(remaining);
        self.len()
    }

    /// Drop every recorded answer, keeping the questions.
    pub fn clear_answers(&mut self) {
        self.answers.clear();
        self.completed = false;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Answer, Part, Year};

    fn build_question(index: u32, answer: Answer) -> Question {
        Question {
            year: Year::new(2020).unwrap(),
            part: Part::Morning,
            index,
            category: "心電図".into(),
            question: format!("Q{index}"),
            options: vec!["A".into(), "B".into(), "C".into()],
            answer,
            question_image: None,
            option_images: None,
        }
    }

    fn single(index: u32, answer: &str) -> Question {
        build_question(index, Answer::Single(answer.into()))
    }

    #[test]
    fn first_answer_is_final() {
        let mut session = QuizSession::new(vec![single(1, "A"), single(2, "B")]);
        assert_eq!(
            session.record(0, "C"),
            RecordOutcome::Recorded { correct: false }
        );
        assert_eq!(
            session.record(0, "A"),
            RecordOutcome::Ignored(IgnoreReason::AlreadyAnswered)
        );
        assert_eq!(session.answer_at(0), Some("C"));
        assert_eq!(session.is_correct_at(0), Some(false));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut session = QuizSession::new(vec![single(1, "A")]);
        assert_eq!(
            session.record(3, "A"),
            RecordOutcome::Ignored(IgnoreReason::OutOfRange)
        );
        assert_eq!(session.answered_count(), 0);
        assert!(!session.is_complete());
    }

    #[test]
    fn completes_when_every_position_is_answered() {
        let mut session = QuizSession::new(vec![single(1, "A"), single(2, "B")]);
        assert!(!session.is_complete());
        session.record(1, "B");
        assert!(!session.is_complete());
        assert_eq!(
            session.record(0, "A"),
            RecordOutcome::Completed { correct: true }
        );
        assert!(session.is_complete());
        assert_eq!(session.progress().remaining, 0);
    }

    #[test]
    fn empty_session_never_completes() {
        let mut session = QuizSession::new(Vec::new());
        assert!(!session.record(0, "A").is_recorded());
        assert!(!session.is_complete());
    }

    #[test]
    fn set_answer_accepts_any_member() {
        let mut session = QuizSession::new(vec![build_question(
            1,
            Answer::AnySet(vec!["A".into(), "B".into()]),
        )]);
        assert_eq!(
            session.record(0, "B"),
            RecordOutcome::Completed { correct: true }
        );
    }

    #[test]
    fn score_and_retry_follow_the_worked_example() {
        let mut session = QuizSession::new(vec![single(1, "A"), single(2, "B")]);
        session.record(0, "A");
        session.record(1, "C");

        assert_eq!(session.score(), Score { correct: 1, total: 2 });

        let len = session.retry_incorrect();
        assert_eq!(len, 1);
        assert_eq!(session.questions()[0].index, 2);
        assert_eq!(session.answered_count(), 0);
        assert!(!session.is_complete());
    }

    #[test]
    fn retry_keeps_unanswered_questions_in_order() {
        let mut session = QuizSession::new(vec![
            single(1, "A"),
            single(2, "B"),
            single(3, "C"),
            single(4, "A"),
        ]);
        session.record(1, "B");
        session.record(3, "C");

        let retried: Vec<u32> = session
            .retry_incorrect_questions()
            .iter()
            .map(|q| q.index)
            .collect();
        assert_eq!(retried, vec![1, 3, 4]);
    }

    #[test]
    fn clear_answers_resets_completion() {
        let mut session = QuizSession::new(vec![single(1, "A")]);
        session.record(0, "A");
        assert!(session.is_complete());
        session.clear_answers();
        assert!(!session.is_complete());
        assert_eq!(session.answer_at(0), None);
        assert_eq!(session.len(), 1);
    }
}
