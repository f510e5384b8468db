use rand::seq::SliceRandom;
use rand::{Rng, rng};

use quiz_core::model::{Question, SessionParams};

/// Selection result for a quiz build.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizPlan {
    pub questions: Vec<Question>,
    /// Records that passed filtering, before truncation to the requested count.
    pub matched: usize,
}

impl QuizPlan {
    /// Total number of questions in this plan.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Returns true when nothing matched the parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Derives the active quiz from the loaded collection and the session parameters.
pub struct QuizBuilder<'a> {
    params: &'a SessionParams,
}

impl<'a> QuizBuilder<'a> {
    #[must_use]
    pub fn new(params: &'a SessionParams) -> Self {
        Self { params }
    }

    /// Build a plan, shuffling with the thread-local generator when requested.
    ///
    /// - Records outside the year range are dropped.
    /// - A non-blank keyword filters on question and option text and overrides the category.
    /// - Otherwise a specific category keeps only that category.
    /// - In-order plans sort by year, part (午前 before 午後) and index.
    #[must_use]
    pub fn build(self, questions: &[Question]) -> QuizPlan {
        self.build_with_rng(questions, &mut rng())
    }

    /// Same as [`QuizBuilder::build`] with an explicit random source.
    pub fn build_with_rng<R: Rng + ?Sized>(self, questions: &[Question], rng: &mut R) -> QuizPlan {
        let params = self.params;
        let needle = params.search_needle();

        let mut selected: Vec<Question> = questions
            .iter()
            .filter(|q| params.years.contains(q.year))
            .filter(|q| match needle.as_deref() {
                Some(needle) => q.mentions(needle),
                None => params.category.matches(q),
            })
            .cloned()
            .collect();

        if params.order.is_shuffled() {
            selected.as_mut_slice().shuffle(rng);
        } else {
            // Four-digit years compare the same numerically and as strings.
            selected.sort_by_key(|q| (q.year, q.part, q.index));
        }

        let matched = selected.len();
        selected.truncate(params.count.as_usize());

        QuizPlan {
            questions: selected,
            matched,
        }
    }
}

/// Convenience form of `QuizBuilder::new(params).build(questions).questions`.
#[must_use]
pub fn derive_quiz(questions: &[Question], params: &SessionParams) -> Vec<Question> {
    QuizBuilder::new(params).build(questions).questions
}
