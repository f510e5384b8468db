use std::fmt;

use quiz_core::model::CategoryFilter;

use crate::sessions::QuizSession;

/// Category key for questions that carry no category.
pub const UNCATEGORIZED_LABEL: &str = "未分類";

/// Overall result of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    #[must_use]
    pub fn label(&self) -> String {
        format!("正解数: {} / {}", self.correct, self.total)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// Correct and total counts for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryScore {
    pub category: String,
    pub correct: usize,
    pub total: usize,
}

impl CategoryScore {
    /// Share of correct answers in percent; 0 when the category is empty.
    #[must_use]
    pub fn ratio_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.correct as f64 / self.total as f64;
        ratio * 100.0
    }

    /// Percentage with one decimal, e.g. `"66.7"`.
    #[must_use]
    pub fn ratio_label(&self) -> String {
        format!("{:.1}", self.ratio_percent())
    }

    /// `"correct/total"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", self.correct, self.total)
    }
}

/// Per-category results in the order categories first appear in the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryBreakdown {
    rows: Vec<CategoryScore>,
}

impl CategoryBreakdown {
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Self {
        let mut rows: Vec<CategoryScore> = Vec::new();

        for (position, question) in session.questions().iter().enumerate() {
            let key = if question.category.trim().is_empty() {
                UNCATEGORIZED_LABEL
            } else {
                question.category.as_str()
            };
            let correct = session.is_correct_at(position) == Some(true);

            match rows.iter_mut().find(|row| row.category == key) {
                Some(row) => {
                    row.total += 1;
                    row.correct += usize::from(correct);
                }
                None => rows.push(CategoryScore {
                    category: key.to_string(),
                    correct: usize::from(correct),
                    total: 1,
                }),
            }
        }

        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[CategoryScore] {
        &self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of the per-category totals.
    #[must_use]
    pub fn total(&self) -> usize {
        self.rows.iter().map(|row| row.total).sum()
    }
}

/// The chart is only meaningful across categories and for a non-empty session.
#[must_use]
pub fn should_show_breakdown(filter: &CategoryFilter, session: &QuizSession) -> bool {
    filter.is_all() && !session.is_empty()
}
