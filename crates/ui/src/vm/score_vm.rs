use quiz_core::model::CategoryFilter;
use services::{CategoryBreakdown, CategoryScore, QuizSession, should_show_breakdown};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryBarVm {
    pub category: String,
    /// Bar width in percent, one decimal.
    pub width: String,
    pub label: String,
}

impl From<&CategoryScore> for CategoryBarVm {
    fn from(score: &CategoryScore) -> Self {
        Self {
            category: score.category.clone(),
            width: score.ratio_label(),
            label: score.label(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    /// Present only when the chart should be drawn.
    pub bars: Option<Vec<CategoryBarVm>>,
}

/// Results for a completed session; `None` while answers are outstanding.
#[must_use]
pub fn map_results(session: &QuizSession, filter: &CategoryFilter) -> Option<ResultsVm> {
    if !session.is_complete() {
        return None;
    }

    let bars = should_show_breakdown(filter, session).then(|| {
        CategoryBreakdown::from_session(session)
            .rows()
            .iter()
            .map(CategoryBarVm::from)
            .collect()
    });

    Some(ResultsVm {
        score_label: session.score().label(),
        bars,
    })
}
