use std::fmt;

use crate::model::{Question, Year, YearRange};

/// Label of the category wildcard shown in the configurator.
pub const ALL_CATEGORIES_LABEL: &str = "すべて";

/// Category selection; `All` applies no category filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parses a selector value, treating the wildcard label as `All`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES_LABEL {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_LABEL,
            CategoryFilter::Only(category) => category,
        }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    #[must_use]
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => question.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of questions to draw, between `MIN` and `MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionCount(u32);

impl QuestionCount {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 120;
    pub const DEFAULT: u32 = 10;

    /// Creates a count, clamping into `MIN..=MAX`.
    #[must_use]
    pub fn clamped(value: u32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Parses user input. Non-numeric input yields `None`; numbers are clamped.
    #[must_use]
    pub fn parse_input(raw: &str) -> Option<Self> {
        let value: i64 = raw.trim().parse().ok()?;
        let value = u32::try_from(value.max(0)).unwrap_or(Self::MAX);
        Some(Self::clamped(value))
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_usize(&self) -> usize {
        usize::try_from(self.0).unwrap_or(usize::MAX)
    }
}

impl Default for QuestionCount {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderMode {
    #[default]
    InOrder,
    Shuffled,
}

impl OrderMode {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            OrderMode::InOrder => "順番通り",
            OrderMode::Shuffled => "シャッフル",
        }
    }

    #[must_use]
    pub fn is_shuffled(self) -> bool {
        matches!(self, OrderMode::Shuffled)
    }
}

/// Everything the user configures before a quiz starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionParams {
    pub years: YearRange,
    pub category: CategoryFilter,
    pub count: QuestionCount,
    pub order: OrderMode,
    pub keyword: String,
}

impl SessionParams {
    /// Defaults for a fresh launch: the latest available year only.
    ///
    /// Returns `None` when no years are available.
    #[must_use]
    pub fn for_available_years(years: &[Year]) -> Option<Self> {
        let latest = years.iter().max().copied()?;
        Some(Self::new(YearRange::single(latest)))
    }

    #[must_use]
    pub fn new(years: YearRange) -> Self {
        Self {
            years,
            category: CategoryFilter::All,
            count: QuestionCount::default(),
            order: OrderMode::InOrder,
            keyword: String::new(),
        }
    }

    /// The keyword prepared for matching, or `None` when it is blank.
    #[must_use]
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.keyword.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}
