mod params;
mod question;
mod year;

pub use params::{ALL_CATEGORIES_LABEL, CategoryFilter, OrderMode, QuestionCount, SessionParams};
pub use question::{Answer, Part, Question, QuestionError};
pub use year::{Year, YearError, YearRange};
