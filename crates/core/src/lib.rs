#![forbid(unsafe_code)]

pub mod error;
pub mod markup;
pub mod model;

pub use error::Error;
pub use model::{
    ALL_CATEGORIES_LABEL, Answer, CategoryFilter, OrderMode, Part, Question, QuestionCount,
    QuestionError, SessionParams, Year, YearError, YearRange,
};
