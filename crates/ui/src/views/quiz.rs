mod card;
mod scripts;
mod view;

pub use card::{MathText, QuestionCard};
pub use view::QuizView;

#[cfg(test)]
pub(crate) use view::QuizTestHandles;
