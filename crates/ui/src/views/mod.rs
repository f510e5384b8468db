mod quiz;
mod results;
mod setup;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use quiz::{MathText, QuestionCard, QuizView};
pub use results::{CategoryChart, ResultsPanel};
pub use setup::SetupView;
pub use state::{ViewError, ViewState, view_state_from_resource};
