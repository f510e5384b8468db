mod quiz_vm;
mod score_vm;
mod setup_vm;

pub use quiz_vm::{
    Feedback, OptionVm, QuestionCardVm, QuizIntent, QuizOutcome, QuizPhase, apply_quiz_intent,
    map_question_card, map_question_cards, question_header, quiz_title,
};
pub use score_vm::{CategoryBarVm, ResultsVm, map_results};
pub use setup_vm::{
    ORDER_IN_SEQUENCE, ORDER_SHUFFLED, SelectOptionVm, SetupIntent, SetupVm, apply_setup_intent,
    map_setup, order_value,
};
