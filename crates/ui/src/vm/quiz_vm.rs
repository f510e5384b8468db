use quiz_core::markup::{MathSegment, resolve_asset_path, segment_math};
use quiz_core::model::{Question, SessionParams};
use services::{QuizSession, RecordOutcome};

/// Where the user is on the quiz screen.
///
/// Configuring happens on the setup route, which has no session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress,
    Completed,
}

impl QuizPhase {
    /// Phase of the quiz screen for the given session.
    #[must_use]
    pub fn of_session(session: &QuizSession) -> Self {
        if session.is_complete() {
            QuizPhase::Completed
        } else {
            QuizPhase::InProgress
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Answer { position: usize, value: String },
    RetryIncorrect,
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Completed,
    Retried { remaining: usize },
    BackToSetup,
    Ignored,
}

/// Apply a quiz-screen intent to the session.
///
/// Retrying is only possible once the session is complete.
pub fn apply_quiz_intent(session: &mut QuizSession, intent: QuizIntent) -> QuizOutcome {
    match intent {
        QuizIntent::Answer { position, value } => match session.record(position, value) {
            RecordOutcome::Recorded { .. } => QuizOutcome::Continue,
            RecordOutcome::Completed { .. } => QuizOutcome::Completed,
            RecordOutcome::Ignored(_) => QuizOutcome::Ignored,
        },
        QuizIntent::RetryIncorrect => {
            if !session.is_complete() {
                return QuizOutcome::Ignored;
            }
            let remaining = session.retry_incorrect();
            QuizOutcome::Retried { remaining }
        }
        QuizIntent::Reset => {
            session.clear_answers();
            QuizOutcome::BackToSetup
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { expected: String },
}

impl Feedback {
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Feedback::Correct => "正解！".to_string(),
            Feedback::Incorrect { expected } => format!("不正解（正解: {expected}）"),
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Feedback::Correct => "feedback correct",
            Feedback::Incorrect { .. } => "feedback incorrect",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub value: String,
    pub segments: Vec<MathSegment>,
    pub image: Option<String>,
    pub image_alt: String,
    pub selected: bool,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub position: usize,
    /// One-based number shown before the question body.
    pub number: usize,
    pub header: String,
    pub body: Vec<MathSegment>,
    pub image: Option<String>,
    pub options: Vec<OptionVm>,
    pub feedback: Option<Feedback>,
}

#[must_use]
pub fn question_header(question: &Question) -> String {
    format!(
        "【{}年／{}／問題{}／{}】",
        question.year, question.part, question.index, question.category
    )
}

/// Heading of the quiz screen, e.g. `2020年｜すべてから10問`.
#[must_use]
pub fn quiz_title(params: &SessionParams) -> String {
    format!("{}｜{}から{}問", params.years, params.category, params.count)
}

#[must_use]
pub fn map_question_card(
    session: &QuizSession,
    position: usize,
    asset_root: &str,
) -> Option<QuestionCardVm> {
    let question = session.question(position)?;
    let chosen = session.answer_at(position);

    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| OptionVm {
            value: option.clone(),
            segments: segment_math(option),
            image: question
                .option_image(i)
                .map(|path| resolve_asset_path(asset_root, path)),
            image_alt: format!("選択肢画像 {}", i + 1),
            selected: chosen == Some(option.as_str()),
            disabled: chosen.is_some(),
        })
        .collect();

    let feedback = session.is_correct_at(position).map(|correct| {
        if correct {
            Feedback::Correct
        } else {
            Feedback::Incorrect {
                expected: question.answer.to_string(),
            }
        }
    });

    Some(QuestionCardVm {
        position,
        number: position + 1,
        header: question_header(question),
        body: segment_math(&question.question),
        image: question
            .question_image
            .as_deref()
            .map(|path| resolve_asset_path(asset_root, path)),
        options,
        feedback,
    })
}

#[must_use]
pub fn map_question_cards(session: &QuizSession, asset_root: &str) -> Vec<QuestionCardVm> {
    (0..session.len())
        .filter_map(|position| map_question_card(session, position, asset_root))
        .collect()
}
