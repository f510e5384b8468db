use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::{AppContext, QuizState};
use crate::routes::Route;
use crate::views::{ResultsPanel, ViewError};
use crate::vm::{
    QuizIntent, QuizOutcome, QuizPhase, apply_quiz_intent, map_question_cards, map_results,
    quiz_title,
};

use super::card::QuestionCard;
use super::scripts::typeset_math_script;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = use_context::<QuizState>();
    let navigator = use_navigator();

    use_effect(move || {
        let _ = quiz.session.read();
        let _ = eval(typeset_math_script());
    });

    let on_intent = use_callback(move |intent: QuizIntent| {
        let mut session = quiz.session;
        let outcome = apply_quiz_intent(&mut session.write(), intent);
        match outcome {
            QuizOutcome::Completed => {
                let score = session.read().score();
                tracing::info!(correct = score.correct, total = score.total, "quiz completed");
            }
            QuizOutcome::BackToSetup => {
                quiz.rebuild();
                let _ = navigator.push(Route::Setup {});
            }
            QuizOutcome::Continue | QuizOutcome::Retried { .. } | QuizOutcome::Ignored => {}
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(on_intent);
            }
        }
    }

    let Some(params) = quiz.params.read().clone() else {
        let message = ViewError::NoYears.message();
        return rsx! {
            div { class: "page quiz-page",
                p { class: "error", "{message}" }
            }
        };
    };

    let title = quiz_title(&params);
    let (cards, phase, progress, results) = {
        let session = quiz.session.read();
        (
            map_question_cards(&session, ctx.asset_root()),
            QuizPhase::of_session(&session),
            session.progress(),
            map_results(&session, &params.category),
        )
    };

    rsx! {
        div { class: "page quiz-page",
            h1 { class: "quiz-title", "{title}" }
            p { class: "quiz-progress", "{progress.label()}" }

            if cards.is_empty() {
                p { class: "muted", "条件に合う問題がありません。" }
            }

            for card in cards {
                QuestionCard { key: "{card.position}", card, on_intent }
            }

            if let Some(results) = results {
                ResultsPanel { results }
            }

            div { class: "quiz-actions",
                button {
                    id: "quiz-reset",
                    class: "btn btn-secondary",
                    onclick: move |_| on_intent.call(QuizIntent::Reset),
                    "トップに戻る"
                }
                if phase == QuizPhase::Completed {
                    button {
                        id: "quiz-retry",
                        class: "btn btn-danger",
                        onclick: move |_| on_intent.call(QuizIntent::RetryIncorrect),
                        "間違えた問題だけやり直す"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
