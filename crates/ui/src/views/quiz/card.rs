use dioxus::prelude::*;
use quiz_core::markup::MathSegment;

use crate::vm::{OptionVm, QuestionCardVm, QuizIntent};

/// Text with embedded math. Math spans carry their TeX source in `data-tex`
/// and stay empty until typeset; CSS shows the source as a fallback.
#[component]
pub fn MathText(segments: Vec<MathSegment>) -> Element {
    rsx! {
        for segment in segments {
            match segment {
                MathSegment::Text(text) => rsx! {
                    span { "{text}" }
                },
                MathSegment::Inline(tex) => rsx! {
                    span { class: "math-inline", "data-tex": "{tex}" }
                },
                MathSegment::Block(tex) => rsx! {
                    span { class: "math-block", "data-tex": "{tex}" }
                },
            }
        }
    }
}

#[component]
pub fn QuestionCard(card: QuestionCardVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let position = card.position;

    rsx! {
        article { class: "question-card", id: "question-{position}",
            p { class: "question-header", "{card.header}" }
            p { class: "question-body",
                span { class: "question-number", "{card.number}. " }
                MathText { segments: card.body.clone() }
            }
            if let Some(src) = card.image.clone() {
                img { class: "question-image", src: "{src}", alt: "問題画像" }
            }
            ul { class: "option-list",
                for option in card.options.clone() {
                    li {
                        OptionButton { position, option, on_intent }
                    }
                }
            }
            if let Some(feedback) = card.feedback.clone() {
                p { class: feedback.class(), "{feedback.label()}" }
            }
        }
    }
}

#[component]
fn OptionButton(position: usize, option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let value = option.value.clone();

    rsx! {
        button {
            class: if option.selected { "option selected" } else { "option" },
            disabled: option.disabled,
            onclick: move |_| {
                on_intent.call(QuizIntent::Answer {
                    position,
                    value: value.clone(),
                });
            },
            MathText { segments: option.segments.clone() }
            if let Some(src) = option.image.clone() {
                img { class: "option-image", src: "{src}", alt: "{option.image_alt}" }
            }
        }
    }
}
