use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::model::QuestionCount;

use crate::context::{AppContext, QuizState};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{SetupIntent, SetupVm, apply_setup_intent, map_setup};

#[component]
pub fn SetupView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = use_context::<QuizState>();
    let navigator = use_navigator();

    let Some(params) = quiz.params.read().clone() else {
        let message = ViewError::NoYears.message();
        return rsx! {
            div { class: "page setup-page",
                h1 { "臨床工学技士 ME2種試験対策アプリ" }
                p { class: "error", "{message}" }
            }
        };
    };

    let load_state = view_state_from_resource(&quiz.collection);
    let vm = map_setup(&params, ctx.available_years(), &quiz.categories());

    let on_edit = move |intent: SetupIntent| {
        if !quiz.update_params(|params| apply_setup_intent(params, intent)) {
            tracing::debug!("setup edit left the quiz unchanged");
        }
    };

    rsx! {
        div { class: "page setup-page",
            h1 { "臨床工学技士 ME2種試験対策アプリ" }
            p { class: "lead", "分野・年度・出題数を選んで学習を始めましょう" }

            SetupForm { vm, on_edit }

            match load_state {
                ViewState::Loading => rsx! {
                    p { class: "muted", "問題を読み込み中..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                ViewState::Ready(_) | ViewState::Idle => rsx! {},
            }

            button {
                id: "setup-start",
                class: "btn btn-primary btn-wide",
                onclick: move |_| {
                    tracing::info!(questions = quiz.session.read().len(), "quiz started");
                    let _ = navigator.push(Route::Quiz {});
                },
                "学習を開始"
            }
        }
    }
}

#[component]
fn SetupForm(vm: SetupVm, on_edit: EventHandler<SetupIntent>) -> Element {
    rsx! {
        div { class: "setup-form",
            div { class: "setup-row setup-years",
                label { class: "setup-label", r#for: "setup-start-year", "開始年度:" }
                select {
                    id: "setup-start-year",
                    value: "{vm.start}",
                    onchange: move |evt| on_edit.call(SetupIntent::SetStart(evt.value())),
                    for year in vm.years.clone() {
                        option { value: "{year.value}", selected: year.value == vm.start, "{year.label}" }
                    }
                }
                label { class: "setup-label", r#for: "setup-end-year", "終了年度:" }
                select {
                    id: "setup-end-year",
                    value: "{vm.end}",
                    onchange: move |evt| on_edit.call(SetupIntent::SetEnd(evt.value())),
                    for year in vm.years.clone() {
                        option { value: "{year.value}", selected: year.value == vm.end, "{year.label}" }
                    }
                }
            }

            div { class: "setup-row",
                label { class: "setup-label", r#for: "setup-category", "分野:" }
                select {
                    id: "setup-category",
                    value: "{vm.category}",
                    onchange: move |evt| on_edit.call(SetupIntent::SetCategory(evt.value())),
                    for category in vm.categories.clone() {
                        option {
                            value: "{category.value}",
                            selected: category.value == vm.category,
                            "{category.label}"
                        }
                    }
                }
            }

            div { class: "setup-row",
                label { class: "setup-label", r#for: "setup-count", "出題数:" }
                input {
                    id: "setup-count",
                    r#type: "number",
                    min: QuestionCount::MIN.to_string(),
                    max: QuestionCount::MAX.to_string(),
                    value: "{vm.count}",
                    oninput: move |evt| on_edit.call(SetupIntent::SetCount(evt.value())),
                }
            }

            div { class: "setup-row",
                label { class: "setup-label", r#for: "setup-order", "出題順:" }
                select {
                    id: "setup-order",
                    value: "{vm.order}",
                    onchange: move |evt| on_edit.call(SetupIntent::SetOrder(evt.value())),
                    for order in vm.orders.clone() {
                        option { value: "{order.value}", selected: order.value == vm.order, "{order.label}" }
                    }
                }
            }

            div { class: "setup-row",
                label { class: "setup-label", r#for: "setup-keyword", "キーワード検索:" }
                input {
                    id: "setup-keyword",
                    r#type: "text",
                    placeholder: "例: 心電図, 血液, 回路",
                    value: "{vm.keyword}",
                    oninput: move |evt| on_edit.call(SetupIntent::SetKeyword(evt.value())),
                }
            }
        }
    }
}
