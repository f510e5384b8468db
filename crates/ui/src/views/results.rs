use dioxus::prelude::*;

use crate::vm::{CategoryBarVm, ResultsVm};

#[component]
pub fn ResultsPanel(results: ResultsVm) -> Element {
    rsx! {
        section { class: "results", id: "quiz-results",
            h2 { "結果" }
            p { class: "results-score", "{results.score_label}" }
            if let Some(bars) = results.bars.clone() {
                CategoryChart { bars }
            }
        }
    }
}

/// Horizontal bars on a 0-100% scale, one per category.
#[component]
pub fn CategoryChart(bars: Vec<CategoryBarVm>) -> Element {
    rsx! {
        div { class: "category-chart",
            for bar in bars {
                div { class: "chart-row",
                    span { class: "chart-category", "{bar.category}" }
                    div { class: "chart-track",
                        div {
                            class: "chart-bar",
                            style: "width: {bar.width}%;",
                            title: "正解数: {bar.label}",
                        }
                    }
                    span { class: "chart-label", "{bar.label}" }
                }
            }
        }
    }
}
