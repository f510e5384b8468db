use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;

const KATEX_CSS: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.11/dist/katex.min.css";
const KATEX_JS: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.11/dist/katex.min.js";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Typesetting is optional; math falls back to its TeX source when KaTeX is unavailable.
        document::Stylesheet { href: KATEX_CSS }
        document::Script { src: KATEX_JS }

        document::Title { "臨床工学技士 ME2種試験対策アプリ" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "エラーが発生しました" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
