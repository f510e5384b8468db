use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::context::use_quiz_state_provider;
use crate::views::{QuizView, SetupView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", SetupView)] Setup {},
        #[route("/quiz", QuizView)] Quiz {},
}

/// Owns the quiz state so it survives moving between the configurator and the quiz.
#[component]
fn Layout() -> Element {
    use_quiz_state_provider();

    rsx! {
        main { class: "content",
            Outlet::<Route> {}
        }
    }
}
