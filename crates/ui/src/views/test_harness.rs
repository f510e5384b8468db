use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{Question, Year};
use services::{QuestionStore, QuizSession};
use storage::repository::InMemoryRepository;

use crate::context::{QuizState, UiApp, build_app_context, use_quiz_state_provider};
use crate::views::quiz::QuizTestHandles;
use crate::views::{QuizView, SetupView};

#[derive(Clone)]
struct TestApp {
    question_store: Arc<QuestionStore>,
    years: Vec<Year>,
}

impl UiApp for TestApp {
    fn question_store(&self) -> Arc<QuestionStore> {
        Arc::clone(&self.question_store)
    }

    fn available_years(&self) -> Vec<Year> {
        self.years.clone()
    }

    fn asset_root(&self) -> String {
        "/".to_string()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Setup,
    Quiz,
}

/// Holds the `QuizState` created under the test route so tests can drive it.
#[derive(Clone, Default)]
pub struct QuizStateSlot(Rc<Cell<Option<QuizState>>>);

impl QuizStateSlot {
    fn fill(&self, state: QuizState) {
        self.0.set(Some(state));
    }

    pub fn get(&self) -> QuizState {
        self.0.get().expect("quiz state provided")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: QuizTestHandles,
    quiz_state: QuizStateSlot,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.quiz_handles.clone());
    use_context_provider(|| props.quiz_state.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let state = use_quiz_state_provider();
    use_context::<QuizStateSlot>().fill(state);
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Setup => rsx! { SetupView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub quiz_handles: QuizTestHandles,
    pub quiz_state: QuizStateSlot,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive until the bank load has resolved and the session has been derived.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    /// Read the current session inside the dom's runtime.
    pub fn with_session<O>(&self, f: impl FnOnce(&QuizSession) -> O) -> O {
        let state = self.quiz_state.get();
        self.dom.in_runtime(|| {
            let session = state.session.peek();
            f(&session)
        })
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Build a harness over in-memory banks; years are taken from the banks.
pub fn setup_view_harness(view: ViewKind, banks: Vec<(Year, Vec<Question>)>) -> ViewHarness {
    let repo = InMemoryRepository::new();
    let mut years = Vec::new();
    for (year, questions) in banks {
        repo.insert_bank(year, questions).expect("insert bank");
        years.push(year);
    }
    years.sort_unstable();

    let app = Arc::new(TestApp {
        question_store: Arc::new(QuestionStore::new(Arc::new(repo))),
        years,
    });
    let quiz_handles = QuizTestHandles::default();
    let quiz_state = QuizStateSlot::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
            quiz_state: quiz_state.clone(),
        },
    );

    ViewHarness {
        dom,
        quiz_handles,
        quiz_state,
    }
}
