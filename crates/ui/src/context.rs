use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::model::{SessionParams, Year};
use services::{QuestionCollection, QuestionStore, QuizBuilder, QuizSession};

use crate::views::ViewError;

pub trait UiApp: Send + Sync {
    fn question_store(&self) -> Arc<QuestionStore>;
    fn available_years(&self) -> Vec<Year>;
    /// Prefix that root-relative image paths are resolved against.
    fn asset_root(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    question_store: Arc<QuestionStore>,
    available_years: Arc<[Year]>,
    asset_root: Arc<str>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            question_store: app.question_store(),
            available_years: app.available_years().into(),
            asset_root: app.asset_root().into(),
        }
    }

    #[must_use]
    pub fn question_store(&self) -> Arc<QuestionStore> {
        Arc::clone(&self.question_store)
    }

    #[must_use]
    pub fn available_years(&self) -> &[Year] {
        &self.available_years
    }

    #[must_use]
    pub fn asset_root(&self) -> &str {
        &self.asset_root
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

//
// ─── QUIZ STATE ────────────────────────────────────────────────────────────────
//

/// Reactive state shared by the configurator and the quiz screen.
///
/// `params` is `None` only when no question bank exists.
#[derive(Clone, Copy)]
pub struct QuizState {
    pub params: Signal<Option<SessionParams>>,
    pub collection: Resource<Result<QuestionCollection, ViewError>>,
    pub session: Signal<QuizSession>,
    rebuilds: Signal<u64>,
}

impl QuizState {
    /// Apply a change to the session parameters.
    ///
    /// `change` returns `false` to reject the edit. Only accepted edits that
    /// actually alter the parameters are written, so only those re-derive the
    /// session.
    pub fn update_params(self, change: impl FnOnce(&mut SessionParams) -> bool) -> bool {
        let mut params = self.params;
        let Some(mut next) = params.peek().clone() else {
            return false;
        };
        if !change(&mut next) || params.peek().as_ref() == Some(&next) {
            return false;
        }
        params.set(Some(next));
        true
    }

    /// Re-derive the session from the current parameters, discarding answers.
    pub fn rebuild(self) {
        let mut rebuilds = self.rebuilds;
        *rebuilds.write() += 1;
    }

    /// Categories present in the loaded collection, in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        match self.collection.value().read().as_ref() {
            Some(Ok(collection)) => collection.categories(),
            _ => Vec::new(),
        }
    }
}

/// Create the quiz state and provide it to descendants.
///
/// Banks are reloaded whenever the year range changes. The session is
/// re-derived whenever the collection or any parameter changes.
pub fn use_quiz_state_provider() -> QuizState {
    let ctx = use_context::<AppContext>();

    let params = use_signal({
        let years = ctx.available_years().to_vec();
        move || SessionParams::for_available_years(&years)
    });
    let range = use_memo(move || params.read().as_ref().map(|p| p.years));

    let store = ctx.question_store();
    let collection = use_resource(move || {
        let store = Arc::clone(&store);
        let range = range();
        async move {
            let Some(range) = range else {
                return Err(ViewError::NoYears);
            };
            Ok(store.load(range).await)
        }
    });

    let mut session = use_signal(QuizSession::default);
    let rebuilds = use_signal(|| 0_u64);

    use_effect(move || {
        let _ = rebuilds();
        let next = {
            let params = params.read();
            let value = collection.value();
            let loaded = value.read();
            match (params.as_ref(), loaded.as_ref()) {
                (Some(params), Some(Ok(loaded))) => {
                    let plan = QuizBuilder::new(params).build(loaded.questions());
                    tracing::debug!(
                        matched = plan.matched,
                        selected = plan.total(),
                        "quiz session derived"
                    );
                    QuizSession::new(plan.questions)
                }
                _ => QuizSession::default(),
            }
        };
        session.set(next);
    });

    use_context_provider(|| QuizState {
        params,
        collection,
        session,
        rebuilds,
    })
}
