use quiz_core::model::{Answer, Part, Question, Year};
use services::QuizSession;

use super::test_harness::{ViewHarness, ViewKind, setup_view_harness};
use crate::vm::{QuizIntent, SetupIntent, apply_setup_intent};

fn year(v: u16) -> Year {
    Year::new(v).unwrap()
}

fn build_question(y: u16, index: u32, category: &str, answer: &str) -> Question {
    Question {
        year: year(y),
        part: Part::Morning,
        index,
        category: category.into(),
        question: format!("抵抗 $R_{index}$ を求めよ"),
        options: vec!["A".into(), "B".into(), "C".into()],
        answer: Answer::Single(answer.into()),
        question_image: (index == 1).then(|| "img/q1.png".to_string()),
        option_images: None,
    }
}

fn banks() -> Vec<(Year, Vec<Question>)> {
    vec![
        (year(2019), vec![build_question(2019, 1, "電子工学", "A")]),
        (
            year(2020),
            vec![
                build_question(2020, 1, "心電図", "A"),
                build_question(2020, 2, "血液", "B"),
            ],
        ),
    ]
}

#[tokio::test(flavor = "current_thread")]
async fn setup_view_smoke_renders_the_form() {
    let mut harness = setup_view_harness(ViewKind::Setup, banks());
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    for expected in [
        "臨床工学技士 ME2種試験対策アプリ",
        "2019年",
        "2020年",
        "すべて",
        "心電図",
        "血液",
        "例: 心電図, 血液, 回路",
        "学習を開始",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("電子工学"), "2019 categories leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn setup_view_smoke_reports_missing_banks() {
    let mut harness = setup_view_harness(ViewKind::Setup, Vec::new());
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("問題データが見つかりません。"), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_cards() {
    let mut harness = setup_view_harness(ViewKind::Quiz, banks());
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    for expected in [
        "2020年｜すべてから10問",
        "【2020年／午前／問題1／心電図】",
        "【2020年／午前／問題2／血液】",
        "data-tex=\"R_1\"",
        "/img/q1.png",
        "0 / 2 問解答済み",
        "トップに戻る",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("間違えた問題だけやり直す"), "retry shown early in {html}");
    assert!(!html.contains("結果"), "results shown early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_results_after_completion() {
    let mut harness = setup_view_harness(ViewKind::Quiz, banks());
    harness.rebuild();
    harness.settle().await;

    let dispatch = harness.quiz_handles.dispatch();
    harness.dom.in_runtime(|| {
        dispatch.call(QuizIntent::Answer {
            position: 0,
            value: "A".into(),
        });
        dispatch.call(QuizIntent::Answer {
            position: 1,
            value: "C".into(),
        });
    });
    harness.settle().await;

    let html = harness.render();
    for expected in [
        "正解！",
        "不正解（正解: B）",
        "正解数: 1 / 2",
        "chart-bar",
        "width: 100.0%;",
        "0/1",
        "間違えた問題だけやり直す",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }

    harness.dom.in_runtime(|| dispatch.call(QuizIntent::RetryIncorrect));
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("【2020年／午前／問題2／血液】"), "retry lost question in {html}");
    assert!(!html.contains("問題1／心電図"), "retry kept a correct answer in {html}");
    assert!(html.contains("0 / 1 問解答済み"), "missing progress in {html}");
}

fn session_years(harness: &ViewHarness) -> Vec<u16> {
    harness.with_session(|session| {
        session
            .questions()
            .iter()
            .map(|q| q.year.value())
            .collect()
    })
}

fn edit(harness: &ViewHarness, intent: SetupIntent) -> bool {
    let state = harness.quiz_state.get();
    harness
        .dom
        .in_runtime(|| state.update_params(|params| apply_setup_intent(params, intent)))
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_state_recomputes_when_params_change() {
    let mut harness = setup_view_harness(ViewKind::Quiz, banks());
    harness.rebuild();
    harness.settle().await;
    assert_eq!(session_years(&harness), vec![2020, 2020]);

    assert!(edit(&harness, SetupIntent::SetStart("2019".into())));
    harness.settle().await;
    assert_eq!(session_years(&harness), vec![2019, 2020, 2020]);
    let html = harness.render();
    assert!(html.contains("2019〜2020年｜すべてから10問"), "missing title in {html}");
    assert!(html.contains("【2019年／午前／問題1／電子工学】"), "missing 2019 in {html}");

    assert!(edit(&harness, SetupIntent::SetCategory("血液".into())));
    harness.settle().await;
    let categories = harness.with_session(|session| {
        session
            .questions()
            .iter()
            .map(|q| q.category.clone())
            .collect::<Vec<_>>()
    });
    assert_eq!(categories, vec!["血液".to_string()]);

    assert!(edit(&harness, SetupIntent::SetCategory("すべて".into())));
    harness.settle().await;
    assert_eq!(harness.with_session(QuizSession::len), 3);

    let dispatch = harness.quiz_handles.dispatch();
    harness.dom.in_runtime(|| {
        dispatch.call(QuizIntent::Answer {
            position: 0,
            value: "A".into(),
        });
    });
    harness.settle().await;
    assert_eq!(harness.with_session(QuizSession::answered_count), 1);

    // Rejected and unchanged edits keep the session and its answers.
    assert!(!edit(&harness, SetupIntent::SetCount("abc".into())));
    assert!(!edit(&harness, SetupIntent::SetOrder("sideways".into())));
    assert!(!edit(&harness, SetupIntent::SetCategory("すべて".into())));
    harness.settle().await;
    assert_eq!(harness.with_session(QuizSession::answered_count), 1);

    harness.dom.in_runtime(|| dispatch.call(QuizIntent::Reset));
    harness.settle().await;
    assert_eq!(harness.with_session(QuizSession::answered_count), 0);
    assert_eq!(harness.with_session(QuizSession::len), 3);
}
