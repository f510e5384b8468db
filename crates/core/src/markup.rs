//! Text helpers shared by the presentation layer.

use regex::Regex;
use std::sync::LazyLock;

static MATH_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\${1,2}[^$]+?\${1,2}").expect("math span pattern is valid")
});

/// A run of question or option text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathSegment {
    Text(String),
    /// `$...$`, typeset inline.
    Inline(String),
    /// `$$...$$`, typeset as a display block.
    Block(String),
}

/// Splits text on dollar-delimited math spans.
///
/// Escaped or unbalanced dollar signs are not handled; a lone `$` stays plain text.
#[must_use]
pub fn segment_math(text: &str) -> Vec<MathSegment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for found in MATH_SPAN.find_iter(text) {
        if found.start() > cursor {
            segments.push(MathSegment::Text(text[cursor..found.start()].to_string()));
        }
        segments.push(classify_span(found.as_str()));
        cursor = found.end();
    }

    if cursor < text.len() {
        segments.push(MathSegment::Text(text[cursor..].to_string()));
    }
    segments
}

fn classify_span(span: &str) -> MathSegment {
    if span.len() >= 4 && span.starts_with("$$") && span.ends_with("$$") {
        MathSegment::Block(span[2..span.len() - 2].to_string())
    } else if span.len() >= 2 && span.starts_with('$') && span.ends_with('$') {
        MathSegment::Inline(span[1..span.len() - 1].to_string())
    } else {
        MathSegment::Text(span.to_string())
    }
}

/// Resolves a root-relative asset path against the asset root.
///
/// `resolve_asset_path("/", "img/q1.png") == "/img/q1.png"`.
#[must_use]
pub fn resolve_asset_path(root: &str, path: &str) -> String {
    let root = root.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{root}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> MathSegment {
        MathSegment::Text(s.to_string())
    }

    #[test]
    fn plain_text_is_one_segment() {
        assert_eq!(segment_math("電流を求めよ。"), vec![text("電流を求めよ。")]);
        assert!(segment_math("").is_empty());
    }

    #[test]
    fn splits_inline_and_block_spans() {
        let segments = segment_math("抵抗 $R$ に $$V = IR$$ を適用");
        assert_eq!(
            segments,
            vec![
                text("抵抗 "),
                MathSegment::Inline("R".into()),
                text(" に "),
                MathSegment::Block("V = IR".into()),
                text(" を適用"),
            ]
        );
    }

    #[test]
    fn spans_at_the_edges_have_no_empty_text() {
        let segments = segment_math("$a$ $$b$$");
        assert_eq!(
            segments,
            vec![
                MathSegment::Inline("a".into()),
                text(" "),
                MathSegment::Block("b".into()),
            ]
        );
    }

    #[test]
    fn lone_dollar_stays_text() {
        assert_eq!(segment_math("price $5"), vec![text("price $5")]);
    }

    #[test]
    fn mismatched_delimiters_fall_back_to_inline() {
        // One opening dollar, two closing: treated as inline with the stray kept.
        assert_eq!(segment_math("$x$$"), vec![MathSegment::Inline("x$".into())]);
    }

    #[test]
    fn resolves_root_relative_paths() {
        assert_eq!(resolve_asset_path("/", "img/q1.png"), "/img/q1.png");
        assert_eq!(resolve_asset_path("/", "/img/q1.png"), "/img/q1.png");
        assert_eq!(
            resolve_asset_path("https://cdn.example/banks/", "img/q1.png"),
            "https://cdn.example/banks/img/q1.png"
        );
    }
}
